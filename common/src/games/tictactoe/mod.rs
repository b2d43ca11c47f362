mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod stats;
mod types;
mod win_detector;

pub use board::{Board, get_available_moves, is_valid_move};
pub use bot_controller::{BotInput, calculate_minimax_move, calculate_move};
pub use game_state::TicTacToeGameState;
pub use session::TicTacToeSession;
pub use settings::{DEFAULT_BOT_DELAY, GameMode, TicTacToeSessionSettings};
pub use stats::{STATS_STORAGE_KEY, SessionStats, StatsStore};
pub use types::{
    BOARD_SIDE, CELL_COUNT, GameResult, GameStatus, LINES, Line, Mark, Position,
    TicTacToeBotType, WinningLine,
};
pub use win_detector::{check_win, check_win_with_line, evaluate};
