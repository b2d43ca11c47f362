use crate::games::SessionRng;
use super::board::{Board, get_available_moves};
use super::game_state::TicTacToeGameState;
use super::types::{Mark, TicTacToeBotType};
use super::win_detector::{check_win, evaluate};

const WIN_SCORE: i32 = 10;

pub struct BotInput {
    pub board: Board,
    pub bot_mark: Mark,
}

impl BotInput {
    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self {
            board: *state.board(),
            bot_mark: state.current_mark(),
        }
    }
}

/// Picks the cell the bot plays next, or `None` when the round is already
/// decided or the bot mark is `Empty`.
pub fn calculate_move(
    bot_type: TicTacToeBotType,
    input: &BotInput,
    rng: &mut SessionRng,
) -> Option<usize> {
    if evaluate(&input.board).is_terminal() {
        return None;
    }

    match bot_type {
        TicTacToeBotType::Random => calculate_random_move(input, rng),
        TicTacToeBotType::Minimax => calculate_minimax_move(input),
    }
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Option<usize> {
    input.bot_mark.opponent()?;
    rng.choose(&get_available_moves(&input.board))
}

/// Exhaustive search. Ties go to the lowest index.
pub fn calculate_minimax_move(input: &BotInput) -> Option<usize> {
    let bot_mark = input.bot_mark;
    let opponent_mark = bot_mark.opponent()?;

    let mut board = input.board;
    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in get_available_moves(&input.board) {
        board.set(index, bot_mark);

        let score = minimax(
            &mut board,
            0,
            false,
            bot_mark,
            opponent_mark,
            i32::MIN,
            i32::MAX,
        );

        board.set(index, Mark::Empty);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

fn score_board(board: &Board, bot_mark: Mark) -> i32 {
    match check_win(board) {
        Some(winner) if winner == bot_mark => WIN_SCORE,
        Some(_) => -WIN_SCORE,
        None => 0,
    }
}

// Wins lose value with depth and losses gain it, so the bot takes the quickest
// win and stretches out a lost position as long as possible.
fn minimax(
    board: &mut Board,
    depth: i32,
    is_maximizing: bool,
    bot_mark: Mark,
    opponent_mark: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    let score = score_board(board, bot_mark);
    if score > 0 {
        return score - depth;
    }
    if score < 0 {
        return score + depth;
    }

    let moves = get_available_moves(board);
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            board.set(index, bot_mark);
            let eval = minimax(board, depth + 1, false, bot_mark, opponent_mark, alpha, beta);
            board.set(index, Mark::Empty);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            board.set(index, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot_mark, opponent_mark, alpha, beta);
            board.set(index, Mark::Empty);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
