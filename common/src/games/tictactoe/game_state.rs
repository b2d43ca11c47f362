use super::board::{Board, is_valid_move};
use super::types::{CELL_COUNT, GameResult, GameStatus, Mark, WinningLine};
use super::win_detector::evaluate;

/// One round of 3x3 tic-tac-toe. X always opens.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    result: GameResult,
    last_move: Option<usize>,
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeGameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            result: GameResult::InProgress,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn status(&self) -> GameStatus {
        GameStatus::from(self.result)
    }

    pub fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        match self.result {
            GameResult::Won(line) => Some(line),
            _ => None,
        }
    }

    /// Places `mark` at `index` on behalf of the side to move.
    ///
    /// On success the result is re-evaluated and, if the round continues, the
    /// turn passes to the other mark. A rejected move leaves the state untouched.
    pub fn place_mark(&mut self, mark: Mark, index: usize) -> Result<(), String> {
        if self.is_over() {
            return Err("Game is already over".to_string());
        }

        if mark != self.current_mark {
            return Err(format!("Not {}'s turn", mark));
        }

        if index >= CELL_COUNT {
            return Err(format!("Cell {} is out of bounds", index));
        }

        if !is_valid_move(&self.board, index) {
            return Err(format!("Cell {} is already marked", index));
        }

        self.board.set(index, mark);
        self.last_move = Some(index);
        self.result = evaluate(&self.board);

        if !self.is_over() {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.result = GameResult::InProgress;
        self.last_move = None;
    }
}
