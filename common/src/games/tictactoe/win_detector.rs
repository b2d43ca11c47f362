use super::board::Board;
use super::types::{GameResult, LINES, Mark, WinningLine};

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    let cells = board.cells();
    LINES.iter().find_map(|&line| {
        let [a, b, c] = line;
        let mark = cells[a];
        (mark != Mark::Empty && mark == cells[b] && mark == cells[c])
            .then(|| WinningLine::new(mark, line))
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

/// Classifies a board. A completed line takes precedence over a full board.
pub fn evaluate(board: &Board) -> GameResult {
    if let Some(line) = check_win_with_line(board) {
        return GameResult::Won(line);
    }
    if board.is_full() {
        return GameResult::Draw;
    }
    GameResult::InProgress
}
