use super::types::{CELL_COUNT, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Builds a board from a 9-character layout such as `"XX.O....."`.
    /// Anything other than `X` or `O` is an empty cell.
    #[cfg(test)]
    pub fn from_layout(layout: &str) -> Self {
        let mut cells = [Mark::Empty; CELL_COUNT];
        for (cell, ch) in cells.iter_mut().zip(layout.chars()) {
            *cell = match ch {
                'X' => Mark::X,
                'O' => Mark::O,
                _ => Mark::Empty,
            };
        }
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied()
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = mark;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn clear(&mut self) {
        self.cells = [Mark::Empty; CELL_COUNT];
    }
}

/// Empty cell indices in ascending order.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_empty())
        .map(|(index, _)| index)
        .collect()
}

pub fn is_valid_move(board: &Board, index: usize) -> bool {
    board.get(index) == Some(Mark::Empty)
}
