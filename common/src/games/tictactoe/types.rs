use std::fmt;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Mark::Empty
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
            Mark::Empty => "",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicTacToeBotType {
    Random,
    Minimax,
}

/// Three cell indices forming a row, column or diagonal.
pub type Line = [usize; 3];

/// Scan order matters: the first completed line is the one reported.
pub const LINES: [Line; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize) -> Self {
        Self::new(index % BOARD_SIDE, index / BOARD_SIDE)
    }

    pub fn to_index(self) -> usize {
        self.y * BOARD_SIDE + self.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: Line,
}

impl WinningLine {
    pub fn new(mark: Mark, cells: Line) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        Position::from_index(self.cells[0])
    }

    pub fn end(&self) -> Position {
        Position::from_index(self.cells[2])
    }

    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Outcome derived from a board alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    InProgress,
    Won(WinningLine),
    Draw,
}

impl GameResult {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameResult::Won(line) => Some(line.mark),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl From<GameResult> for GameStatus {
    fn from(result: GameResult) -> Self {
        match result {
            GameResult::InProgress => GameStatus::InProgress,
            GameResult::Draw => GameStatus::Draw,
            GameResult::Won(line) => match line.mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            },
        }
    }
}
