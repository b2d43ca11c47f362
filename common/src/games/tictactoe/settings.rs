use std::time::Duration;
use serde::{Deserialize, Serialize};

use super::types::{Mark, TicTacToeBotType};

pub const DEFAULT_BOT_DELAY: Duration = Duration::from_millis(220);

/// Who plays O. X is always a human.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    TwoPlayers,
    VsComputerEasy,
    VsComputerHard,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [
        GameMode::TwoPlayers,
        GameMode::VsComputerEasy,
        GameMode::VsComputerHard,
    ];

    pub fn bot_type(self) -> Option<TicTacToeBotType> {
        match self {
            GameMode::TwoPlayers => None,
            GameMode::VsComputerEasy => Some(TicTacToeBotType::Random),
            GameMode::VsComputerHard => Some(TicTacToeBotType::Minimax),
        }
    }

    pub fn bot_mark(self) -> Option<Mark> {
        self.bot_type().map(|_| Mark::O)
    }

    pub fn label(self) -> &'static str {
        match self {
            GameMode::TwoPlayers => "Two players",
            GameMode::VsComputerEasy => "Computer (easy)",
            GameMode::VsComputerHard => "Computer (hard)",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    pub bot_delay: Duration,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::default(),
            bot_delay: DEFAULT_BOT_DELAY,
        }
    }
}
