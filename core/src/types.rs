use core::fmt;
use core::time::Duration;
use serde::{Deserialize, Serialize};

/// Position of a word in the loaded list, stable for the whole round.
pub type CellIndex = usize;

/// Count type used for poison bookkeeping.
pub type PoisonCount = u8;

/// How long a freshly hidden poison stays highlighted before the round moves on.
pub const HIGHLIGHT_DURATION: Duration = Duration::from_millis(500);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {}", self.number())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Setup,
    Team1Poison,
    Team2Poison,
    Playing,
    GameOver,
}

impl GamePhase {
    pub const fn is_placing(self) -> bool {
        matches!(self, Self::Team1Poison | Self::Team2Poison)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::GameOver)
    }
}

impl Default for GamePhase {
    fn default() -> Self {
        Self::Setup
    }
}
