use core::fmt;
use serde::{Deserialize, Serialize};

use crate::Team;

/// Status line shown above the grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    AwaitingWords,
    HidePoison(Team),
    Started,
    PoisonHit,
    AllCleared,
}

/// Colour family for the status line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusTone {
    Prompt,
    Play,
    Final,
}

impl Status {
    pub const fn tone(self) -> StatusTone {
        use Status::*;
        match self {
            AwaitingWords | HidePoison(_) | PoisonHit => StatusTone::Prompt,
            Started => StatusTone::Play,
            AllCleared => StatusTone::Final,
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::AwaitingWords
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AwaitingWords => f.write_str("📋 Import a word list to get started"),
            Self::HidePoison(team) => {
                let stage = match team {
                    Team::One => "Stage one",
                    Team::Two => "Stage two",
                };
                write!(
                    f,
                    "🤫 {stage}: someone from {team} clicks a word to hide the poison (everyone else, eyes closed)"
                )
            }
            Self::Started => {
                f.write_str("🎮 Game on! Take turns reading a word out loud and clicking it")
            }
            Self::PoisonHit => f.write_str("⚠️ Poison hit! The game goes on, careful..."),
            Self::AllCleared => f.write_str("🏆 Game over! All the poison has been cleared!"),
        }
    }
}

/// Banner raised when a poisoned word is clicked. The sink decides how long
/// to show it, using [`Notification::is_final`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    PoisonHit,
    AllCleared,
}

impl Notification {
    pub const fn is_final(self) -> bool {
        matches!(self, Self::AllCleared)
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::PoisonHit => "Argh! Poison!",
            Self::AllCleared => "All poison cleared!",
        }
    }

    pub const fn detail(self) -> &'static str {
        match self {
            Self::PoisonHit => "Keep looking!",
            Self::AllCleared => "Game over!",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.title(), self.detail())
    }
}
