#![no_std]

extern crate alloc;

use core::time::Duration;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use status::*;
pub use types::*;
pub use words::*;

mod cell;
mod engine;
mod error;
mod status;
mod types;
mod words;

/// Highlight-then-advance step queued after a team hides its poison.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingTransition {
    pub cell: CellIndex,
    pub from: GamePhase,
    /// Clock reading, on the caller's monotonic clock, at which the round advances.
    pub deadline: Duration,
}

impl PendingTransition {
    pub const fn new(cell: CellIndex, from: GamePhase, now: Duration) -> Self {
        Self {
            cell,
            from,
            deadline: now.saturating_add(HIGHLIGHT_DURATION),
        }
    }

    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.deadline
    }

    /// Time left until the deadline, zero once it has passed.
    pub const fn remaining(&self, now: Duration) -> Duration {
        self.deadline.saturating_sub(now)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    NoChange,
    PoisonHidden(Team),
    Safe,
    PoisonFound,
    AllPoisonsFound,
}

impl SelectOutcome {
    pub const fn has_update(self) -> bool {
        use SelectOutcome::*;
        match self {
            NoChange => false,
            PoisonHidden(_) => true,
            Safe => true,
            PoisonFound => true,
            AllPoisonsFound => true,
        }
    }

    pub const fn notification(self) -> Option<Notification> {
        use SelectOutcome::*;
        match self {
            PoisonFound => Some(Notification::PoisonHit),
            AllPoisonsFound => Some(Notification::AllCleared),
            NoChange | PoisonHidden(_) | Safe => None,
        }
    }
}
