use serde::{Deserialize, Serialize};

/// Player-visible state of a single word cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Unmarked,
    RevealedPoison,
    Safe,
}

impl CellState {
    /// Marked cells stay marked until the round is restarted.
    pub const fn is_marked(self) -> bool {
        matches!(self, Self::RevealedPoison | Self::Safe)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Unmarked
    }
}

/// Everything a renderer needs to draw one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CellView<'a> {
    pub index: crate::CellIndex,
    pub word: &'a str,
    pub state: CellState,
    pub highlighted: bool,
}
