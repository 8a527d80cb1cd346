use serde::{Deserialize, Serialize};

/// One board cell: either a mine, or the number of mines among its up-to-8
/// neighbors.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    Count(u8),
    Mine,
}

impl Cell {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }

    /// Neighbor count for a non-mine cell.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Count(count) => Some(count),
            Self::Mine => None,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Count(0)
    }
}
