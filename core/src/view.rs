use alloc::vec::Vec;
use core::fmt;
use serde::{Serialize, Serializer};

use crate::*;

/// Player-visible projection of one cell, rendered as a single display
/// token: `" "` for a revealed zero, `"1"`..`"8"` for a revealed count,
/// `"#"` for a hidden cell, `"*"` for a disclosed mine.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CellView {
    Blank,
    Count(u8),
    Hidden,
    Mine,
}

impl fmt::Display for CellView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str(" "),
            Self::Count(count) => write!(f, "{}", count),
            Self::Hidden => f.write_str("#"),
            Self::Mine => f.write_str("*"),
        }
    }
}

impl Serialize for CellView {
    fn serialize<S: Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl GameSession {
    /// Grid as the player may see it: mines stay hidden while the game is
    /// active and are disclosed automatically once it has ended.
    pub fn visible_grid(&self) -> Vec<Vec<CellView>> {
        self.visible_grid_with(self.status().is_finished())
    }

    pub fn visible_grid_with(&self, show_mines: bool) -> Vec<Vec<CellView>> {
        let size = self.size();
        (0..size)
            .map(|row| {
                (0..size)
                    .map(|col| self.cell_view((row, col), show_mines))
                    .collect()
            })
            .collect()
    }

    fn cell_view(&self, coords: Coord2, show_mines: bool) -> CellView {
        match (self.is_revealed(coords), self.board()[coords]) {
            (true, Cell::Count(0)) => CellView::Blank,
            (true, Cell::Count(count)) => CellView::Count(count),
            (false, Cell::Mine) if show_mines => CellView::Mine,
            _ => CellView::Hidden,
        }
    }
}
