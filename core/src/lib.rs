#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;
pub use view::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;
mod view;

/// Dimensions of a game: a `size × size` grid holding `mines` mines.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new(size: Coord, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mines
    }
}

/// A fully-populated minefield: every cell is either a mine or carries an
/// accurate count of mine-adjacent neighbors.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Board {
    /// All-zero board with no mines placed yet.
    pub fn empty(size: Coord) -> Self {
        Self {
            cells: Array2::default((size, size).to_nd_index()),
            mine_count: 0,
        }
    }

    /// Deterministic board from an explicit mine set, mostly for fixtures.
    pub fn from_mine_coords(size: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        let mut board = Self::empty(size);

        for &coords in mine_coords {
            board.validate_coords(coords)?;
            board.place_mine(coords);
        }

        Ok(board)
    }

    /// Turns `coords` into a mine and bumps the counts of its non-mine
    /// neighbors. Returns `false` without touching anything when the cell is
    /// already a mine, so rejection sampling can retry. A cell converted here
    /// simply discards whatever count it had accumulated.
    pub fn place_mine(&mut self, coords: Coord2) -> bool {
        if self.cells[coords.to_nd_index()].is_mine() {
            return false;
        }

        self.cells[coords.to_nd_index()] = Cell::Mine;
        self.mine_count += 1;

        for pos in self.cells.iter_neighbors(coords) {
            if let Cell::Count(count) = &mut self.cells[pos.to_nd_index()] {
                *count += 1;
            }
        }

        true
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig {
            size: self.size(),
            mines: self.mine_count,
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_mine_coords_computes_neighbor_counts() {
        let board = Board::from_mine_coords(3, &[(0, 2), (2, 0)]).unwrap();

        let expected = [
            [Cell::Count(0), Cell::Count(1), Cell::Mine],
            [Cell::Count(1), Cell::Count(2), Cell::Count(1)],
            [Cell::Mine, Cell::Count(1), Cell::Count(0)],
        ];
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(board[(row, col)], expected[row as usize][col as usize]);
            }
        }
        assert_eq!(board.mine_count(), 2);
        assert_eq!(board.safe_cell_count(), 7);
    }

    #[test]
    fn from_mine_coords_rejects_out_of_bounds() {
        assert_eq!(
            Board::from_mine_coords(3, &[(3, 0)]),
            Err(GameError::InvalidCoords)
        );
    }

    #[test]
    fn place_mine_is_idempotent_per_cell() {
        let mut board = Board::empty(2);

        assert!(board.place_mine((0, 0)));
        assert!(!board.place_mine((0, 0)));
        assert_eq!(board.mine_count(), 1);
        assert_eq!(board[(1, 1)], Cell::Count(1));
    }

    #[test]
    fn placing_a_mine_over_a_counted_cell_discards_its_count() {
        let mut board = Board::empty(2);

        board.place_mine((0, 0));
        assert_eq!(board[(0, 1)], Cell::Count(1));

        board.place_mine((0, 1));
        assert_eq!(board[(0, 1)], Cell::Mine);
        // the first mine never counts itself or other mines
        assert_eq!(board[(0, 0)], Cell::Mine);
        assert_eq!(board[(1, 0)], Cell::Count(2));
        assert_eq!(board[(1, 1)], Cell::Count(2));
    }

    #[test]
    fn config_reports_target_reveal_count() {
        let config = GameConfig::new(5, 3);
        assert_eq!(config.total_cells(), 25);
        assert_eq!(config.safe_cell_count(), 22);
    }
}
