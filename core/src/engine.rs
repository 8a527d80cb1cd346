use alloc::collections::VecDeque;
use core::fmt;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions: `Active -> Won` and `Active -> Lost`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Active,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Active
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Active => "active",
            Self::Won => "won",
            Self::Lost => "lost",
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    Revealed,
    HitMine,
    Won,
}

/// One Minesweeper game from creation to termination.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    revealed: Array2<bool>,
    revealed_count: CellCount,
    status: GameStatus,
}

impl GameSession {
    pub fn new(board: Board) -> Self {
        let size = board.size();
        Self {
            board,
            revealed: Array2::default((size, size).to_nd_index()),
            revealed_count: 0,
            status: Default::default(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn size(&self) -> Coord {
        self.board.size()
    }

    pub fn mine_count(&self) -> CellCount {
        self.board.mine_count()
    }

    /// Number of non-mine cells that must be revealed to win.
    pub fn target_reveal_count(&self) -> CellCount {
        self.board.safe_cell_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub(crate) fn board(&self) -> &Board {
        &self.board
    }

    /// Applies a single reveal move.
    ///
    /// Rejected moves leave the session untouched. Revealing a mine ends the
    /// game without flipping the mine's own revealed flag; it becomes visible
    /// through render disclosure only.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords)?;

        if self.status.is_finished() {
            return Err(GameError::AlreadyEnded(self.status));
        }
        if self.revealed[coords.to_nd_index()] {
            return Err(GameError::AlreadyRevealed);
        }

        if self.board.contains_mine(coords) {
            log::debug!("mine hit at {:?}", coords);
            self.status = GameStatus::Lost;
            return Ok(RevealOutcome::HitMine);
        }

        self.flood_reveal(coords);

        if self.revealed_count == self.board.safe_cell_count() {
            self.status = GameStatus::Won;
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Work-list flood fill seeded on a non-mine cell: reveal each visited
    /// cell and expand only through zero-count cells. Neighbors of a zero
    /// cell are never mines, so the fill cannot reveal one. Auxiliary memory
    /// stays bounded by the grid size, no call-stack recursion.
    fn flood_reveal(&mut self, seed: Coord2) {
        let mut to_visit = VecDeque::from([seed]);

        while let Some(coords) = to_visit.pop_front() {
            if self.revealed[coords.to_nd_index()] {
                continue;
            }

            self.revealed[coords.to_nd_index()] = true;
            self.revealed_count += 1;
            log::trace!("revealed {:?}: {:?}", coords, self.board[coords]);

            if self.board[coords] == Cell::Count(0) {
                let revealed = &self.revealed;
                to_visit.extend(
                    revealed
                        .iter_neighbors(coords)
                        .filter(|&pos| !revealed[pos.to_nd_index()]),
                );
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn with_revealed(board: Board, revealed_coords: &[Coord2]) -> Self {
        let mut session = Self::new(board);
        for &coords in revealed_coords {
            session.revealed[coords.to_nd_index()] = true;
            session.revealed_count += 1;
        }
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(size: Coord, mines: &[Coord2]) -> Board {
        Board::from_mine_coords(size, mines).unwrap()
    }

    #[test]
    fn revealing_a_mine_loses_without_touching_any_cell() {
        let mut session = GameSession::new(board(3, &[(1, 1)]));

        let outcome = session.reveal((1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(session.status(), GameStatus::Lost);
        assert_eq!(session.revealed_count(), 0);
        for row in 0..3 {
            for col in 0..3 {
                assert!(!session.is_revealed((row, col)));
            }
        }
    }

    #[test]
    fn zero_reveal_opens_region_and_numbered_border() {
        let mut session = GameSession::new(board(3, &[(2, 2)]));

        let outcome = session.reveal((0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.revealed_count(), 8);
        assert!(session.is_revealed((1, 1)));
        assert!(!session.is_revealed((2, 2)));
    }

    #[test]
    fn single_center_mine_on_5x5_wins_in_one_move() {
        let mut session = GameSession::new(board(5, &[(2, 2)]));

        let outcome = session.reveal((0, 0)).unwrap();

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(session.revealed_count(), 24);
        assert_eq!(session.target_reveal_count(), 24);
        assert!(!session.is_revealed((2, 2)));
    }

    #[test]
    fn numbered_cell_reveals_only_itself() {
        let mut session = GameSession::new(board(3, &[(0, 2), (2, 0)]));

        let outcome = session.reveal((1, 1)).unwrap();

        assert_eq!(outcome, RevealOutcome::Revealed);
        assert_eq!(session.status(), GameStatus::Active);
        assert_eq!(session.revealed_count(), 1);
        assert!(session.is_revealed((1, 1)));
        assert!(!session.is_revealed((1, 0)));
    }

    #[test]
    fn win_only_when_every_safe_cell_is_revealed() {
        // diagonal mines leave no zero cells, so no flood fill can help
        let mut session = GameSession::new(board(2, &[(0, 0), (1, 1)]));

        assert_eq!(session.reveal((0, 1)).unwrap(), RevealOutcome::Revealed);
        assert_eq!(session.status(), GameStatus::Active);
        assert_eq!(session.reveal((1, 0)).unwrap(), RevealOutcome::Won);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.revealed_count(), session.target_reveal_count());
    }

    #[test]
    fn re_revealing_a_cell_is_rejected_without_mutation() {
        let mut session = GameSession::new(board(3, &[(0, 2), (2, 0)]));

        session.reveal((1, 1)).unwrap();
        let before_count = session.revealed_count();

        assert_eq!(session.reveal((1, 1)), Err(GameError::AlreadyRevealed));
        assert_eq!(session.revealed_count(), before_count);
        assert_eq!(session.status(), GameStatus::Active);
    }

    #[test]
    fn moves_on_a_finished_game_report_the_terminal_status() {
        let mut session = GameSession::new(board(2, &[(0, 0)]));

        session.reveal((0, 0)).unwrap();

        assert_eq!(
            session.reveal((1, 1)),
            Err(GameError::AlreadyEnded(GameStatus::Lost))
        );
    }

    #[test]
    fn out_of_bounds_coordinates_are_rejected() {
        let mut session = GameSession::new(board(3, &[(0, 0)]));

        assert_eq!(session.reveal((3, 1)), Err(GameError::InvalidCoords));
        assert_eq!(session.reveal((1, 3)), Err(GameError::InvalidCoords));
        assert_eq!(session.revealed_count(), 0);
    }
}
