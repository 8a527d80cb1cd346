use super::*;

/// Uniform random placement by rejection sampling: sample `(row, col)` pairs
/// and skip cells that are already mines. Deterministic for a given seed.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::prelude::*;

        let total_cells = config.total_cells();
        let mut board = Board::empty(config.size);

        // callers validate mines < size², but a full board must not spin forever
        if config.mines >= total_cells {
            log::warn!(
                "mine count {} does not fit a board of {} cells, filling every cell",
                config.mines,
                total_cells
            );
            for row in 0..config.size {
                for col in 0..config.size {
                    board.place_mine((row, col));
                }
            }
            return board;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines_placed: CellCount = 0;
        while mines_placed < config.mines {
            let row = rng.random_range(0..config.size);
            let col = rng.random_range(0..config.size);
            if board.place_mine((row, col)) {
                mines_placed += 1;
            }
        }

        // double check mine count
        if board.mine_count() != config.mines {
            log::warn!(
                "generated board mine count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines
            );
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force_count(board: &Board, coords: Coord2) -> u8 {
        let mut count = 0;
        let size = board.size();
        for d_row in -1i16..=1 {
            for d_col in -1i16..=1 {
                if d_row == 0 && d_col == 0 {
                    continue;
                }
                let row = coords.0 as i16 + d_row;
                let col = coords.1 as i16 + d_col;
                if row < 0 || row >= size as i16 || col < 0 || col >= size as i16 {
                    continue;
                }
                if board.contains_mine((row as Coord, col as Coord)) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn generates_exact_mine_count() {
        for seed in 0..8 {
            let board = RandomBoardGenerator::new(seed).generate(GameConfig::new(8, 10));
            assert_eq!(board.mine_count(), 10);
            assert_eq!(board.safe_cell_count(), 54);
        }
    }

    #[test]
    fn neighbor_counts_match_final_mine_set() {
        let board = RandomBoardGenerator::new(42).generate(GameConfig::new(9, 20));

        for row in 0..9 {
            for col in 0..9 {
                match board[(row, col)] {
                    Cell::Mine => {}
                    Cell::Count(count) => {
                        assert_eq!(count, brute_force_count(&board, (row, col)));
                    }
                }
            }
        }
    }

    #[test]
    fn same_seed_reproduces_the_board() {
        let config = GameConfig::new(6, 7);
        let first = RandomBoardGenerator::new(7).generate(config);
        let second = RandomBoardGenerator::new(7).generate(config);
        assert_eq!(first, second);
    }

    #[test]
    fn dense_board_still_terminates() {
        let board = RandomBoardGenerator::new(1).generate(GameConfig::new(4, 15));
        assert_eq!(board.mine_count(), 15);
        assert_eq!(board.safe_cell_count(), 1);
    }
}
