//! Session-level Minesweeper engine: owns the session table and exposes the
//! three boundary operations (create, move, inspect) the transport calls
//! into. All game rules live in `sweepd-core`; this crate validates boundary
//! input, serializes access per session, and projects sessions into
//! player-visible responses.

use sweepd_core::{BoardGenerator, Coord, GameConfig, GameSession, RandomBoardGenerator};

pub use error::*;
pub use store::*;
pub use types::*;

mod error;
mod store;
mod types;

/// Upper bound on the grid dimension accepted at creation.
pub const DEFAULT_MAX_GRID_SIZE: Coord = 64;

pub struct GameService {
    max_grid_size: Coord,
    store: SessionStore,
}

impl Default for GameService {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_GRID_SIZE)
    }
}

impl GameService {
    pub fn new(max_grid_size: Coord) -> Self {
        Self {
            max_grid_size,
            store: SessionStore::new(),
        }
    }

    /// Creates a session with a freshly seeded random board and stores it
    /// under the requested id, silently replacing any session already stored
    /// there.
    pub fn create_session(&self, req: &CreateRequest) -> Result<CreateResponse> {
        let (game_id, config) = self.validate_create(req)?;
        let generator = RandomBoardGenerator::new(rand::random());
        Ok(self.create_session_with(game_id, config, generator))
    }

    /// Same as [`Self::create_session`] but with an explicit generator, for
    /// hosts and tests that need reproducible boards. Assumes `config` was
    /// validated.
    pub fn create_session_with<G: BoardGenerator>(
        &self,
        game_id: &str,
        config: GameConfig,
        generator: G,
    ) -> CreateResponse {
        let session = GameSession::new(generator.generate(config));
        let grid = session.visible_grid();
        self.store.put(game_id, session);
        log::info!(
            "created game {game_id:?}: {size}x{size}, {mines} mines",
            size = config.size,
            mines = config.mines,
        );

        CreateResponse {
            game_id: game_id.to_owned(),
            size: config.size,
            mines: config.mines,
            grid,
        }
    }

    /// Applies one reveal move. Mines are disclosed in the returned grid
    /// once the move ends the game.
    pub fn apply_move(&self, req: &MoveRequest) -> Result<MoveResponse> {
        let (Some(game_id), Some(row), Some(col)) = (req.game_id.as_deref(), req.row, req.col)
        else {
            return Err(ServiceError::MissingMoveField);
        };
        if game_id.is_empty() {
            return Err(ServiceError::MissingMoveField);
        }

        let handle = self
            .store
            .get(game_id)
            .ok_or(ServiceError::GameNotFound)?;
        let mut session = lock_session(&handle);

        let status = session.status();
        if status.is_finished() {
            return Err(ServiceError::GameOver(status));
        }

        let size = i64::from(session.size());
        if row < 0 || row >= size || col < 0 || col >= size {
            return Err(ServiceError::InvalidCoords);
        }
        let coords = (row as Coord, col as Coord);

        let outcome = session.reveal(coords)?;
        log::debug!("game {game_id:?}: revealed {coords:?}, outcome {outcome:?}");

        Ok(MoveResponse {
            status: session.status(),
            grid: session.visible_grid(),
        })
    }

    /// Reads a session without mutating it. Mines are disclosed in the grid
    /// once the session is terminal.
    pub fn inspect_session(&self, game_id: &str) -> Result<GameSnapshot> {
        if game_id.is_empty() {
            return Err(ServiceError::MissingGameId);
        }

        let handle = self
            .store
            .get(game_id)
            .ok_or(ServiceError::GameNotFound)?;
        let session = lock_session(&handle);

        Ok(GameSnapshot {
            game_id: game_id.to_owned(),
            size: session.size(),
            mines: session.mine_count(),
            status: session.status(),
            grid: session.visible_grid(),
        })
    }

    fn validate_create<'req>(&self, req: &'req CreateRequest) -> Result<(&'req str, GameConfig)> {
        let (Some(game_id), Some(size), Some(mines)) =
            (req.game_id.as_deref(), req.size, req.mines)
        else {
            return Err(ServiceError::MissingCreateField);
        };
        if game_id.is_empty() {
            return Err(ServiceError::MissingCreateField);
        }

        if size <= 0 {
            return Err(ServiceError::NonPositiveSize);
        }
        if size > i64::from(self.max_grid_size) {
            return Err(ServiceError::SizeOverLimit(self.max_grid_size));
        }
        if mines <= 0 {
            return Err(ServiceError::NonPositiveMines);
        }
        if mines >= size * size {
            return Err(ServiceError::TooManyMines);
        }

        let size = size as Coord;
        Ok((game_id, GameConfig::new(size, mines as u16)))
    }
}
