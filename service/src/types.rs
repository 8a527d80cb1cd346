use serde::{Deserialize, Serialize};
use sweepd_core::{CellCount, CellView, Coord, GameStatus};

/// Boundary input for session creation. Fields mirror the JSON body the
/// transport deserializes, so any of them may be absent; a non-numeric value
/// fails deserialization before reaching the engine.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateRequest {
    pub game_id: Option<String>,
    pub size: Option<i64>,
    pub mines: Option<i64>,
}

impl CreateRequest {
    pub fn new(game_id: &str, size: i64, mines: i64) -> Self {
        Self {
            game_id: Some(game_id.to_owned()),
            size: Some(size),
            mines: Some(mines),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveRequest {
    pub game_id: Option<String>,
    pub row: Option<i64>,
    pub col: Option<i64>,
}

impl MoveRequest {
    pub fn new(game_id: &str, row: i64, col: i64) -> Self {
        Self {
            game_id: Some(game_id.to_owned()),
            row: Some(row),
            col: Some(col),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResponse {
    pub game_id: String,
    pub size: Coord,
    pub mines: CellCount,
    pub grid: Vec<Vec<CellView>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub status: GameStatus,
    pub grid: Vec<Vec<CellView>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub game_id: String,
    pub size: Coord,
    pub mines: CellCount,
    pub status: GameStatus,
    pub grid: Vec<Vec<CellView>>,
}
