use std::sync::atomic::{AtomicU64, Ordering};

use clabyrinth::{Dims, Grid, MazeError};
use serde::{Deserialize, Serialize};

pub const STATUS_SUCCESS: &str = "success";

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// A generated maze in the shape web clients expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeDocument {
    pub id: u64,
    pub width: usize,
    pub height: usize,
    /// Wall masks, row by row.
    pub cells: Vec<u8>,
    /// Character-art preview.
    pub test: String,
    pub status: String,
}

impl MazeDocument {
    pub fn new(id: u64, grid: &Grid, highlight: Option<Dims>) -> Self {
        MazeDocument {
            id,
            width: grid.width(),
            height: grid.height(),
            cells: grid.masks(),
            test: grid.render(highlight),
            status: STATUS_SUCCESS.to_string(),
        }
    }

    /// Document with the next id of this process, ids start at 1.
    pub fn next(grid: &Grid, highlight: Option<Dims>) -> Self {
        Self::new(NEXT_ID.fetch_add(1, Ordering::Relaxed), grid, highlight)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_grid(&self) -> Result<Grid, MazeError> {
        Grid::from_masks(Dims(self.width as i32, self.height as i32), &self.cells)
    }
}
