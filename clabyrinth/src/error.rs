use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid dimension {width}x{height}, both sides must be positive")]
    InvalidDimension { width: i32, height: i32 },
    #[error("Expected {expected} cells, got {found}")]
    CellCountMismatch { expected: usize, found: usize },
}
