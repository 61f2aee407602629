use thiserror::Error;

use crate::point::Point;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Rows of differing lengths, or a row count that doesn't match the row length.
    #[error("inconsistent row lengths: {0}")]
    Format(String),

    #[error("{point} is out of bounds on a board {side_length} wide")]
    OutOfBounds { point: Point, side_length: usize },
}
