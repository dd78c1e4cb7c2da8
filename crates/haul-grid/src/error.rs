//! Grid-subsystem error type.

use thiserror::Error;

/// Errors produced by `haul-grid`.
///
/// Note that "no path exists" is deliberately **not** an error — pathfinding
/// returns `None` for unreachable goals because that is a normal, expected
/// outcome callers must handle.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("{what} length {got} does not match {expected} tiles")]
    DimensionMismatch {
        expected: usize,
        got: usize,
        what: &'static str,
    },

    #[error("tile ({x}, {y}) is out of bounds")]
    OutOfBounds { x: i32, y: i32 },
}

pub type GridResult<T> = Result<T, GridError>;
