//! Error types for lifepath parsing and rendering

use thiserror::Error;

/// Fatal problems found while turning the input table into a document.
///
/// `line` values are 1-based and count physical lines of the input, so the
/// header is line 1.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifepathError {
    /// The input contained no header row
    #[error("input has no header row")]
    EmptyInput,

    /// A column the renderer needs is absent from the header
    #[error("unknown column `{0}` (not present in header)")]
    UnknownColumn(String),

    /// A data row is shorter than the header says it should be
    #[error("line {line}: row has no value for column `{column}`")]
    MissingField { line: usize, column: String },

    /// The `id` cell is not an integer
    #[error("line {line}: id `{value}` is not an integer")]
    InvalidId { line: usize, value: String },
}

pub type Result<T, E = LifepathError> = std::result::Result<T, E>;
