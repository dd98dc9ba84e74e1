//! Generator configuration errors

use thiserror::Error;

/// Errors raised while configuring a map generation run.
///
/// The pipeline itself never fails: coverage shortfalls are soft outcomes
/// and malformed ratios only skew the output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// Classification and statistics divide by the cell count, so an empty
    /// grid is rejected up front.
    #[error("map size must be at least 1, got {0}")]
    InvalidSize(usize),
}
