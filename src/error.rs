//! Crate error type
//!
//! Vector math never fails; errors only come from loading requirement tables
//! out of JSON.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A requirement row does not have exactly one entry per slot
    #[error("requirement row {row} has {len} slots, expected {expected}")]
    RaggedRow { row: usize, len: usize, expected: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
