//! Error types for the MAC association store.

use ndwatch_types::{MacAddress, ParseError};
use std::collections::TryReserveError;
use thiserror::Error;

/// Errors surfaced by [`MacSet`](crate::MacSet) operations.
///
/// Every mutation returns an explicit status; none of them panic or abort
/// on failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying table could not grow
    #[error("out of memory growing MAC set: {0}")]
    NoMemory(#[from] TryReserveError),

    /// A required host payload was absent
    #[error("host payload required but absent")]
    MissingPayload,

    /// Requested key is not in the set; a normal outcome on removal
    #[error("no entry for MAC {0}")]
    NotFound(MacAddress),

    /// Text form of a MAC address failed validation
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type alias for store operations
pub type Result<T> = std::result::Result<T, StoreError>;
