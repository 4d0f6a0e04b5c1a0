//! Error types for the simulator.

use thiserror::Error;

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in a simulation run.
///
/// Every variant is a configuration or input error detected before the
/// per-reference loop starts. Processing a page reference never fails.
#[derive(Debug, Error)]
pub enum Error {
    /// Page size must be a positive number of bytes.
    #[error("Invalid page size: {0} (must be a positive integer)")]
    InvalidPageSize(u64),

    /// Frame capacity must be a positive number of frames.
    #[error("Invalid frame capacity: {0} (must be a positive integer)")]
    InvalidCapacity(usize),

    /// An address token is not a non-negative integer.
    #[error("Invalid address format: {0:?}")]
    InvalidAddress(String),

    /// The reference string is empty, so there is nothing to simulate.
    #[error("No addresses to simulate")]
    NoAddresses,

    /// I/O error while reading an address file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
