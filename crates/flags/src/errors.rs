//! Root error type for the flag lookup crate.
//!
//! Lookup misses and malformed queries are ordinary values of
//! [`Resolution`](crate::resolver::Resolution); this type exists for callers
//! that prefer `?` propagation via [`Resolution::into_result`](crate::resolver::Resolution::into_result)
//! and for dataset construction failures.

use thiserror::Error;

use crate::dataset::DatasetError;
use crate::resolver::InvalidInput;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Dataset construction failed: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("No entry found for '{0}'")]
    NotFound(String),
}
