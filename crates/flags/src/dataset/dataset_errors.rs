use thiserror::Error;

/// Errors raised while building a [`ReferenceDataset`](super::ReferenceDataset).
///
/// These indicate a data-authoring bug in the source table. A dataset that
/// fails any of these checks is never handed out.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// The source is not valid JSON or a record is missing a required field.
    #[error("Malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unsupported dataset version {found} (expected {expected})")]
    UnsupportedVersion { found: u32, expected: u32 },

    #[error("Duplicate 2-letter country code: {0}")]
    DuplicateCountryCode2(String),

    #[error("Duplicate 3-letter country code: {0}")]
    DuplicateCountryCode3(String),

    #[error("Duplicate currency code: {0}")]
    DuplicateCurrency(String),

    /// A country code does not have the expected number of ASCII letters.
    #[error("Invalid country code '{code}' for {name}: expected {expected} letters")]
    InvalidCountryCode {
        name: String,
        code: String,
        expected: usize,
    },

    #[error("Currency '{0}' has an empty code")]
    EmptyCurrencyCode(String),
}
