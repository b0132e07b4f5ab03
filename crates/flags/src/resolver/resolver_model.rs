use std::sync::Arc;

use thiserror::Error;

use crate::errors::Error;

/// Why a query was rejected before any lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("code is empty")]
    Empty,

    #[error("code length should be either 2 or 3 (code: {code})")]
    CodeLength { code: String },
}

/// Outcome of a lookup.
///
/// `NotFound` and `InvalidInput` are expected outcomes of arbitrary user
/// input, not failures.
#[derive(Debug, PartialEq, Eq)]
pub enum Resolution<T> {
    Found(Arc<T>),
    /// Well-formed query with no entry. Carries the normalized input.
    NotFound(String),
    InvalidInput(InvalidInput),
}

// Only the `Arc` is cloned, so `T` need not be `Clone`.
impl<T> Clone for Resolution<T> {
    fn clone(&self) -> Self {
        match self {
            Resolution::Found(record) => Resolution::Found(Arc::clone(record)),
            Resolution::NotFound(input) => Resolution::NotFound(input.clone()),
            Resolution::InvalidInput(invalid) => Resolution::InvalidInput(invalid.clone()),
        }
    }
}

impl<T> Resolution<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn record(&self) -> Option<&Arc<T>> {
        match self {
            Resolution::Found(record) => Some(record),
            _ => None,
        }
    }

    pub fn into_record(self) -> Option<Arc<T>> {
        match self {
            Resolution::Found(record) => Some(record),
            _ => None,
        }
    }

    /// The normalized query for a miss, or the offending code for a bad length.
    pub fn normalized_input(&self) -> Option<&str> {
        match self {
            Resolution::Found(_) => None,
            Resolution::NotFound(input) => Some(input.as_str()),
            Resolution::InvalidInput(InvalidInput::CodeLength { code }) => Some(code.as_str()),
            Resolution::InvalidInput(InvalidInput::Empty) => Some(""),
        }
    }

    pub fn into_result(self) -> Result<Arc<T>, Error> {
        match self {
            Resolution::Found(record) => Ok(record),
            Resolution::NotFound(input) => Err(Error::NotFound(input)),
            Resolution::InvalidInput(invalid) => Err(Error::InvalidInput(invalid)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_accessors() {
        let resolution = Resolution::Found(Arc::new(42));
        assert!(resolution.is_found());
        assert_eq!(resolution.record().map(|r| **r), Some(42));
        assert_eq!(resolution.normalized_input(), None);
        assert_eq!(*resolution.into_result().unwrap(), 42);
    }

    #[test]
    fn test_not_found_carries_input() {
        let resolution: Resolution<u32> = Resolution::NotFound("ZZ".to_string());
        assert!(!resolution.is_found());
        assert_eq!(resolution.normalized_input(), Some("ZZ"));
        assert!(resolution.clone().into_record().is_none());
        assert!(matches!(resolution.into_result(), Err(Error::NotFound(code)) if code == "ZZ"));
    }

    #[test]
    fn test_clone_shares_record_without_clone_bound() {
        #[derive(Debug)]
        struct Opaque;

        let resolution = Resolution::Found(Arc::new(Opaque));
        let copy = resolution.clone();
        assert!(Arc::ptr_eq(
            resolution.record().unwrap(),
            copy.record().unwrap()
        ));
    }

    #[test]
    fn test_invalid_input_message() {
        let invalid = InvalidInput::CodeLength {
            code: "SWITZERLAND".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "code length should be either 2 or 3 (code: SWITZERLAND)"
        );

        let resolution: Resolution<u32> = Resolution::InvalidInput(invalid);
        assert_eq!(resolution.normalized_input(), Some("SWITZERLAND"));
        assert!(matches!(
            resolution.into_result(),
            Err(Error::InvalidInput(InvalidInput::CodeLength { .. }))
        ));
    }
}
