use super::resolver_model::Resolution;
use crate::dataset::{CountryRecord, CurrencyRecord};

/// Lookup contract consumed by presentation code.
///
/// Implementations must be pure: the same input against the same dataset
/// always yields the same resolution.
pub trait FlagResolverTrait: Send + Sync {
    /// Resolve a 2- or 3-letter country code.
    fn resolve_country(&self, raw: &str) -> Resolution<CountryRecord>;

    /// Resolve a currency code.
    fn resolve_currency(&self, raw: &str) -> Resolution<CurrencyRecord>;
}
