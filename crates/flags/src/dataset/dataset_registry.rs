//! JSON-driven reference dataset.
//!
//! Loads `flags.json` at compile time via `include_str!` and builds the
//! code2 / code3 / currency indexes once. Custom datasets (test fixtures,
//! alternate tables) go through the same validated construction path.

use std::borrow::Cow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::info;

use super::dataset_errors::DatasetError;
use super::dataset_model::{CountryRecord, CurrencyRecord, DatasetCatalog};
use crate::constants::DATASET_VERSION;

const EMBEDDED_JSON: &str = include_str!("flags.json");

lazy_static! {
    static ref EMBEDDED: Arc<ReferenceDataset> = match ReferenceDataset::from_json(EMBEDDED_JSON) {
        Ok(dataset) => {
            info!(
                "Loaded flag dataset: {} countries, {} currencies",
                dataset.country_count(),
                dataset.currency_count()
            );
            Arc::new(dataset)
        }
        Err(e) => panic!("bundled flags.json is inconsistent: {}", e),
    };
}

/// Uppercase a code, borrowing when it is already canonical.
pub(crate) fn canonical_code(code: &str) -> Cow<'_, str> {
    if code.chars().any(char::is_lowercase) {
        Cow::Owned(code.to_uppercase())
    } else {
        Cow::Borrowed(code)
    }
}

/// Immutable country and currency tables.
///
/// Country records are indexed by both their 2-letter and 3-letter codes; both
/// indexes point at the same shared record. The currency table is keyed
/// independently and is not derived from the country records.
#[derive(Debug)]
pub struct ReferenceDataset {
    countries: Vec<Arc<CountryRecord>>,
    currencies: Vec<Arc<CurrencyRecord>>,
    by_code2: HashMap<String, Arc<CountryRecord>>,
    by_code3: HashMap<String, Arc<CountryRecord>>,
    by_currency: HashMap<String, Arc<CurrencyRecord>>,
}

impl ReferenceDataset {
    /// Shared handle to the bundled dataset, built on first access.
    ///
    /// # Panics
    /// If the bundled `flags.json` is inconsistent. This is a packaging bug,
    /// never a runtime condition.
    pub fn embedded() -> Arc<ReferenceDataset> {
        Arc::clone(&EMBEDDED)
    }

    /// Parse and validate a dataset from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let catalog: DatasetCatalog = serde_json::from_str(json)?;
        Self::from_catalog(catalog)
    }

    pub fn from_catalog(catalog: DatasetCatalog) -> Result<Self, DatasetError> {
        if catalog.version != DATASET_VERSION {
            return Err(DatasetError::UnsupportedVersion {
                found: catalog.version,
                expected: DATASET_VERSION,
            });
        }
        Self::new(catalog.countries, catalog.currencies)
    }

    /// Build a dataset from records in source order.
    ///
    /// Codes are normalized to uppercase. Any duplicate key or malformed
    /// country code rejects the whole dataset.
    pub fn new(
        countries: Vec<CountryRecord>,
        currencies: Vec<CurrencyRecord>,
    ) -> Result<Self, DatasetError> {
        let mut by_code2 = HashMap::with_capacity(countries.len());
        let mut by_code3 = HashMap::with_capacity(countries.len());
        let mut country_list = Vec::with_capacity(countries.len());

        for mut country in countries {
            country.code2 = country.code2.trim().to_uppercase();
            country.code3 = country.code3.trim().to_uppercase();
            check_country_code(&country.name, &country.code2, 2)?;
            check_country_code(&country.name, &country.code3, 3)?;

            let country = Arc::new(country);
            match by_code2.entry(country.code2.clone()) {
                Entry::Occupied(_) => {
                    return Err(DatasetError::DuplicateCountryCode2(country.code2.clone()))
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(&country));
                }
            }
            match by_code3.entry(country.code3.clone()) {
                Entry::Occupied(_) => {
                    return Err(DatasetError::DuplicateCountryCode3(country.code3.clone()))
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(&country));
                }
            }
            country_list.push(country);
        }

        let mut by_currency = HashMap::with_capacity(currencies.len());
        let mut currency_list = Vec::with_capacity(currencies.len());

        for mut currency in currencies {
            currency.code = currency.code.trim().to_uppercase();
            if currency.code.is_empty() {
                return Err(DatasetError::EmptyCurrencyCode(currency.display_name));
            }

            let currency = Arc::new(currency);
            match by_currency.entry(currency.code.clone()) {
                Entry::Occupied(_) => {
                    return Err(DatasetError::DuplicateCurrency(currency.code.clone()))
                }
                Entry::Vacant(slot) => {
                    slot.insert(Arc::clone(&currency));
                }
            }
            currency_list.push(currency);
        }

        Ok(Self {
            countries: country_list,
            currencies: currency_list,
            by_code2,
            by_code3,
            by_currency,
        })
    }

    /// All countries in source order.
    pub fn all_countries(&self) -> &[Arc<CountryRecord>] {
        &self.countries
    }

    /// All currencies in source order.
    pub fn all_currencies(&self) -> &[Arc<CurrencyRecord>] {
        &self.currencies
    }

    pub fn country_by_code2(&self, code2: &str) -> Option<&Arc<CountryRecord>> {
        self.by_code2.get(canonical_code(code2).as_ref())
    }

    pub fn country_by_code3(&self, code3: &str) -> Option<&Arc<CountryRecord>> {
        self.by_code3.get(canonical_code(code3).as_ref())
    }

    pub fn currency_by_code(&self, code: &str) -> Option<&Arc<CurrencyRecord>> {
        self.by_currency.get(canonical_code(code).as_ref())
    }

    /// Countries whose currency code matches, in source order.
    pub fn countries_using_currency(&self, code: &str) -> Vec<Arc<CountryRecord>> {
        let code = canonical_code(code);
        self.countries
            .iter()
            .filter(|c| c.currency_code == code.as_ref())
            .cloned()
            .collect()
    }

    /// Currency record for a country's currency code, if the table has one.
    pub fn currency_of(&self, country: &CountryRecord) -> Option<&Arc<CurrencyRecord>> {
        self.currency_by_code(&country.currency_code)
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn currency_count(&self) -> usize {
        self.currencies.len()
    }
}

fn check_country_code(name: &str, code: &str, expected: usize) -> Result<(), DatasetError> {
    let valid = code.chars().count() == expected && code.chars().all(|c| c.is_ascii_alphabetic());
    if valid {
        Ok(())
    } else {
        Err(DatasetError::InvalidCountryCode {
            name: name.to_string(),
            code: code.to_string(),
            expected,
        })
    }
}
