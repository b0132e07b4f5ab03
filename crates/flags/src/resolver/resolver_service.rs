use std::sync::Arc;

use log::{debug, warn};

use super::resolver_model::{InvalidInput, Resolution};
use super::resolver_traits::FlagResolverTrait;
use crate::dataset::{CountryRecord, CurrencyRecord, ReferenceDataset};

/// Stateless resolver over a shared [`ReferenceDataset`].
///
/// Cheap to clone; construct one per call or share it freely across threads.
#[derive(Debug, Clone)]
pub struct Resolver {
    dataset: Arc<ReferenceDataset>,
}

impl Resolver {
    pub fn new(dataset: Arc<ReferenceDataset>) -> Self {
        Self { dataset }
    }

    /// Resolver over the bundled dataset.
    pub fn embedded() -> Self {
        Self::new(ReferenceDataset::embedded())
    }

    pub fn dataset(&self) -> &Arc<ReferenceDataset> {
        &self.dataset
    }

    /// Resolve a country by its 2- or 3-letter code, case-insensitively.
    pub fn resolve_country(&self, raw: &str) -> Resolution<CountryRecord> {
        let code = match normalize(raw) {
            Ok(code) => code,
            Err(invalid) => return Resolution::InvalidInput(invalid),
        };

        let record = match code.chars().count() {
            2 => self.dataset.country_by_code2(&code),
            3 => self.dataset.country_by_code3(&code),
            _ => {
                warn!("code length should be either 2 or 3 (code: {})", code);
                return Resolution::InvalidInput(InvalidInput::CodeLength { code });
            }
        };

        match record {
            Some(record) => Resolution::Found(Arc::clone(record)),
            None => {
                debug!("No country found for code {}", code);
                Resolution::NotFound(code)
            }
        }
    }

    /// Resolve a currency by its code, case-insensitively.
    pub fn resolve_currency(&self, raw: &str) -> Resolution<CurrencyRecord> {
        let code = match normalize(raw) {
            Ok(code) => code,
            Err(invalid) => return Resolution::InvalidInput(invalid),
        };

        match self.dataset.currency_by_code(&code) {
            Some(record) => Resolution::Found(Arc::clone(record)),
            None => {
                debug!("No currency found for code {}", code);
                Resolution::NotFound(code)
            }
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::embedded()
    }
}

impl FlagResolverTrait for Resolver {
    fn resolve_country(&self, raw: &str) -> Resolution<CountryRecord> {
        Resolver::resolve_country(self, raw)
    }

    fn resolve_currency(&self, raw: &str) -> Resolution<CurrencyRecord> {
        Resolver::resolve_currency(self, raw)
    }
}

/// Trim and uppercase. Blank input is rejected.
fn normalize(raw: &str) -> Result<String, InvalidInput> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InvalidInput::Empty);
    }
    Ok(trimmed.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Resolver {
        let json = r#"{
            "version": 1,
            "countries": [
                { "flag": "ch.svg", "name": "Switzerland", "code2": "CH", "code3": "CHE",
                  "currency": "CHF", "symbol": "CHF", "currency_full": "Swiss Franc", "capital": "Berne" },
                { "flag": "fr.svg", "name": "France", "code2": "FR", "code3": "FRA",
                  "currency": "EUR", "symbol": "€", "currency_full": "Euro", "capital": "Paris" }
            ],
            "currencies": [
                { "code": "CHF", "name": "Swiss franc", "flag": "16px-Flag_of_Switzerland.svg.png" },
                { "code": "STN[14]", "name": "São Tomé and Príncipe dobra", "flag": "23px-Flag_of_Sao_Tome_and_Principe.svg.png" },
                { "code": "XDR", "name": "Special drawing rights", "flag": "" }
            ]
        }"#;
        Resolver::new(Arc::new(ReferenceDataset::from_json(json).unwrap()))
    }

    #[test]
    fn test_resolve_country_by_code2_and_code3() {
        let resolver = fixture();
        let by2 = resolver.resolve_country("CH").into_record().unwrap();
        let by3 = resolver.resolve_country("CHE").into_record().unwrap();
        assert!(Arc::ptr_eq(&by2, &by3));
        assert_eq!(by2.name, "Switzerland");
    }

    #[test]
    fn test_resolve_country_is_case_insensitive_and_trimmed() {
        let resolver = fixture();
        let upper = resolver.resolve_country("FR");
        assert_eq!(resolver.resolve_country("fr"), upper);
        assert_eq!(resolver.resolve_country("Fr"), upper);
        assert_eq!(resolver.resolve_country("  fra \n").record().unwrap().code2, "FR");
    }

    #[test]
    fn test_unknown_country_returns_normalized_input() {
        let resolver = fixture();
        assert_eq!(
            resolver.resolve_country("zz"),
            Resolution::NotFound("ZZ".to_string())
        );
        assert_eq!(
            resolver.resolve_country("abc"),
            Resolution::NotFound("ABC".to_string())
        );
    }

    #[test]
    fn test_wrong_length_is_invalid_input() {
        let resolver = fixture();
        assert_eq!(
            resolver.resolve_country("switzerland"),
            Resolution::InvalidInput(InvalidInput::CodeLength {
                code: "SWITZERLAND".to_string()
            })
        );
        assert!(matches!(
            resolver.resolve_country("c"),
            Resolution::InvalidInput(InvalidInput::CodeLength { .. })
        ));
        assert!(matches!(
            resolver.resolve_country("XYZ1"),
            Resolution::InvalidInput(InvalidInput::CodeLength { .. })
        ));
    }

    #[test]
    fn test_empty_input_is_invalid_input() {
        let resolver = fixture();
        assert_eq!(
            resolver.resolve_country(""),
            Resolution::InvalidInput(InvalidInput::Empty)
        );
        assert_eq!(
            resolver.resolve_country("   "),
            Resolution::InvalidInput(InvalidInput::Empty)
        );
        assert_eq!(
            resolver.resolve_currency(""),
            Resolution::InvalidInput(InvalidInput::Empty)
        );
    }

    #[test]
    fn test_resolve_currency() {
        let resolver = fixture();
        let franc = resolver.resolve_currency("chf").into_record().unwrap();
        assert_eq!(franc.display_name, "Swiss franc");
        assert_eq!(franc.code, "CHF");

        assert_eq!(
            resolver.resolve_currency("abc"),
            Resolution::NotFound("ABC".to_string())
        );
    }

    #[test]
    fn test_currency_has_no_length_dispatch() {
        let resolver = fixture();
        assert!(resolver.resolve_currency("stn[14]").is_found());
        assert_eq!(
            resolver.resolve_currency("STN"),
            Resolution::NotFound("STN".to_string())
        );
    }

    #[test]
    fn test_currency_without_flag_is_still_found() {
        let resolver = fixture();
        let sdr = resolver.resolve_currency("xdr").into_record().unwrap();
        assert!(sdr.flag_asset_id.is_empty());
        assert_eq!(sdr.asset_key(), None);
    }

    #[test]
    fn test_trait_object_dispatch() {
        let resolver: Arc<dyn FlagResolverTrait> = Arc::new(fixture());
        assert!(resolver.resolve_country("ch").is_found());
        assert!(resolver.resolve_currency("CHF").is_found());
    }
}
