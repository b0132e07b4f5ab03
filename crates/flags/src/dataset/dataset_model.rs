use serde::{Deserialize, Serialize};

use crate::constants::{COUNTRIES_ASSET_DIR, CURRENCIES_ASSET_DIR, NO_CAPITAL};

/// On-disk shape of `flags.json`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetCatalog {
    pub version: u32,
    pub countries: Vec<CountryRecord>,
    pub currencies: Vec<CurrencyRecord>,
}

/// A country or territory with its flag and currency metadata.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CountryRecord {
    /// File name of the flag under the countries asset directory (e.g. "af.svg").
    #[serde(rename = "flag")]
    pub flag_asset_id: String,
    pub name: String,
    pub code2: String,
    pub code3: String,
    /// Currency in use. Legacy codes (e.g. "MRO") may have no currency record.
    #[serde(rename = "currency")]
    pub currency_code: String,
    /// May be empty.
    #[serde(rename = "symbol")]
    pub currency_symbol: String,
    #[serde(rename = "currency_full")]
    pub currency_full_name: String,
    /// "-" when the territory has no capital.
    pub capital: String,
}

impl CountryRecord {
    /// Relative asset key, e.g. "countries/ch.svg". `None` when there is no flag asset.
    pub fn asset_key(&self) -> Option<String> {
        asset_key(COUNTRIES_ASSET_DIR, &self.flag_asset_id)
    }

    pub fn has_capital(&self) -> bool {
        !self.capital.is_empty() && self.capital != NO_CAPITAL
    }
}

/// A currency and its representative flag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CurrencyRecord {
    /// Opaque key. Some carry footnote suffixes such as "MRU[12]".
    pub code: String,
    #[serde(rename = "name")]
    pub display_name: String,
    /// Empty for abstract units, funds and precious metals (XAU, XDR, ...).
    #[serde(rename = "flag")]
    pub flag_asset_id: String,
}

impl CurrencyRecord {
    /// Relative asset key, e.g. "currencies/16px-Flag_of_Switzerland.svg.png".
    pub fn asset_key(&self) -> Option<String> {
        asset_key(CURRENCIES_ASSET_DIR, &self.flag_asset_id)
    }
}

fn asset_key(dir: &str, flag_asset_id: &str) -> Option<String> {
    if flag_asset_id.is_empty() {
        None
    } else {
        Some(format!("{}/{}", dir, flag_asset_id))
    }
}
