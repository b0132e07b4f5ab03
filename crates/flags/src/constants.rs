/// Asset subdirectory holding country flags.
pub const COUNTRIES_ASSET_DIR: &str = "countries";

/// Asset subdirectory holding currency flags.
pub const CURRENCIES_ASSET_DIR: &str = "currencies";

/// Capital value used for territories without one.
pub const NO_CAPITAL: &str = "-";

/// Schema version of the bundled `flags.json` asset.
pub const DATASET_VERSION: u32 = 1;
