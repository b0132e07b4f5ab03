use std::time::Duration;

use crate::errors::ViewError;

pub const IMAGES_PATH_VAR: &str = "FLAGCC_IMAGES_PATH";
pub const DEBOUNCE_MS_VAR: &str = "FLAGCC_DEBOUNCE_MS";

const DEFAULT_IMAGES_PATH: &str = "/node_modules/flag-cc/flags/";
const DEFAULT_DEBOUNCE_MS: u64 = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagConfig {
    /// Prefix joined with asset keys to build image sources. Always ends with '/'.
    pub images_path: String,
    /// Delay before a requested update is resolved.
    pub debounce: Duration,
}

impl Default for FlagConfig {
    fn default() -> Self {
        Self {
            images_path: DEFAULT_IMAGES_PATH.to_string(),
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
        }
    }
}

impl FlagConfig {
    /// Read configuration from the environment (and `.env` if present).
    pub fn from_env() -> Result<Self, ViewError> {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_vars<F>(get: F) -> Result<Self, ViewError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let images_path = get(IMAGES_PATH_VAR)
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_IMAGES_PATH.to_string());

        let debounce_ms = match get(DEBOUNCE_MS_VAR) {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ViewError::InvalidConfigValue {
                    key: DEBOUNCE_MS_VAR.to_string(),
                    value: raw.clone(),
                })?,
            None => DEFAULT_DEBOUNCE_MS,
        };

        Ok(Self::default()
            .with_images_path(images_path)
            .with_debounce(Duration::from_millis(debounce_ms)))
    }

    pub fn with_images_path(mut self, images_path: impl Into<String>) -> Self {
        let mut images_path = images_path.into();
        if !images_path.ends_with('/') {
            images_path.push('/');
        }
        self.images_path = images_path;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Full image source for an asset key such as "countries/ch.svg".
    pub fn image_src(&self, asset_key: &str) -> String {
        format!("{}{}", self.images_path, asset_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = FlagConfig::from_vars(vars(&[])).unwrap();
        assert_eq!(config, FlagConfig::default());
        assert_eq!(config.images_path, "/node_modules/flag-cc/flags/");
        assert_eq!(config.debounce, Duration::from_millis(1));
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = FlagConfig::from_vars(vars(&[
            (IMAGES_PATH_VAR, "/static/flags"),
            (DEBOUNCE_MS_VAR, " 25 "),
        ]))
        .unwrap();
        assert_eq!(config.images_path, "/static/flags/");
        assert_eq!(config.debounce, Duration::from_millis(25));
        assert_eq!(config.image_src("countries/ch.svg"), "/static/flags/countries/ch.svg");
    }

    #[test]
    fn test_blank_images_path_falls_back_to_default() {
        let config = FlagConfig::from_vars(vars(&[(IMAGES_PATH_VAR, "  ")])).unwrap();
        assert_eq!(config.images_path, DEFAULT_IMAGES_PATH);
    }

    #[test]
    fn test_invalid_debounce_is_rejected() {
        let result = FlagConfig::from_vars(vars(&[(DEBOUNCE_MS_VAR, "soon")]));
        assert!(matches!(
            result,
            Err(ViewError::InvalidConfigValue { key, value }) if key == DEBOUNCE_MS_VAR && value == "soon"
        ));
    }
}
