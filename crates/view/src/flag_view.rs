use std::sync::Arc;

use flagcc_core::{CountryRecord, CurrencyRecord, FlagResolverTrait, Resolution};
use serde::Serialize;

use crate::config::FlagConfig;

/// Which table a flag came from. Serialized as the widget's `flag-type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    Country,
    Currency,
}

/// Widget input. A country code takes precedence over a currency.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagQuery {
    pub code: Option<String>,
    pub currency: Option<String>,
}

impl FlagQuery {
    pub fn country(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            currency: None,
        }
    }

    pub fn currency(currency: impl Into<String>) -> Self {
        Self {
            code: None,
            currency: Some(currency.into()),
        }
    }

    /// The effective lookup, or `None` when both fields are blank.
    ///
    /// Unlike the original widget, a whitespace-only `code` counts as blank
    /// and falls through to `currency`.
    pub fn target(&self) -> Option<(FlagKind, &str)> {
        fn non_blank(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.trim().is_empty())
        }

        if let Some(code) = non_blank(&self.code) {
            Some((FlagKind::Country, code))
        } else {
            non_blank(&self.currency).map(|currency| (FlagKind::Currency, currency))
        }
    }

    pub fn is_idle(&self) -> bool {
        self.target().is_none()
    }
}

/// Render-ready result of a flag lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlagView {
    pub kind: FlagKind,
    /// Image source. `None` when unknown or when the record has no flag asset.
    pub src: Option<String>,
    /// Country name, currency code, or the normalized input when unknown.
    pub title: String,
    pub is_unknown: bool,
    /// Text displayed in place of the image. Empty when the lookup succeeded.
    pub unknown_text: String,
    pub country: Option<Arc<CountryRecord>>,
    pub currency: Option<Arc<CurrencyRecord>>,
}

impl FlagView {
    /// Resolve a query into a view. Returns `None` for an idle query.
    pub fn build(
        resolver: &dyn FlagResolverTrait,
        config: &FlagConfig,
        query: &FlagQuery,
    ) -> Option<FlagView> {
        let (kind, raw) = query.target()?;
        let view = match kind {
            FlagKind::Country => match resolver.resolve_country(raw) {
                Resolution::Found(country) => FlagView {
                    kind,
                    src: country.asset_key().map(|key| config.image_src(&key)),
                    title: country.name.clone(),
                    is_unknown: false,
                    unknown_text: String::new(),
                    country: Some(country),
                    currency: None,
                },
                miss => Self::unknown(kind, &miss),
            },
            FlagKind::Currency => match resolver.resolve_currency(raw) {
                Resolution::Found(currency) => FlagView {
                    kind,
                    src: currency.asset_key().map(|key| config.image_src(&key)),
                    title: currency.code.clone(),
                    is_unknown: false,
                    unknown_text: String::new(),
                    country: None,
                    currency: Some(currency),
                },
                miss => Self::unknown(kind, &miss),
            },
        };
        Some(view)
    }

    fn unknown<T>(kind: FlagKind, miss: &Resolution<T>) -> FlagView {
        let text = miss.normalized_input().unwrap_or_default().to_string();
        FlagView {
            kind,
            src: None,
            title: text.clone(),
            is_unknown: true,
            unknown_text: text,
            country: None,
            currency: None,
        }
    }
}
