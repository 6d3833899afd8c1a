//! Flat JSON-backed translations with one table per supported locale.
//!
//! # Design
//! - Tables are compiled in and parsed once on first use; they are never mutated.
//! - Lookups never fail: a key missing from the active table renders as the key itself.
//! - There is no cross-locale fallback, so a gap in one table stays visible.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

pub mod resolver;

pub use resolver::{
    Hydration, LOCALE_STORAGE_KEY, LocaleResolver, LocaleStore, MemoryStore, PersistOutcome,
    StorageError,
};

/// Supported display locales.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocaleCode {
    /// English.
    En,
    /// Gujarati.
    Gu,
}

impl LocaleCode {
    /// All supported locales; the first entry is the default.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Gu]
    }

    /// Tag persisted to storage and used as the table name.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Gu => "gu",
        }
    }

    /// Name of the locale in its own script, for the language toggle.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Gu => "ગુજરાતી",
        }
    }

    /// BCP 47 tag applied to the document `lang` attribute.
    #[must_use]
    pub const fn html_lang(self) -> &'static str {
        match self {
            Self::En => "en-IN",
            Self::Gu => "gu-IN",
        }
    }

    /// The other locale of the pair.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::En => Self::Gu,
            Self::Gu => Self::En,
        }
    }

    /// Exact match against the supported tags.
    #[must_use]
    pub fn from_code(tag: &str) -> Option<Self> {
        Self::all().into_iter().find(|locale| locale.code() == tag)
    }
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for LocaleCode {
    type Err = LocaleError;

    fn from_str(tag: &str) -> Result<Self, Self::Err> {
        Self::from_code(tag).ok_or_else(|| LocaleError::Unsupported {
            tag: tag.to_string(),
        })
    }
}

/// Default locale used until a persisted choice is restored.
pub const DEFAULT_LOCALE: LocaleCode = LocaleCode::all()[0];

/// Errors raised by the locale layer.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LocaleError {
    /// The tag is not one of [`LocaleCode::all`].
    #[error("unsupported locale tag {tag:?}")]
    Unsupported {
        /// Rejected tag as supplied.
        tag: String,
    },
}

/// Errors raised while parsing a translation table.
#[derive(Debug, Error)]
pub enum TableError {
    /// The document is not a flat object of strings.
    #[error("translation table is not a flat string map: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Key to display-string mapping for one locale.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TranslationTable {
    entries: HashMap<String, String>,
}

impl TranslationTable {
    /// Parse a flat JSON object of string values.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Malformed`] when the document is not a JSON object
    /// whose values are all strings.
    pub fn parse(raw: &str) -> Result<Self, TableError> {
        let entries: HashMap<String, String> = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    /// Raw lookup without fallback.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Whether the table defines `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate the defined keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of defined keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

static EN_TABLE: LazyLock<TranslationTable> =
    LazyLock::new(|| load_table(LocaleCode::En, include_str!("../../i18n/en.json")));
static GU_TABLE: LazyLock<TranslationTable> =
    LazyLock::new(|| load_table(LocaleCode::Gu, include_str!("../../i18n/gu.json")));

fn load_table(locale: LocaleCode, raw: &str) -> TranslationTable {
    TranslationTable::parse(raw).unwrap_or_else(|err| {
        report_table_error(locale, &err);
        TranslationTable::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn report_table_error(locale: LocaleCode, err: &TableError) {
    gloo::console::error!("translation table failed to load", locale.code(), err.to_string());
}

#[cfg(not(target_arch = "wasm32"))]
const fn report_table_error(_locale: LocaleCode, _err: &TableError) {}

/// Compiled-in table for `locale`.
#[must_use]
pub fn table(locale: LocaleCode) -> &'static TranslationTable {
    match locale {
        LocaleCode::En => &EN_TABLE,
        LocaleCode::Gu => &GU_TABLE,
    }
}

/// Active-locale view handed to components through context.
#[derive(Clone, Copy, Debug)]
pub struct TranslationBundle {
    /// Locale backing this bundle.
    pub locale: LocaleCode,
    table: &'static TranslationTable,
}

impl PartialEq for TranslationBundle {
    fn eq(&self, other: &Self) -> bool {
        self.locale == other.locale
    }
}

impl TranslationBundle {
    /// Bundle over the compiled-in table for `locale`.
    #[must_use]
    pub fn new(locale: LocaleCode) -> Self {
        Self {
            locale,
            table: table(locale),
        }
    }

    /// Localized text for `key`, or `key` itself when the table lacks it.
    #[must_use]
    pub fn text(&self, key: &str) -> String {
        self.table.get(key).unwrap_or(key).to_string()
    }
}

impl Default for TranslationBundle {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_locale_is_first_supported() {
        assert_eq!(DEFAULT_LOCALE, LocaleCode::En);
        assert_eq!(LocaleCode::all()[0], DEFAULT_LOCALE);
    }

    #[test]
    fn tags_match_exactly() {
        assert_eq!(LocaleCode::from_code("gu"), Some(LocaleCode::Gu));
        assert_eq!(LocaleCode::from_code("en"), Some(LocaleCode::En));
        assert_eq!(LocaleCode::from_code("GU"), None);
        assert_eq!(LocaleCode::from_code("en-US"), None);
        assert_eq!(
            "fr".parse::<LocaleCode>(),
            Err(LocaleError::Unsupported { tag: "fr".into() })
        );
    }

    #[test]
    fn toggle_swaps_the_pair() {
        assert_eq!(LocaleCode::En.toggled(), LocaleCode::Gu);
        assert_eq!(LocaleCode::Gu.toggled(), LocaleCode::En);
    }

    #[test]
    fn brand_scenario_resolves_per_locale() {
        assert_eq!(TranslationBundle::new(LocaleCode::En).text("brand"), "Mandli Bank");
        assert_eq!(TranslationBundle::new(LocaleCode::Gu).text("brand"), "મંડળી બેંક");
    }

    #[test]
    fn missing_key_renders_as_key_in_every_locale() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            assert_eq!(bundle.text("nonexistentKey"), "nonexistentKey");
            assert_eq!(bundle.text(""), "");
        }
    }

    #[test]
    fn present_keys_return_table_values() {
        for locale in LocaleCode::all() {
            let bundle = TranslationBundle::new(locale);
            let table = table(locale);
            assert!(!table.is_empty());
            for key in table.keys() {
                assert_eq!(Some(bundle.text(key).as_str()), table.get(key));
            }
        }
    }

    #[test]
    fn tables_have_structural_parity() {
        let en = table(LocaleCode::En);
        let gu = table(LocaleCode::Gu);
        assert_eq!(en.len(), gu.len());
        for key in en.keys() {
            assert!(gu.contains(key), "gu is missing {key}");
        }
        for key in gu.keys() {
            assert!(en.contains(key), "en is missing {key}");
        }
    }

    #[test]
    fn nested_documents_are_rejected() {
        assert!(TranslationTable::parse(r#"{"nav":{"home":"Home"}}"#).is_err());
        assert!(TranslationTable::parse("[]").is_err());
        let table = TranslationTable::parse(r#"{"home":"Home"}"#).ok();
        assert_eq!(table.and_then(|t| t.get("home").map(str::to_owned)), Some("Home".into()));
    }
}
