//! Active-locale state with best-effort durable persistence.
//!
//! # Design
//! - One resolver per application session, owned by the root provider; no globals.
//! - Writes go through [`LocaleResolver::set_locale`] only; storage failures never
//!   block the in-memory change and are reported as [`PersistOutcome::Failed`].
//! - The persisted tag is read once by [`LocaleResolver::hydrate`]; anything other
//!   than an exact supported tag leaves the default in place.

use super::{DEFAULT_LOCALE, LocaleCode, LocaleError, TranslationBundle};
use thiserror::Error;

/// Storage key holding the persisted locale tag.
pub const LOCALE_STORAGE_KEY: &str = "locale";

/// Failures reported by a [`LocaleStore`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is disabled or missing in this client.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    /// Storage refused the write (quota, privacy mode).
    #[error("storage rejected write to {key}: {detail}")]
    Rejected {
        /// Key being written.
        key: &'static str,
        /// Backend detail.
        detail: String,
    },
}

/// Durable client storage for the selected locale tag.
pub trait LocaleStore {
    /// Read the persisted tag, `Ok(None)` when nothing was saved.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend cannot be read.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Persist `tag`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backend refuses the write.
    fn save(&mut self, tag: &str) -> Result<(), StorageError>;
}

/// In-memory store used natively and in tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    value: Option<String>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryStore {
    /// Empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            value: None,
            fail_reads: false,
            fail_writes: false,
        }
    }

    /// Store pre-seeded with a raw persisted value.
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::new()
        }
    }

    /// Make every read fail, as a disabled storage backend would.
    #[must_use]
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Make every write fail, as a full storage backend would.
    #[must_use]
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Currently stored raw value.
    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl LocaleStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("reads disabled".to_string()));
        }
        Ok(self.value.clone())
    }

    fn save(&mut self, tag: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::Rejected {
                key: LOCALE_STORAGE_KEY,
                detail: "quota exceeded".to_string(),
            });
        }
        self.value = Some(tag.to_string());
        Ok(())
    }
}

/// Result of the persistence step after a locale change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// The tag reached durable storage.
    Saved,
    /// The write failed; the in-memory selection changed anyway.
    Failed(StorageError),
}

impl PersistOutcome {
    /// Whether the write succeeded.
    #[must_use]
    pub const fn is_saved(&self) -> bool {
        matches!(self, Self::Saved)
    }
}

/// Result of the one-shot startup read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    /// A supported tag was found and adopted.
    Restored(LocaleCode),
    /// Nothing was persisted; the default stays active.
    NothingStored,
    /// A value was found but is not a supported tag; the default stays active.
    Ignored(String),
    /// Storage could not be read; the default stays active.
    Unreadable(StorageError),
    /// Hydration already ran for this resolver.
    AlreadyHydrated,
}

/// Session-scoped locale state.
#[derive(Debug)]
pub struct LocaleResolver<S> {
    store: S,
    active: LocaleCode,
    hydrated: bool,
}

impl<S: LocaleStore> LocaleResolver<S> {
    /// Resolver starting on [`DEFAULT_LOCALE`]; storage is not read until [`Self::hydrate`].
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self {
            store,
            active: DEFAULT_LOCALE,
            hydrated: false,
        }
    }

    /// Currently active locale.
    #[must_use]
    pub const fn active_locale(&self) -> LocaleCode {
        self.active
    }

    /// Bundle for the active locale.
    #[must_use]
    pub fn bundle(&self) -> TranslationBundle {
        TranslationBundle::new(self.active)
    }

    /// Localized text for `key` in the active locale, or `key` when missing.
    #[must_use]
    pub fn translate(&self, key: &str) -> String {
        self.bundle().text(key)
    }

    /// Adopt the persisted tag, if any. Only the first call reads storage.
    pub fn hydrate(&mut self) -> Hydration {
        if self.hydrated {
            return Hydration::AlreadyHydrated;
        }
        self.hydrated = true;
        match self.store.load() {
            Ok(None) => Hydration::NothingStored,
            Ok(Some(raw)) => {
                let tag = decode_stored_tag(&raw);
                match LocaleCode::from_code(&tag) {
                    Some(locale) => {
                        self.active = locale;
                        Hydration::Restored(locale)
                    }
                    None => Hydration::Ignored(raw),
                }
            }
            Err(err) => Hydration::Unreadable(err),
        }
    }

    /// Switch to `locale` and persist it.
    pub fn set_locale(&mut self, locale: LocaleCode) -> PersistOutcome {
        self.active = locale;
        // An explicit choice wins over any value a late hydrate would read.
        self.hydrated = true;
        match self.store.save(locale.code()) {
            Ok(()) => PersistOutcome::Saved,
            Err(err) => PersistOutcome::Failed(err),
        }
    }

    /// Switch by tag. Unsupported tags are rejected and change nothing.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Unsupported`] when `tag` is not a supported locale.
    pub fn set_locale_tag(&mut self, tag: &str) -> Result<PersistOutcome, LocaleError> {
        let locale = tag.parse::<LocaleCode>()?;
        Ok(self.set_locale(locale))
    }

    /// Switch to the other locale of the pair.
    pub fn toggle(&mut self) -> PersistOutcome {
        self.set_locale(self.active.toggled())
    }

    /// Borrow the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Release the store, e.g. to simulate a reload with a new resolver.
    pub fn into_store(self) -> S {
        self.store
    }
}

/// Normalise a raw stored value: JSON-encoded strings are unwrapped, anything
/// else is taken verbatim.
#[must_use]
pub fn decode_stored_tag(raw: &str) -> String {
    serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reload(resolver: LocaleResolver<MemoryStore>) -> LocaleResolver<MemoryStore> {
        let mut next = LocaleResolver::new(resolver.into_store());
        next.hydrate();
        next
    }

    #[test]
    fn starts_on_default_without_touching_storage() {
        let resolver = LocaleResolver::new(MemoryStore::new().failing_reads());
        assert_eq!(resolver.active_locale(), DEFAULT_LOCALE);
        assert_eq!(resolver.translate("brand"), "Mandli Bank");
    }

    #[test]
    fn set_locale_is_visible_to_the_next_translate() {
        let mut resolver = LocaleResolver::new(MemoryStore::new());
        assert_eq!(resolver.translate("brand"), "Mandli Bank");
        assert_eq!(resolver.set_locale(LocaleCode::Gu), PersistOutcome::Saved);
        assert_eq!(resolver.translate("brand"), "મંડળી બેંક");
        assert_eq!(resolver.translate("nonexistentKey"), "nonexistentKey");
        assert_eq!(resolver.store().value(), Some("gu"));
    }

    #[test]
    fn persisted_choice_survives_reload() {
        let mut resolver = LocaleResolver::new(MemoryStore::new());
        resolver.set_locale(LocaleCode::Gu);
        let resolver = reload(resolver);
        assert_eq!(resolver.active_locale(), LocaleCode::Gu);

        let mut resolver = resolver;
        resolver.set_locale(LocaleCode::En);
        assert_eq!(reload(resolver).active_locale(), LocaleCode::En);
    }

    #[test]
    fn hydrate_reports_what_it_found() {
        let mut resolver = LocaleResolver::new(MemoryStore::with_value("gu"));
        assert_eq!(resolver.hydrate(), Hydration::Restored(LocaleCode::Gu));
        assert_eq!(resolver.hydrate(), Hydration::AlreadyHydrated);

        let mut resolver = LocaleResolver::new(MemoryStore::new());
        assert_eq!(resolver.hydrate(), Hydration::NothingStored);
        assert_eq!(resolver.active_locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn json_encoded_values_hydrate() {
        let mut resolver = LocaleResolver::new(MemoryStore::with_value("\"gu\""));
        assert_eq!(resolver.hydrate(), Hydration::Restored(LocaleCode::Gu));
    }

    #[test]
    fn corrupt_or_unsupported_values_fall_back_to_default() {
        for raw in ["fr", "GU", "", "{\"locale\":\"gu\"}", "gu "] {
            let mut resolver = LocaleResolver::new(MemoryStore::with_value(raw));
            assert_eq!(resolver.hydrate(), Hydration::Ignored(raw.to_string()));
            assert_eq!(resolver.active_locale(), DEFAULT_LOCALE);
        }
    }

    #[test]
    fn unreadable_storage_keeps_default() {
        let mut resolver = LocaleResolver::new(MemoryStore::with_value("gu").failing_reads());
        assert!(matches!(resolver.hydrate(), Hydration::Unreadable(_)));
        assert_eq!(resolver.active_locale(), DEFAULT_LOCALE);
    }

    #[test]
    fn failed_write_still_switches_locale() {
        let mut resolver = LocaleResolver::new(MemoryStore::new().failing_writes());
        let outcome = resolver.set_locale(LocaleCode::Gu);
        assert!(!outcome.is_saved());
        assert!(matches!(
            outcome,
            PersistOutcome::Failed(StorageError::Rejected { key: "locale", .. })
        ));
        assert_eq!(resolver.active_locale(), LocaleCode::Gu);
        assert_eq!(resolver.translate("brand"), "મંડળી બેંક");
        assert_eq!(resolver.store().value(), None);
    }

    #[test]
    fn unsupported_tag_is_rejected_without_side_effects() {
        let mut resolver = LocaleResolver::new(MemoryStore::with_value("gu"));
        resolver.hydrate();
        let err = resolver.set_locale_tag("de");
        assert_eq!(err, Err(LocaleError::Unsupported { tag: "de".into() }));
        assert_eq!(resolver.active_locale(), LocaleCode::Gu);
        assert_eq!(resolver.store().value(), Some("gu"));
    }

    #[test]
    fn supported_tag_switches_and_saves() {
        let mut resolver = LocaleResolver::new(MemoryStore::new());
        assert_eq!(resolver.set_locale_tag("gu"), Ok(PersistOutcome::Saved));
        assert_eq!(resolver.active_locale(), LocaleCode::Gu);
    }

    #[test]
    fn explicit_choice_is_not_overwritten_by_late_hydrate() {
        let mut resolver = LocaleResolver::new(MemoryStore::with_value("en"));
        resolver.set_locale(LocaleCode::Gu);
        assert_eq!(resolver.hydrate(), Hydration::AlreadyHydrated);
        assert_eq!(resolver.active_locale(), LocaleCode::Gu);
    }

    #[test]
    fn toggle_alternates_and_persists() {
        let mut resolver = LocaleResolver::new(MemoryStore::new());
        resolver.toggle();
        assert_eq!(resolver.active_locale(), LocaleCode::Gu);
        resolver.toggle();
        assert_eq!(resolver.active_locale(), LocaleCode::En);
        assert_eq!(resolver.store().value(), Some("en"));
    }
}
