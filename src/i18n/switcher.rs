//! Language switcher: owns the current language and applies translations to
//! the document.
//!
//! Purely synchronous single-owner state, mutated only on page-load and on
//! the toggle control's click. Every failure mode here (missing key, invalid
//! code) degrades to a diagnostic; nothing in this module is allowed to take
//! the page down.

use crate::i18n::{table, Language, TranslationMetrics};
use crate::page::{Document, ElementKind};
use crate::store::PreferenceStore;
use anyhow::Result;
use tracing::{debug, info, warn};

/// Fixed key of the persisted language preference.
pub const STORAGE_KEY: &str = "alios_language";

pub struct LanguageSwitcher {
    current: Language,
}

impl LanguageSwitcher {
    /// Initialize from the persisted preference (default Greek when absent
    /// or invalid), apply it to the document, and set the toggle label.
    pub fn initialize(doc: &mut Document, store: &PreferenceStore) -> Self {
        let current = match store.get(STORAGE_KEY) {
            Some(code) => Language::from_code(&code).unwrap_or_else(|_| {
                warn!(code, "ignoring invalid persisted language preference");
                Language::canonical()
            }),
            None => Language::canonical(),
        };

        let switcher = Self { current };
        switcher.apply(doc, current);
        switcher.refresh_toggle(doc);
        info!(language = current.code(), "language switcher initialized");
        switcher
    }

    pub fn current(&self) -> Language {
        self.current
    }

    /// Apply translations for `lang` to every flagged element, the document
    /// title, the meta description, and the declared language attribute.
    ///
    /// A key that fails to resolve leaves its element untouched and logs a
    /// diagnostic; it never fails the pass.
    pub fn apply(&self, doc: &mut Document, lang: Language) {
        let metrics = TranslationMetrics::global();

        for element in doc.elements_mut() {
            if let Some(key) = element.translate_key.clone() {
                // Text-entry controls are only translated through their
                // placeholder, handled below
                if element.kind != ElementKind::TextInput {
                    match table::resolve(lang, &key) {
                        Some(translation) => {
                            if element.kind == ElementKind::SubmitInput {
                                element.value = translation.to_string();
                            } else {
                                element.text = translation.to_string();
                            }
                            metrics.record_applied();
                        }
                        None => {
                            debug!(key, id = element.id, lang = lang.code(), "translation key not found");
                            metrics.record_missing_key();
                        }
                    }
                }
            }

            if let Some(key) = element.placeholder_key.clone() {
                match table::resolve(lang, &key) {
                    Some(translation) => {
                        element.placeholder = translation.to_string();
                        metrics.record_applied();
                    }
                    None => {
                        debug!(key, id = element.id, lang = lang.code(), "placeholder key not found");
                        metrics.record_missing_key();
                    }
                }
            }
        }

        // Document title and meta description, each independently keyed
        if let Some(key) = doc.title_key.clone() {
            match table::resolve(lang, &key) {
                Some(translation) => doc.title = translation.to_string(),
                None => debug!(key, lang = lang.code(), "title key not found"),
            }
        }
        if let Some(key) = doc.meta_description_key.clone() {
            match table::resolve(lang, &key) {
                Some(translation) => doc.meta_description = translation.to_string(),
                None => debug!(key, lang = lang.code(), "meta description key not found"),
            }
        }

        doc.lang = lang.code().to_string();
    }

    /// Switch to the language named by `code`, persist the choice, and
    /// re-apply translations.
    ///
    /// An unsupported code logs a diagnostic and leaves everything (document,
    /// preference, toggle label) unchanged. Only a persistence failure is an
    /// error.
    pub fn switch(&mut self, doc: &mut Document, store: &PreferenceStore, code: &str) -> Result<()> {
        let lang = match Language::from_code(code) {
            Ok(lang) => lang,
            Err(e) => {
                warn!(code, error = %e, "rejecting switch to invalid language");
                TranslationMetrics::global().record_invalid_language();
                return Ok(());
            }
        };

        store.set(STORAGE_KEY, lang.code())?;
        self.current = lang;
        self.apply(doc, lang);
        self.refresh_toggle(doc);
        info!(language = lang.code(), "language switched");
        Ok(())
    }

    /// Toggle to the other language (the switcher control's click action).
    pub fn toggle(&mut self, doc: &mut Document, store: &PreferenceStore) -> Result<()> {
        let next = self.current.other();
        self.switch(doc, store, next.code())
    }

    /// The toggle control names the language it will switch *to*.
    fn refresh_toggle(&self, doc: &mut Document) {
        if let Some(switcher) = doc.get_mut("language-switcher") {
            switcher.text = self.current.other().code().to_uppercase();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::default_document;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> PreferenceStore {
        PreferenceStore::open(dir.path().join("preferences.json"))
    }

    // ==================== Initialization Tests ====================

    #[test]
    fn test_initialize_defaults_to_greek() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let mut doc = default_document();

        let switcher = LanguageSwitcher::initialize(&mut doc, &store);

        assert_eq!(switcher.current(), Language::GREEK);
        assert_eq!(doc.lang, "el");
        // Toggle advertises the language it switches to
        assert_eq!(doc.get("language-switcher").unwrap().text, "EN");
    }

    #[test]
    fn test_initialize_reads_persisted_preference() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        store.set(STORAGE_KEY, "en").expect("set");

        let mut doc = default_document();
        let switcher = LanguageSwitcher::initialize(&mut doc, &store);

        assert_eq!(switcher.current(), Language::ENGLISH);
        assert_eq!(doc.lang, "en");
        assert_eq!(doc.get("nav-home").unwrap().text, "Home");
        assert_eq!(doc.get("language-switcher").unwrap().text, "EL");
    }

    #[test]
    fn test_initialize_ignores_invalid_preference() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        store.set(STORAGE_KEY, "xx").expect("set");

        let mut doc = default_document();
        let switcher = LanguageSwitcher::initialize(&mut doc, &store);

        assert_eq!(switcher.current(), Language::GREEK);
        assert_eq!(doc.lang, "el");
    }

    // ==================== Apply Tests ====================

    #[test]
    fn test_apply_translates_text_value_and_placeholder() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let mut doc = default_document();
        let mut switcher = LanguageSwitcher::initialize(&mut doc, &store);

        switcher.switch(&mut doc, &store, "en").expect("switch");

        // Text
        assert_eq!(doc.get("nav-contact").unwrap().text, "Contact");
        // Submit input translated through value
        assert_eq!(doc.get("contact-submit").unwrap().value, "Send");
        // Text input translated through placeholder only
        let name = doc.get("contact-name").unwrap();
        assert_eq!(name.placeholder, "Your name");
        assert!(name.text.is_empty());
        // Title / meta / lang attribute
        assert_eq!(doc.title, "Alios – Cultural Association of Corfu");
        assert!(doc.meta_description.contains("nonprofit"));
        assert_eq!(doc.lang, "en");
    }

    #[test]
    fn test_apply_skips_missing_key_and_counts_it() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let mut doc = Document::new();
        doc.push(crate::page::Element::text("odd", "no.such.key", "αρχικό"));

        let missing_before = TranslationMetrics::global().missing_keys();
        let switcher = LanguageSwitcher::initialize(&mut doc, &store);
        switcher.apply(&mut doc, Language::ENGLISH);

        // Element left untouched, diagnostic counted, nothing thrown
        assert_eq!(doc.get("odd").unwrap().text, "αρχικό");
        assert!(TranslationMetrics::global().missing_keys() > missing_before);
    }

    // ==================== Switch Tests ====================

    #[test]
    fn test_switch_roundtrip_restores_original_text() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let mut doc = default_document();
        let original = doc.clone();
        let mut switcher = LanguageSwitcher::initialize(&mut doc, &store);

        switcher.switch(&mut doc, &store, "en").expect("switch en");
        switcher.switch(&mut doc, &store, "el").expect("switch el");

        for el in original.elements() {
            let after = doc.get(&el.id).expect("element survives");
            assert_eq!(after.text, el.text, "text of {}", el.id);
            assert_eq!(after.value, el.value, "value of {}", el.id);
            assert_eq!(after.placeholder, el.placeholder, "placeholder of {}", el.id);
        }
        assert_eq!(doc.title, original.title);
        assert_eq!(doc.meta_description, original.meta_description);
        assert_eq!(doc.lang, "el");
    }

    #[test]
    fn test_switch_persists_preference() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let mut doc = default_document();
        let mut switcher = LanguageSwitcher::initialize(&mut doc, &store);

        switcher.switch(&mut doc, &store, "en").expect("switch");
        assert_eq!(store.get(STORAGE_KEY), Some("en".to_string()));
    }

    #[test]
    fn test_switch_invalid_language_is_a_noop() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let mut doc = default_document();
        let mut switcher = LanguageSwitcher::initialize(&mut doc, &store);
        switcher.switch(&mut doc, &store, "en").expect("switch");
        let snapshot = doc.clone();

        let invalid_before = TranslationMetrics::global().invalid_languages();
        switcher.switch(&mut doc, &store, "xx").expect("noop switch");

        assert_eq!(switcher.current(), Language::ENGLISH);
        assert_eq!(store.get(STORAGE_KEY), Some("en".to_string()));
        assert_eq!(doc.lang, snapshot.lang);
        assert_eq!(
            doc.get("language-switcher").unwrap().text,
            snapshot.get("language-switcher").unwrap().text
        );
        assert!(TranslationMetrics::global().invalid_languages() > invalid_before);
    }

    #[test]
    fn test_toggle_flips_language() {
        let dir = TempDir::new().expect("temp dir");
        let store = store_in(&dir);
        let mut doc = default_document();
        let mut switcher = LanguageSwitcher::initialize(&mut doc, &store);

        switcher.toggle(&mut doc, &store).expect("toggle");
        assert_eq!(switcher.current(), Language::ENGLISH);

        switcher.toggle(&mut doc, &store).expect("toggle");
        assert_eq!(switcher.current(), Language::GREEK);
    }
}
