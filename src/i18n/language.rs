//! Language type: validated language representation.
//!
//! A `Language` can only be constructed for a code the registry knows and has
//! enabled, so every value of this type is safe to index the translation
//! tables with.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code ("el" or "en")
    code: &'static str,
}

impl Language {
    pub const GREEK: Language = Language { code: "el" };
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical (default) language of the site, Greek.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// The language this one toggles to.
    ///
    /// The switcher control always advertises the language it will switch
    /// *to*, so its label comes from `other()`, not from the current value.
    pub fn other(&self) -> Language {
        if *self == Language::GREEK {
            Language::ENGLISH
        } else {
            Language::GREEK
        }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the native name of the language (e.g., "Ελληνικά").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_greek_constant() {
        let greek = Language::GREEK;
        assert_eq!(greek.code(), "el");
        assert_eq!(greek.native_name(), "Ελληνικά");
        assert!(greek.is_canonical());
    }

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert!(!english.is_canonical());
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_greek() {
        let language = Language::from_code("el").expect("Should succeed");
        assert_eq!(language, Language::GREEK);
    }

    #[test]
    fn test_from_code_english() {
        let language = Language::from_code("en").expect("Should succeed");
        assert_eq!(language, Language::ENGLISH);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("xx");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== canonical / other Tests ====================

    #[test]
    fn test_canonical_returns_greek() {
        let canonical = Language::canonical();
        assert_eq!(canonical, Language::GREEK);
        assert!(canonical.is_canonical());
    }

    #[test]
    fn test_other_flips_between_the_two_languages() {
        assert_eq!(Language::GREEK.other(), Language::ENGLISH);
        assert_eq!(Language::ENGLISH.other(), Language::GREEK);
        assert_eq!(Language::GREEK.other().other(), Language::GREEK);
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_language_equality() {
        let lang1 = Language::GREEK;
        let lang2 = Language::from_code("el").unwrap();
        assert_eq!(lang1, lang2);
        assert_ne!(lang1, Language::ENGLISH);
    }

    #[test]
    fn test_language_copy() {
        let lang1 = Language::ENGLISH;
        let lang2 = lang1; // Copy
        assert_eq!(lang1, lang2); // Both still valid
    }

    #[test]
    fn test_language_debug() {
        let debug = format!("{:?}", Language::GREEK);
        assert!(debug.contains("el"));
    }
}
