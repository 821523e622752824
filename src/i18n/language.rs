//! Language type: validated handle onto a registry entry.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A validated language.
///
/// Only codes present and enabled in the registry can be turned into a
/// `Language`, so every value in a translations map is a supported language.
/// Languages order by their position in the registry, not alphabetically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct Language {
    /// Short language code (e.g., "en", "zh")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const CHINESE: Language = Language { code: "zh" };
    pub const JAPANESE: Language = Language { code: "ja" };
    pub const KOREAN: Language = Language { code: "ko" };
    pub const FRENCH: Language = Language { code: "fr" };
    pub const GERMAN: Language = Language { code: "de" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// The site default language, second tier of the fallback chain.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Every enabled language, in registry order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Position of this language in the registry's declared order.
    pub fn position(&self) -> usize {
        LanguageRegistry::get()
            .position(self.code)
            .unwrap_or(usize::MAX)
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl Ord for Language {
    fn cmp(&self, other: &Self) -> Ordering {
        self.position()
            .cmp(&other.position())
            .then_with(|| self.code.cmp(other.code))
    }
}

impl PartialOrd for Language {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl TryFrom<String> for Language {
    type Error = anyhow::Error;

    fn try_from(code: String) -> Result<Self> {
        Language::from_code(code.trim())
    }
}

// Hand-written: a derived `try_from` impl would tie `'de` to the `'static` code.
impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Language::try_from(code).map_err(serde::de::Error::custom)
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.code.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
        assert!(english.is_default());
    }

    #[test]
    fn test_constants_match_registry() {
        for language in [
            Language::ENGLISH,
            Language::CHINESE,
            Language::JAPANESE,
            Language::KOREAN,
            Language::FRENCH,
            Language::GERMAN,
        ] {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
        }
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_german() {
        let language = Language::from_code("de").expect("Should succeed");
        assert_eq!(language.native_name(), "Deutsch");
        assert!(!language.is_default());
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("es");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    // ==================== Default Tests ====================

    #[test]
    fn test_default_language_is_english() {
        assert_eq!(Language::default_language(), Language::ENGLISH);
        assert_eq!(Language::default(), Language::ENGLISH);
    }

    // ==================== Ordering Tests ====================

    #[test]
    fn test_ordering_follows_registry() {
        let mut languages = vec![Language::GERMAN, Language::ENGLISH, Language::JAPANESE];
        languages.sort();
        assert_eq!(
            languages,
            vec![Language::ENGLISH, Language::JAPANESE, Language::GERMAN]
        );
    }

    #[test]
    fn test_all_in_registry_order() {
        let all = Language::all();
        assert_eq!(all.first(), Some(&Language::ENGLISH));
        assert_eq!(all.last(), Some(&Language::GERMAN));
        assert!(all.windows(2).all(|pair| pair[0] < pair[1]));
    }

    // ==================== Serde Tests ====================

    #[test]
    fn test_deserialize_valid_code() {
        let language: Language = serde_json::from_str("\"fr\"").unwrap();
        assert_eq!(language, Language::FRENCH);
    }

    #[test]
    fn test_deserialize_unknown_code_fails() {
        let result: std::result::Result<Language, _> = serde_json::from_str("\"xx\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_inside_borrowing_struct() {
        #[derive(Deserialize)]
        struct Record {
            language: Language,
        }

        let json = String::from(r#"{"language": " ja "}"#);
        let record: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(record.language, Language::JAPANESE);
    }

    #[test]
    fn test_serialize_as_code() {
        assert_eq!(serde_json::to_string(&Language::KOREAN).unwrap(), "\"ko\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(Language::JAPANESE.to_string(), "ja");
    }
}
