//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides the closed set of languages the site publishes in.
//! It uses a singleton pattern with `OnceLock` so the registry is built once
//! and stays immutable for the lifetime of the process.

use chrono::Locale;
use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains the metadata needed to resolve and present one language: its
/// code, names, date locale, and whether it is the site default.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// Short language code used in content front matter (e.g., "en", "zh")
    pub code: &'static str,

    /// English name of the language (e.g., "English", "Chinese")
    pub name: &'static str,

    /// Native name of the language, shown in the language picker
    pub native_name: &'static str,

    /// BCP-47 tag used for `lang` attributes and feeds (e.g., "en-US")
    pub bcp47: &'static str,

    /// Locale used when formatting dates for this language
    pub locale: Locale,

    /// Whether this is the default/fallback language (exactly one is true)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Languages are kept in declared order. That order is significant: it is the
/// tie-break used when neither the requested nor the default language has a
/// variant and the resolver must pick any available one.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists (enabled or not)
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Position of a language code in declared order.
    pub fn position(&self, code: &str) -> Option<usize> {
        self.languages.iter().position(|lang| lang.code == code)
    }

    /// Get all enabled languages, in declared order.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones), in declared order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// The default language is the second tier of the fallback chain and the
    /// source of the ordering date for listings.
    ///
    /// # Panics
    /// Panics if no default language is defined or if several are (this
    /// indicates a broken static table, caught by the tests below).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }

    /// Code / native-name pairs for a language picker, in declared order.
    pub fn language_options(&self) -> Vec<(&'static str, &'static str)> {
        self.languages
            .iter()
            .filter(|lang| lang.enabled)
            .map(|lang| (lang.code, lang.native_name))
            .collect()
    }
}

/// Default language configurations.
///
/// English is the default; the remaining languages follow in the order the
/// language picker shows them.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            bcp47: "en-US",
            locale: Locale::en_US,
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            bcp47: "zh-CN",
            locale: Locale::zh_CN,
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            bcp47: "ja-JP",
            locale: Locale::ja_JP,
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            bcp47: "ko-KR",
            locale: Locale::ko_KR,
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            bcp47: "fr-FR",
            locale: Locale::fr_FR,
            is_default: false,
            enabled: true,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            bcp47: "de-DE",
            locale: Locale::de_DE,
            is_default: false,
            enabled: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_get_returns_singleton() {
        let registry1 = LanguageRegistry::get();
        let registry2 = LanguageRegistry::get();

        assert!(std::ptr::eq(registry1, registry2));
    }

    #[test]
    fn test_get_by_code_english() {
        let config = LanguageRegistry::get().get_by_code("en").unwrap();
        assert_eq!(config.code, "en");
        assert_eq!(config.name, "English");
        assert_eq!(config.bcp47, "en-US");
        assert!(config.is_default);
        assert!(config.enabled);
    }

    #[test]
    fn test_get_by_code_chinese() {
        let config = LanguageRegistry::get().get_by_code("zh").unwrap();
        assert_eq!(config.native_name, "中文");
        assert!(!config.is_default);
    }

    #[test]
    fn test_get_by_code_nonexistent() {
        assert!(LanguageRegistry::get().get_by_code("es").is_none());
        assert!(LanguageRegistry::get().get_by_code("").is_none());
    }

    #[test]
    fn test_list_enabled_in_declared_order() {
        let codes: Vec<_> = LanguageRegistry::get()
            .list_enabled()
            .iter()
            .map(|lang| lang.code)
            .collect();
        assert_eq!(codes, vec!["en", "zh", "ja", "ko", "fr", "de"]);
    }

    #[test]
    fn test_default_language_is_member_of_supported_set() {
        let registry = LanguageRegistry::get();
        let default = registry.default_language();

        assert_eq!(default.code, "en");
        assert!(registry.is_enabled(default.code));
        assert!(registry.list_all().iter().any(|lang| lang.code == default.code));
    }

    #[test]
    fn test_exactly_one_default() {
        let count = LanguageRegistry::get()
            .list_all()
            .iter()
            .filter(|lang| lang.is_default)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_position() {
        let registry = LanguageRegistry::get();
        assert_eq!(registry.position("en"), Some(0));
        assert_eq!(registry.position("de"), Some(5));
        assert_eq!(registry.position("xx"), None);
    }

    #[test]
    fn test_is_enabled_nonexistent() {
        assert!(!LanguageRegistry::get().is_enabled("es"));
    }

    #[test]
    fn test_language_options() {
        let options = LanguageRegistry::get().language_options();
        assert_eq!(options.len(), 6);
        assert_eq!(options[0], ("en", "English"));
        assert!(options.contains(&("ko", "한국어")));
    }
}
