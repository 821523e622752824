//! Per-language variant maps and the fallback chain.
//!
//! Every place that has to pick one language out of several (detail pages,
//! listings, author bios, UI labels) goes through [`Translations::resolve`].
//! The chain is:
//!
//! 1. the requested language, if a variant exists;
//! 2. the default language, if a variant exists;
//! 3. the first available variant in registry order;
//! 4. otherwise `None`.

use crate::i18n::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A mapping from language to one variant of some content.
///
/// Holds at most one value per language. Iteration follows registry order,
/// which makes the "any available" fallback tier deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations<T> {
    variants: BTreeMap<Language, T>,
}

impl<T> Translations<T> {
    pub fn new() -> Self {
        Self {
            variants: BTreeMap::new(),
        }
    }

    /// Insert a variant, replacing any existing one for the same language.
    ///
    /// Returns the replaced value. Later inserts win.
    pub fn insert(&mut self, language: Language, value: T) -> Option<T> {
        self.variants.insert(language, value)
    }

    pub fn get(&self, language: Language) -> Option<&T> {
        self.variants.get(&language)
    }

    pub fn contains(&self, language: Language) -> bool {
        self.variants.contains_key(&language)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Languages that have a variant, in registry order.
    pub fn languages(&self) -> Vec<Language> {
        self.variants.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Language, &T)> {
        self.variants.iter().map(|(language, value)| (*language, value))
    }

    /// Project every variant independently.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Translations<U> {
        Translations {
            variants: self
                .variants
                .iter()
                .map(|(language, value)| (*language, f(value)))
                .collect(),
        }
    }

    /// Pick the variant to display for `requested`.
    pub fn resolve(&self, requested: Language) -> Option<&T> {
        self.resolve_with_language(requested).map(|(_, value)| value)
    }

    /// Like [`resolve`](Self::resolve), also reporting which language was chosen.
    pub fn resolve_with_language(&self, requested: Language) -> Option<(Language, &T)> {
        if let Some(value) = self.variants.get(&requested) {
            return Some((requested, value));
        }

        let default = Language::default_language();
        if let Some(value) = self.variants.get(&default) {
            return Some((default, value));
        }

        self.variants
            .iter()
            .next()
            .map(|(language, value)| (*language, value))
    }
}

impl<T> Default for Translations<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<(Language, T)> for Translations<T> {
    /// Collect variants; a repeated language keeps the last value.
    fn from_iter<I: IntoIterator<Item = (Language, T)>>(iter: I) -> Self {
        let mut translations = Translations::new();
        for (language, value) in iter {
            translations.insert(language, value);
        }
        translations
    }
}

impl<T> IntoIterator for Translations<T> {
    type Item = (Language, T);
    type IntoIter = std::collections::btree_map::IntoIter<Language, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.into_iter()
    }
}
