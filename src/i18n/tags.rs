//! Tag labels and URL slugs.

use crate::i18n::{Language, Translations};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::OnceLock;

static SLUG_STRIP_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

/// URL slug for a tag: lowercased, punctuation removed, whitespace as `-`.
///
/// Letters and digits from any script are kept, so `"机器 学习"` becomes
/// `"机器-学习"`.
pub fn tag_slug(tag: &str) -> String {
    let strip = SLUG_STRIP_REGEX
        .get_or_init(|| Regex::new(r"[^\p{L}\p{N}\s_-]").expect("valid slug regex"));
    let whitespace =
        WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("valid whitespace regex"));

    let lowered = tag.trim().to_lowercase();
    let stripped = strip.replace_all(&lowered, "");
    whitespace.replace_all(&stripped, "-").into_owned()
}

/// Per-language display labels for tags.
///
/// Tags are authored once (usually in the default language) and shared by all
/// variants of a post; only their label is translated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagGlossary {
    labels: HashMap<String, Translations<String>>,
}

impl TagGlossary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: impl Into<String>, language: Language, label: impl Into<String>) {
        self.labels
            .entry(tag.into())
            .or_default()
            .insert(language, label.into());
    }

    /// Label for `tag` in `requested`.
    ///
    /// Uses the usual fallback chain over the tag's labels and returns the raw
    /// tag text when the glossary has no entry for it.
    pub fn label<'a>(&'a self, tag: &'a str, requested: Language) -> &'a str {
        self.labels
            .get(tag)
            .and_then(|labels| labels.resolve(requested))
            .map(String::as_str)
            .unwrap_or(tag)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
