use crate::i18n::{Language, TagGlossary};
use serde::{Deserialize, Serialize};

/// A per-language content record that belongs to a logical entity.
///
/// The logical identity is the explicit translation key when one is set and
/// non-empty, otherwise the record's own slug, so an untranslated record
/// forms a group of one.
pub trait Translatable {
    fn translation_key(&self) -> Option<&str>;

    fn slug(&self) -> &str;

    fn language(&self) -> Language;

    fn logical_id(&self) -> &str {
        self.translation_key()
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| self.slug())
    }
}

impl<T: Translatable + ?Sized> Translatable for &T {
    fn translation_key(&self) -> Option<&str> {
        (**self).translation_key()
    }

    fn slug(&self) -> &str {
        (**self).slug()
    }

    fn language(&self) -> Language {
        (**self).language()
    }
}

/// One language variant of a blog post, as supplied by the content store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub translation_key: Option<String>,
    pub language: Language,
    pub slug: String,
    pub path: String,
    pub title: String,
    /// Publication date as authored; parsed only for ordering and display
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub lastmod: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Author logical ids, in byline order
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub layout: Option<String>,
    #[serde(default)]
    pub draft: bool,
    /// Opaque reference to the compiled body; rendering happens elsewhere
    #[serde(default)]
    pub body: String,
}

impl Translatable for Article {
    fn translation_key(&self) -> Option<&str> {
        self.translation_key.as_deref()
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn language(&self) -> Language {
        self.language
    }
}

/// One language variant of an author bio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    #[serde(default)]
    pub translation_key: Option<String>,
    pub language: Language,
    pub slug: String,
    #[serde(default)]
    pub path: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub occupation: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub body: String,
}

impl Translatable for Author {
    fn translation_key(&self) -> Option<&str> {
        self.translation_key.as_deref()
    }

    fn slug(&self) -> &str {
        &self.slug
    }

    fn language(&self) -> Language {
        self.language
    }
}

/// Everything the content store hands over for one render.
///
/// Treated as an immutable snapshot; nothing in the crate mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSnapshot {
    #[serde(default)]
    pub articles: Vec<Article>,
    #[serde(default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub tags: TagGlossary,
}
