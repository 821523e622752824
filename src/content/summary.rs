//! Listing/navigation projections of full records.

use crate::content::{Article, Author, Translatable};
use crate::i18n::Language;
use serde::Serialize;

/// Projection of a record down to what listings and navigation need.
pub trait Summarize {
    type Summary;

    fn summarize(&self) -> Self::Summary;
}

impl<T: Summarize + ?Sized> Summarize for &T {
    type Summary = T::Summary;

    fn summarize(&self) -> Self::Summary {
        (**self).summarize()
    }
}

/// A post as shown in listings, tag pages, and previous/next links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub translation_key: String,
    pub language: Language,
    pub path: String,
    pub slug: String,
    /// Carried verbatim, even when it does not parse
    pub date: String,
    pub title: String,
    pub summary: Option<String>,
    pub tags: Vec<String>,
}

impl Summarize for Article {
    type Summary = PostSummary;

    fn summarize(&self) -> PostSummary {
        PostSummary {
            translation_key: self.logical_id().to_string(),
            language: self.language,
            path: self.path.clone(),
            slug: self.slug.clone(),
            date: self.date.clone(),
            title: self.title.clone(),
            summary: self.summary.clone(),
            tags: self.tags.clone(),
        }
    }
}

/// An author as shown in a post byline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSummary {
    pub translation_key: String,
    pub language: Language,
    pub slug: String,
    pub path: String,
    pub name: String,
    pub avatar: Option<String>,
    pub occupation: Option<String>,
    pub company: Option<String>,
    pub twitter: Option<String>,
}

impl Summarize for Author {
    type Summary = AuthorSummary;

    fn summarize(&self) -> AuthorSummary {
        AuthorSummary {
            translation_key: self.logical_id().to_string(),
            language: self.language,
            slug: self.slug.clone(),
            path: self.path.clone(),
            name: self.name.clone(),
            avatar: self.avatar.clone(),
            occupation: self.occupation.clone(),
            company: self.company.clone(),
            twitter: self.twitter.clone(),
        }
    }
}

/// Minimal fields for a previous/next link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub path: String,
    pub title: String,
}

impl From<&PostSummary> for NavLink {
    fn from(summary: &PostSummary) -> Self {
        NavLink {
            path: summary.path.clone(),
            title: summary.title.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            translation_key: Some("intro".to_string()),
            language: Language::FRENCH,
            slug: "intro-fr".to_string(),
            path: "blog/intro-fr".to_string(),
            title: "Introduction".to_string(),
            date: "not-a-date".to_string(),
            lastmod: Some("2024-03-01".to_string()),
            tags: vec!["rust".to_string(), "web".to_string()],
            summary: Some("Premier article".to_string()),
            authors: vec!["default".to_string()],
            layout: Some("PostSimple".to_string()),
            draft: false,
            body: "compiled-body".to_string(),
        }
    }

    #[test]
    fn test_post_summary_keeps_listing_fields() {
        let summary = article().summarize();
        assert_eq!(summary.translation_key, "intro");
        assert_eq!(summary.language, Language::FRENCH);
        assert_eq!(summary.path, "blog/intro-fr");
        assert_eq!(summary.slug, "intro-fr");
        assert_eq!(summary.title, "Introduction");
        assert_eq!(summary.summary.as_deref(), Some("Premier article"));
        assert_eq!(summary.tags, vec!["rust", "web"]);
    }

    #[test]
    fn test_post_summary_carries_malformed_date() {
        assert_eq!(article().summarize().date, "not-a-date");
    }

    #[test]
    fn test_post_summary_is_deterministic() {
        let record = article();
        assert_eq!(record.summarize(), record.summarize());
    }

    #[test]
    fn test_author_summary_uses_slug_when_untranslated() {
        let author = Author {
            translation_key: None,
            language: Language::ENGLISH,
            slug: "jane".to_string(),
            path: "authors/jane".to_string(),
            name: "Jane".to_string(),
            avatar: Some("/static/jane.png".to_string()),
            occupation: None,
            company: None,
            email: Some("jane@example.com".to_string()),
            twitter: None,
            linkedin: None,
            github: None,
            body: String::new(),
        };
        let summary = author.summarize();
        assert_eq!(summary.translation_key, "jane");
        assert_eq!(summary.avatar.as_deref(), Some("/static/jane.png"));
    }

    #[test]
    fn test_nav_link_from_summary() {
        let link = NavLink::from(&article().summarize());
        assert_eq!(link.path, "blog/intro-fr");
        assert_eq!(link.title, "Introduction");
    }
}
