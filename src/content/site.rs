use crate::content::{
    find_entity, group_translations, Article, Author, AuthorSummary, ContentSnapshot,
    LogicalEntity, NavLink, PostSummary, Sequence, SequenceEntry, Summarize,
};
use crate::i18n::{tag_slug, Language, TagGlossary, Translations};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Knobs that change what a render includes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteOptions {
    /// Author id used for posts that list no authors
    pub default_author: String,
    /// Whether draft variants appear in listings and adjacency
    pub include_drafts: bool,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            default_author: "default".to_string(),
            include_drafts: false,
        }
    }
}

/// Everything a detail page needs for one post in one language.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDetail<'a> {
    pub translation_key: &'a str,
    /// Language of the variant actually shown
    pub language: Language,
    pub article: &'a Article,
    pub summary: PostSummary,
    /// Every variant's summary, for a language switcher
    pub translations: Translations<PostSummary>,
    /// Older neighbour
    pub previous: Option<NavLink>,
    /// Newer neighbour
    pub next: Option<NavLink>,
    pub authors: Vec<AuthorSummary>,
}

impl ArticleDetail<'_> {
    /// Whether a different language than requested is being shown.
    pub fn is_fallback(&self, requested: Language) -> bool {
        self.language != requested
    }
}

/// A tag with how many listed posts carry it in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub slug: String,
    pub label: String,
    pub count: usize,
}

/// Request-scoped view over one content snapshot.
///
/// Built once per render and immutable afterwards. Grouping, summaries and
/// ordering are computed up front; every query takes the requested language
/// explicitly.
#[derive(Debug, Clone)]
pub struct Site {
    articles: Vec<LogicalEntity<Article>>,
    authors: Vec<LogicalEntity<Author>>,
    listing: Sequence<PostSummary>,
    tags: TagGlossary,
    options: SiteOptions,
}

impl Site {
    pub fn new(snapshot: ContentSnapshot, options: SiteOptions) -> Self {
        let articles = group_translations(snapshot.articles);
        let authors = group_translations(snapshot.authors);

        let listing = Sequence::build(articles.iter().filter_map(|entity| {
            let summaries: Translations<PostSummary> = entity
                .variants()
                .iter()
                .filter(|(_, article)| options.include_drafts || !article.draft)
                .map(|(language, article)| (language, article.summarize()))
                .collect();

            if summaries.is_empty() {
                None
            } else {
                Some((entity.key().to_string(), summaries))
            }
        }));

        Self {
            articles,
            authors,
            listing,
            tags: snapshot.tags,
            options,
        }
    }

    pub fn options(&self) -> &SiteOptions {
        &self.options
    }

    /// All listed posts, newest first, with every language's summary.
    pub fn listing(&self) -> &Sequence<PostSummary> {
        &self.listing
    }

    /// One summary per listed post for `requested`, newest first.
    pub fn resolved_listing(&self, requested: Language) -> Vec<&PostSummary> {
        self.listing.resolve(requested)
    }

    pub fn article(&self, translation_key: &str) -> Option<&LogicalEntity<Article>> {
        find_entity(&self.articles, translation_key)
    }

    pub fn author(&self, translation_key: &str) -> Option<&LogicalEntity<Author>> {
        find_entity(&self.authors, translation_key)
    }

    /// Resolve a post for its detail page.
    ///
    /// Returns `None` when no post has this translation key. Neighbours that
    /// do not exist, or a post missing from the listing (a draft), yield
    /// `None` links rather than an error.
    pub fn article_detail(&self, translation_key: &str, requested: Language) -> Option<ArticleDetail<'_>> {
        let Some(entity) = self.article(translation_key) else {
            debug!("No article with translation key '{}'", translation_key);
            return None;
        };

        let variants = self.published_variants(entity);
        let (language, article) = variants
            .resolve_with_language(requested)
            .map(|(language, article)| (language, *article))?;
        let adjacent = self.listing.neighbors(translation_key);
        let nav_link = |entry: Option<&SequenceEntry<PostSummary>>| {
            entry
                .and_then(|entry| entry.resolve(requested))
                .map(NavLink::from)
        };

        Some(ArticleDetail {
            translation_key: entity.key(),
            language,
            article,
            summary: article.summarize(),
            translations: variants.map(|article| article.summarize()),
            previous: nav_link(adjacent.previous),
            next: nav_link(adjacent.next),
            authors: self.byline(&variants, article, requested),
        })
    }

    /// Variants a reader may see. Drafts only when nothing else exists, or
    /// when drafts are included.
    fn published_variants<'a>(&self, entity: &'a LogicalEntity<Article>) -> Translations<&'a Article> {
        let all = entity.variants();
        if self.options.include_drafts {
            return all.iter().collect();
        }

        let published: Translations<&Article> =
            all.iter().filter(|(_, article)| !article.draft).collect();
        if published.is_empty() {
            all.iter().collect()
        } else {
            published
        }
    }

    /// Author ids come from the shown variant, else from the other variants
    /// through the usual chain, else the default author.
    fn byline(
        &self,
        variants: &Translations<&Article>,
        article: &Article,
        requested: Language,
    ) -> Vec<AuthorSummary> {
        if !article.authors.is_empty() {
            return self.authors_for(&article.authors, requested);
        }

        let credited: Translations<&Article> = variants
            .iter()
            .filter(|(_, variant)| !variant.authors.is_empty())
            .map(|(language, variant)| (language, *variant))
            .collect();

        match credited.resolve(requested) {
            Some(variant) => self.authors_for(&variant.authors, requested),
            None => self.authors_for(std::slice::from_ref(&self.options.default_author), requested),
        }
    }

    /// Resolve author ids to summaries in `requested`, keeping their order.
    ///
    /// Unknown ids are left out.
    pub fn authors_for(&self, ids: &[String], requested: Language) -> Vec<AuthorSummary> {
        ids.iter()
            .filter_map(|id| {
                let resolved = self
                    .author(id)
                    .and_then(|entity| entity.resolve(requested))
                    .map(Summarize::summarize);
                if resolved.is_none() {
                    debug!("Omitting unknown author '{}'", id);
                }
                resolved
            })
            .collect()
    }

    /// The default author's bio for the about page.
    pub fn about(&self, requested: Language) -> Option<&Author> {
        self.author(&self.options.default_author)
            .and_then(|entity| entity.resolve(requested))
    }

    pub fn tag_label<'a>(&'a self, tag: &'a str, requested: Language) -> &'a str {
        self.tags.label(tag, requested)
    }

    /// Tags of the listed posts as shown in `requested`.
    ///
    /// Counted once per post over its resolved variant; most used first, then
    /// alphabetical.
    pub fn tag_counts(&self, requested: Language) -> Vec<TagCount> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for summary in self.resolved_listing(requested) {
            let unique: HashSet<&str> = summary.tags.iter().map(String::as_str).collect();
            for tag in unique {
                *counts.entry(tag).or_default() += 1;
            }
        }

        let mut tags: Vec<TagCount> = counts
            .into_iter()
            .map(|(tag, count)| TagCount {
                tag: tag.to_string(),
                slug: tag_slug(tag),
                label: self.tag_label(tag, requested).to_string(),
                count,
            })
            .collect();

        tags.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
        tags
    }

    /// Listed posts whose resolved variant carries a tag with this slug.
    pub fn posts_tagged(&self, slug: &str, requested: Language) -> Vec<&PostSummary> {
        self.resolved_listing(requested)
            .into_iter()
            .filter(|summary| summary.tags.iter().any(|tag| tag_slug(tag) == slug))
            .collect()
    }
}
