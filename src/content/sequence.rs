//! Newest-first ordering of logical entities and previous/next adjacency.

use crate::content::PostSummary;
use crate::i18n::{ordering_timestamp, Language, Translations};
use serde::Serialize;

/// A summary that carries a publication date.
pub trait Dated {
    fn date(&self) -> Option<&str>;
}

impl Dated for PostSummary {
    fn date(&self) -> Option<&str> {
        Some(self.date.as_str())
    }
}

/// The date an entity is ordered by.
///
/// The default-language summary's date when it has one, otherwise the first
/// non-blank date in registry order.
pub fn ordering_date<S: Dated>(summaries: &Translations<S>) -> Option<&str> {
    let non_blank = |date: &&str| !date.trim().is_empty();

    summaries
        .get(Language::default_language())
        .and_then(Dated::date)
        .filter(non_blank)
        .or_else(|| {
            summaries
                .iter()
                .find_map(|(_, summary)| summary.date().filter(non_blank))
        })
}

/// One logical entity in a sequence, with its per-language summaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceEntry<S> {
    pub translation_key: String,
    pub summaries: Translations<S>,
    #[serde(skip)]
    sort_key: i64,
}

impl<S> SequenceEntry<S> {
    /// The summary to show for `requested`.
    pub fn resolve(&self, requested: Language) -> Option<&S> {
        self.summaries.resolve(requested)
    }

    /// Milliseconds since the epoch this entry is ordered by.
    pub fn sort_key(&self) -> i64 {
        self.sort_key
    }
}

/// The entities of a previous/next pair around one entity.
#[derive(Debug)]
pub struct Adjacent<'a, S> {
    /// Older neighbour (what the reader reads next)
    pub previous: Option<&'a SequenceEntry<S>>,
    /// Newer neighbour
    pub next: Option<&'a SequenceEntry<S>>,
}

impl<S> Adjacent<'_, S> {
    fn none() -> Self {
        Self {
            previous: None,
            next: None,
        }
    }
}

/// Logical entities ordered newest first.
///
/// Entities with equal dates keep their input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sequence<S> {
    entries: Vec<SequenceEntry<S>>,
}

impl<S: Dated> Sequence<S> {
    /// Order `(logical identity, summaries)` pairs by their ordering date.
    pub fn build<I>(entities: I) -> Self
    where
        I: IntoIterator<Item = (String, Translations<S>)>,
    {
        let mut entries: Vec<SequenceEntry<S>> = entities
            .into_iter()
            .map(|(translation_key, summaries)| {
                let sort_key = ordering_timestamp(ordering_date(&summaries));
                SequenceEntry {
                    translation_key,
                    summaries,
                    sort_key,
                }
            })
            .collect();

        // stable: equal dates keep input order
        entries.sort_by(|a, b| b.sort_key.cmp(&a.sort_key));

        Self { entries }
    }
}

impl<S> Sequence<S> {
    pub fn entries(&self) -> &[SequenceEntry<S>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn position(&self, translation_key: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.translation_key == translation_key)
    }

    pub fn get(&self, translation_key: &str) -> Option<&SequenceEntry<S>> {
        self.position(translation_key).map(|index| &self.entries[index])
    }

    /// Previous (older) and next (newer) entities around `translation_key`.
    ///
    /// Both are `None` when the key is not part of the sequence.
    pub fn neighbors(&self, translation_key: &str) -> Adjacent<'_, S> {
        match self.position(translation_key) {
            Some(index) => Adjacent {
                previous: self.entries.get(index + 1),
                next: index
                    .checked_sub(1)
                    .and_then(|newer| self.entries.get(newer)),
            },
            None => Adjacent::none(),
        }
    }

    /// One resolved summary per entity, in sequence order.
    pub fn resolve(&self, requested: Language) -> Vec<&S> {
        self.entries
            .iter()
            .filter_map(|entry| entry.resolve(requested))
            .collect()
    }
}
