//! Grouping per-language records into logical entities.

use crate::content::{Summarize, Translatable};
use crate::i18n::{Language, Translations};
use std::collections::HashMap;

/// All language variants of one article or author.
///
/// Never empty: it can only be built from at least one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalEntity<T> {
    key: String,
    variants: Translations<T>,
}

impl<T> LogicalEntity<T> {
    /// Build an entity from an existing variant map; `None` if it is empty.
    pub fn from_variants(key: impl Into<String>, variants: Translations<T>) -> Option<Self> {
        if variants.is_empty() {
            return None;
        }
        Some(Self {
            key: key.into(),
            variants,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn variants(&self) -> &Translations<T> {
        &self.variants
    }

    pub fn languages(&self) -> Vec<Language> {
        self.variants.languages()
    }

    /// The variant to display for `requested`.
    pub fn resolve(&self, requested: Language) -> Option<&T> {
        self.variants.resolve(requested)
    }

    pub fn resolve_with_language(&self, requested: Language) -> Option<(Language, &T)> {
        self.variants.resolve_with_language(requested)
    }

    /// One summary per variant, each projected from its own record.
    pub fn summaries(&self) -> Translations<T::Summary>
    where
        T: Summarize,
    {
        self.variants.map(T::summarize)
    }
}

/// Group records of one kind by logical identity.
///
/// Groups come out in the order their first record was seen. Within a group,
/// a second record for the same language replaces the first.
pub fn group_translations<T, I>(records: I) -> Vec<LogicalEntity<T>>
where
    T: Translatable,
    I: IntoIterator<Item = T>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entities: Vec<LogicalEntity<T>> = Vec::new();

    for record in records {
        let key = record.logical_id().to_string();
        let language = record.language();

        match index.get(&key) {
            Some(&position) => {
                entities[position].variants.insert(language, record);
            }
            None => {
                let mut variants = Translations::new();
                variants.insert(language, record);
                index.insert(key.clone(), entities.len());
                entities.push(LogicalEntity { key, variants });
            }
        }
    }

    entities
}

/// Find an entity by logical identity.
pub fn find_entity<'a, T>(entities: &'a [LogicalEntity<T>], key: &str) -> Option<&'a LogicalEntity<T>> {
    entities.iter().find(|entity| entity.key == key)
}
