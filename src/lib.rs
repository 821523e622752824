//! Translation-aware content resolution for multilingual blogs.
//!
//! Articles and author bios are authored as independent per-language records
//! that share a translation key. This crate groups them into logical entities,
//! picks the variant to show for a requested language (requested → default →
//! any available), and orders posts newest first with previous/next links.

pub mod config;
pub mod content;
pub mod i18n;
pub mod store;
