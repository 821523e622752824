//! Internationalization (i18n) module for multi-language content.
//!
//! All language-related logic lives here: the closed set of supported
//! languages, the per-language variant map with its fallback chain, and the
//! localized labels, tag names and dates that layouts show around content.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported languages and the default
//! - `language`: Validated, `Copy` language handle
//! - `resolver`: `Translations<T>` and the requested → default → any chain
//! - `strings`: Localized UI labels and header navigation
//! - `tags`: Tag display labels and URL slugs
//! - `dates`: Lenient date parsing and localized formatting
//!
//! # Example
//!
//! ```rust
//! use polyglot_press::i18n::{Language, Translations};
//!
//! let mut titles = Translations::new();
//! titles.insert(Language::GERMAN, "Hallo Welt");
//!
//! // No French or English variant: the only available one is shown.
//! assert_eq!(titles.resolve(Language::FRENCH), Some(&"Hallo Welt"));
//! ```

mod dates;
mod language;
mod registry;
mod resolver;
mod strings;
mod tags;

pub use dates::{format_date, ordering_timestamp, parse_timestamp};
pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::Translations;
pub use strings::{header_nav_links, HeaderNavLink, LanguageStrings};
pub use tags::{tag_slug, TagGlossary};
