//! Content resolution: from per-language records to what pages display.
//!
//! Records flow through the pipeline as follows:
//!
//! - `record`: the records the content store supplies and the `Translatable` seam
//! - `group`: records → logical entities keyed by translation key
//! - `summary`: per-variant listing projections
//! - `sequence`: newest-first ordering and previous/next adjacency
//! - `site`: request-scoped listing, detail, author and tag views
//!
//! Every function here is pure. A `Site` owns everything it derives, so
//! concurrent renders never share mutable state.

mod group;
mod record;
mod sequence;
mod site;
mod summary;

pub use group::{find_entity, group_translations, LogicalEntity};
pub use record::{Article, Author, ContentSnapshot, Translatable};
pub use sequence::{ordering_date, Adjacent, Dated, Sequence, SequenceEntry};
pub use site::{ArticleDetail, Site, SiteOptions, TagCount};
pub use summary::{AuthorSummary, NavLink, PostSummary, Summarize};
