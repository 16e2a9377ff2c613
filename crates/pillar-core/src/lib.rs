//! Keyword relevance core for pillar.
//!
//! Two passes run over a site's content items:
//!
//! 1. **Selection**: score an item against a catalog of topic targets (pillar pages) and pick a
//!    bounded, deduplicated set of targets to link to, padded from a fallback list.
//! 2. **Classification**: assign an item to exactly one category from an ordered rule list,
//!    first match wins.
//!
//! Both passes share one matching primitive: a case-insensitive substring test of a keyword
//! phrase inside a lowercased text blob. Everything in this crate is pure; loading and saving
//! content lives in `pillar-posts`.

#![warn(missing_docs)]

mod catalog;
mod classify;
mod histogram;
mod matching;
mod related;
mod select;
mod slug;

pub use catalog::{CategoryRule, TopicTarget, find_target};
pub use classify::classify;
pub use histogram::CategoryHistogram;
pub use matching::{contains_keyword, item_blob, slug_words};
pub use related::{DEFAULT_HEADING, DEFAULT_LINK_BASE, RelatedSection};
pub use select::{
    DEFAULT_BODY_PREFIX_CHARS, DEFAULT_MAX_RESULTS, ScoredTarget, Selector, score_target,
    score_targets, select_top_targets,
};
pub use slug::create_slug;

/// Read access to the text fields of a content item.
///
/// The scorer only ever reads an item, so anything with a title, a slug and a body can be
/// scored: stored posts, drafts, or test fixtures.
pub trait ContentItem {
    /// Human-readable heading.
    fn title(&self) -> &str;
    /// URL-safe identifier, unique within a catalog.
    fn slug(&self) -> &str;
    /// Free-form body text; may be empty.
    fn body(&self) -> &str;
}
