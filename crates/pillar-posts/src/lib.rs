//! Posts storage and batch passes for pillar.
//!
//! A posts file is a JSON array of objects. [`load_posts`] reads it into [`Post`] records,
//! the passes in this crate edit records in memory and return a report, and [`save_posts`]
//! writes the whole collection back.

#![warn(missing_docs)]

mod error;
mod link;
mod normalize;
mod post;
mod recategorize;
mod store;

pub use error::PostsError;
pub use link::{LinkOptions, LinkReport, LinkedPost, link_posts};
pub use normalize::{DuplicateSlug, FilledSlug, SlugReport, normalize_slugs};
pub use post::Post;
pub use recategorize::{CategoryChange, RecategorizeReport, recategorize_posts};
pub use store::{load_posts, save_posts};
