//! Slug normalization.

use std::collections::HashMap;

use pillar_core::create_slug;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::Post;

/// A slug generated for a post that had none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilledSlug {
    /// Identifier of the post.
    pub id: String,
    /// Title the slug was derived from.
    pub title: String,
    /// The new slug.
    pub slug: String,
}

/// A slug carried by more than one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateSlug {
    /// The shared slug.
    pub slug: String,
    /// Number of posts carrying it.
    pub count: usize,
}

/// Outcome of slug normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SlugReport {
    /// Posts examined.
    pub total: usize,
    /// Slugs generated from titles.
    pub filled: Vec<FilledSlug>,
    /// Posts still without a slug because their title yields none.
    pub unresolved: usize,
    /// Posts whose slug is not a string; left unchanged.
    pub non_text: usize,
    /// Slugs shared by several posts, in first-seen order.
    pub duplicates: Vec<DuplicateSlug>,
}

impl SlugReport {
    /// Returns true if every post ends up with a unique slug.
    pub fn is_clean(&self) -> bool {
        self.unresolved == 0 && self.non_text == 0 && self.duplicates.is_empty()
    }
}

/// Fills empty slugs from titles and reports duplicates.
///
/// Existing slugs are never rewritten; duplicates are reported, not repaired.
pub fn normalize_slugs(posts: &mut [Post]) -> SlugReport {
    let mut report = SlugReport {
        total: posts.len(),
        ..SlugReport::default()
    };

    for post in posts.iter_mut() {
        if post.holds_non_text(Post::SLUG) {
            warn!(id = %post.id(), "slug is not a string, leaving it");
            report.non_text += 1;
            continue;
        }
        if !post.slug().is_empty() {
            continue;
        }
        let slug = create_slug(post.title());
        if slug.is_empty() {
            warn!(id = %post.id(), "post has neither slug nor sluggable title");
            report.unresolved += 1;
            continue;
        }
        debug!(id = %post.id(), slug = %slug, "filled slug");
        post.set_slug(&slug);
        report.filled.push(FilledSlug {
            id: post.id().into_owned(),
            title: post.title().to_string(),
            slug,
        });
    }

    report.duplicates = find_duplicates(posts);
    for dup in &report.duplicates {
        warn!(slug = %dup.slug, count = dup.count, "duplicate slug");
    }

    info!(
        total = report.total,
        filled = report.filled.len(),
        unresolved = report.unresolved,
        non_text = report.non_text,
        duplicates = report.duplicates.len(),
        "slug normalization complete"
    );
    report
}

/// Returns non-empty slugs used by more than one post.
fn find_duplicates(posts: &[Post]) -> Vec<DuplicateSlug> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    for slug in posts.iter().map(Post::slug).filter(|s| !s.is_empty()) {
        let count = counts.entry(slug).or_insert(0);
        if *count == 0 {
            order.push(slug);
        }
        *count += 1;
    }

    order
        .into_iter()
        .filter_map(|slug| {
            let count = counts[slug];
            (count > 1).then(|| DuplicateSlug {
                slug: slug.to_string(),
                count,
            })
        })
        .collect()
}
