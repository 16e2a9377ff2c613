//! The recategorization pass.

use pillar_core::{CategoryHistogram, CategoryRule, classify};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::Post;

/// A category replaced by the pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryChange {
    /// Slug of the post.
    pub slug: String,
    /// Category before the pass.
    pub from: String,
    /// Category assigned.
    pub to: String,
}

/// Outcome of a recategorization run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecategorizeReport {
    /// Category counts before the pass.
    pub before: CategoryHistogram,
    /// Category counts after the pass.
    pub after: CategoryHistogram,
    /// Number of posts whose category changed.
    pub changed: usize,
    /// Every change, in file order.
    pub changes: Vec<CategoryChange>,
    /// Posts whose category is not a string; left unchanged and not counted in the histograms.
    pub skipped_non_text: usize,
}

/// Reassigns every post's category from its slug and title.
///
/// A post's category is only written when the computed one differs. A category holding
/// something other than a string is left alone.
pub fn recategorize_posts(
    posts: &mut [Post],
    rules: &[CategoryRule],
    default: &str,
) -> RecategorizeReport {
    let mut report = RecategorizeReport::default();

    for post in posts.iter_mut() {
        if post.holds_non_text(Post::CATEGORY) {
            warn!(slug = post.slug(), id = %post.id(), "category is not a string, skipping");
            report.skipped_non_text += 1;
            continue;
        }

        let old = post.category().to_string();
        let new = classify(post.slug(), post.title(), rules, default);

        report.before.record(&old);
        report.after.record(new);

        if new != old {
            debug!(slug = post.slug(), from = %old, to = new, "recategorized");
            report.changes.push(CategoryChange {
                slug: post.slug().to_string(),
                from: old,
                to: new.to_string(),
            });
            post.set_category(new);
            report.changed += 1;
        }
    }

    info!(
        total = posts.len(),
        changed = report.changed,
        skipped_non_text = report.skipped_non_text,
        "recategorization pass complete"
    );
    report
}
