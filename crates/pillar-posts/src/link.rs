//! The internal linking pass.

use pillar_core::{RelatedSection, Selector, find_target};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::Post;

/// Parameters for a linking run.
#[derive(Debug, Clone, Copy)]
pub struct LinkOptions<'a> {
    /// Catalog, fallback and limits used to pick targets.
    pub selector: Selector<'a>,
    /// Heading and link format of the appended section.
    pub section: &'a RelatedSection,
}

/// A post that received a related section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkedPost {
    /// Slug of the updated post.
    pub slug: String,
    /// Target slugs linked, in rendered order.
    pub targets: Vec<String>,
}

/// Outcome of a linking run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkReport {
    /// Posts examined.
    pub total: usize,
    /// Posts that received a related section.
    pub updated: usize,
    /// Posts that already had the section.
    pub skipped_linked: usize,
    /// Catalog pages that already had the section.
    pub skipped_pillar: usize,
    /// Posts for which no target rendered; left unchanged.
    pub no_links: usize,
    /// Posts whose body is not a string; left unchanged.
    pub skipped_non_text: usize,
    /// Details for each updated post, in file order.
    pub posts: Vec<LinkedPost>,
}

/// Appends a related section to every post that lacks one.
///
/// Catalog pages are linked too, never to themselves. Running the pass twice leaves the posts
/// as the first run did.
pub fn link_posts(posts: &mut [Post], options: &LinkOptions<'_>) -> LinkReport {
    let mut report = LinkReport {
        total: posts.len(),
        ..LinkReport::default()
    };

    for post in posts.iter_mut() {
        let slug = post.slug().to_string();
        let is_pillar = find_target(options.selector.catalog, &slug).is_some();

        if post.holds_non_text(Post::CONTENT) {
            warn!(slug = %slug, id = %post.id(), "content is not a string, skipping");
            report.skipped_non_text += 1;
            continue;
        }

        if options.section.is_present(post.content()) {
            debug!(slug = %slug, pillar = is_pillar, "already linked");
            if is_pillar {
                report.skipped_pillar += 1;
            } else {
                report.skipped_linked += 1;
            }
            continue;
        }

        let targets = options.selector.select(&*post, &slug);
        let rendered: Vec<String> = targets
            .into_iter()
            .filter(|t| find_target(options.selector.catalog, t).is_some())
            .collect();

        match options
            .section
            .apply(post.content(), &rendered, options.selector.catalog)
        {
            Some(content) => {
                debug!(slug = %slug, targets = ?rendered, "linked");
                post.set_content(content);
                report.updated += 1;
                report.posts.push(LinkedPost {
                    slug,
                    targets: rendered,
                });
            }
            None => {
                debug!(slug = %slug, "no targets to link");
                report.no_links += 1;
            }
        }
    }

    info!(
        total = report.total,
        updated = report.updated,
        skipped_linked = report.skipped_linked,
        skipped_pillar = report.skipped_pillar,
        no_links = report.no_links,
        skipped_non_text = report.skipped_non_text,
        "linking pass complete"
    );
    report
}
