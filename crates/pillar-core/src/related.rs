//! Rendering of the "related articles" section appended to a body.
//!
//! The section heading doubles as the idempotence marker: a body that already contains it is
//! never extended again.

use serde::Serialize;

use crate::{TopicTarget, find_target};

/// Default heading of the related-links section.
pub const DEFAULT_HEADING: &str = "## Artículos relacionados";

/// Default URL prefix for target links.
pub const DEFAULT_LINK_BASE: &str = "/blog/";

/// Heading and link format for the appended section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedSection {
    /// Markdown heading line; also the marker for already-processed bodies.
    pub heading: String,
    /// Prefix joined with a slug to form a link, e.g. `/blog/`.
    pub link_base: String,
}

impl Default for RelatedSection {
    fn default() -> Self {
        Self {
            heading: DEFAULT_HEADING.to_string(),
            link_base: DEFAULT_LINK_BASE.to_string(),
        }
    }
}

impl RelatedSection {
    /// Returns true if `body` already carries the section.
    pub fn is_present(&self, body: &str) -> bool {
        body.contains(&self.heading)
    }

    /// Renders one markdown link line for a target.
    pub fn link_line(&self, target: &TopicTarget) -> String {
        format!("- [{}]({}{}/)", target.title, self.link_base, target.slug)
    }

    /// Renders the block for `slugs`, skipping slugs absent from `catalog`.
    ///
    /// The block starts with a horizontal rule and ends with a newline. Returns `None` when no
    /// slug resolves to a target.
    pub fn render(&self, slugs: &[String], catalog: &[TopicTarget]) -> Option<String> {
        let links: Vec<String> = slugs
            .iter()
            .filter_map(|slug| find_target(catalog, slug))
            .map(|target| self.link_line(target))
            .collect();

        if links.is_empty() {
            return None;
        }

        Some(format!(
            "\n\n---\n\n{}\n\n{}\n",
            self.heading,
            links.join("\n")
        ))
    }

    /// Appends a rendered block to `body`, trimming trailing whitespace first.
    pub fn append(body: &str, block: &str) -> String {
        let mut result = body.trim_end().to_string();
        result.push_str(block);
        result
    }

    /// Renders and appends the section unless `body` already has it.
    ///
    /// Returns `None` if the body is unchanged, either because the marker is present or because
    /// nothing rendered.
    pub fn apply(&self, body: &str, slugs: &[String], catalog: &[TopicTarget]) -> Option<String> {
        if self.is_present(body) {
            return None;
        }
        let block = self.render(slugs, catalog)?;
        Some(Self::append(body, &block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<TopicTarget> {
        vec![
            TopicTarget::new("growth", "Agencia de Growth", ["cac"]),
            TopicTarget::new("gtm", "Agencia GTM", ["gtm"]),
        ]
    }

    fn slugs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn renders_links_under_heading() {
        let section = RelatedSection::default();
        let block = section.render(&slugs(&["gtm", "growth"]), &catalog()).unwrap();
        assert_eq!(
            block,
            "\n\n---\n\n## Artículos relacionados\n\n\
             - [Agencia GTM](/blog/gtm/)\n\
             - [Agencia de Growth](/blog/growth/)\n"
        );
    }

    #[test]
    fn unknown_slugs_are_skipped() {
        let section = RelatedSection::default();
        let block = section.render(&slugs(&["missing", "gtm"]), &catalog()).unwrap();
        assert!(!block.contains("missing"));
        assert!(block.contains("/blog/gtm/"));
        assert!(section.render(&slugs(&["missing"]), &catalog()).is_none());
        assert!(section.render(&[], &catalog()).is_none());
    }

    #[test]
    fn append_trims_trailing_whitespace() {
        let result = RelatedSection::append("Body text\n\n  \n", "\n\nBLOCK\n");
        assert_eq!(result, "Body text\n\nBLOCK\n");
    }

    #[test]
    fn apply_is_idempotent() {
        let section = RelatedSection::default();
        let links = slugs(&["growth"]);
        let once = section.apply("Texto del post.", &links, &catalog()).unwrap();
        assert!(section.is_present(&once));
        assert!(section.apply(&once, &links, &catalog()).is_none());
        assert_eq!(once.matches(DEFAULT_HEADING).count(), 1);
    }

    #[test]
    fn custom_heading_and_base() {
        let section = RelatedSection {
            heading: "## Related".into(),
            link_base: "https://example.com/posts/".into(),
        };
        let block = section.render(&slugs(&["gtm"]), &catalog()).unwrap();
        assert!(block.contains("## Related\n\n- [Agencia GTM](https://example.com/posts/gtm/)"));
    }
}
