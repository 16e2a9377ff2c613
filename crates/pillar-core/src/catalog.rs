//! Static configuration records: topic targets and category rules.
//!
//! Both are plain values loaded once per run and never mutated. Keyword order is preserved
//! exactly as declared, and so is the order of targets and rules in their containing lists:
//! ordering is part of the semantics.

use serde::Serialize;

/// A pillar page that other content can link to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicTarget {
    /// Unique slug of the target page.
    pub slug: String,
    /// Display title used when rendering a link.
    pub title: String,
    /// Lowercased relevance phrases, in declared order.
    pub keywords: Vec<String>,
}

impl TopicTarget {
    /// Creates a target, lowercasing every keyword.
    pub fn new<S, K>(slug: impl Into<String>, title: impl Into<String>, keywords: K) -> Self
    where
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            slug: slug.into(),
            title: title.into(),
            keywords: lowercase_all(keywords),
        }
    }
}

/// One classification rule: a category and the phrases that trigger it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRule {
    /// Category assigned when any keyword matches.
    pub category: String,
    /// Lowercased trigger phrases, in declared order.
    pub keywords: Vec<String>,
}

impl CategoryRule {
    /// Creates a rule, lowercasing every keyword.
    pub fn new<S, K>(category: impl Into<String>, keywords: K) -> Self
    where
        K: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            category: category.into(),
            keywords: lowercase_all(keywords),
        }
    }
}

/// Looks up a target by slug, preserving the first match in catalog order.
pub fn find_target<'a>(catalog: &'a [TopicTarget], slug: &str) -> Option<&'a TopicTarget> {
    catalog.iter().find(|t| t.slug == slug)
}

/// Lowercases each phrase, keeping order.
fn lowercase_all<S, K>(keywords: K) -> Vec<String>
where
    K: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().to_lowercase())
        .collect()
}
