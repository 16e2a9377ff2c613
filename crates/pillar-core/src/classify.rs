//! First-match-wins rule classification.

use crate::{CategoryRule, contains_keyword};

/// Assigns an item to a category from its slug and title.
///
/// Rules are tried in declared order and, within a rule, keywords in declared order. The first
/// keyword found in the lowercased `slug + " " + title` blob decides the category; later rules
/// are never consulted. Returns `default` when nothing matches. Rule order is part of the
/// contract: an item matching two rules always gets the earlier one.
pub fn classify<'a>(
    slug: &str,
    title: &str,
    rules: &'a [CategoryRule],
    default: &'a str,
) -> &'a str {
    let blob = format!("{slug} {title}").to_lowercase();

    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| contains_keyword(&blob, kw)))
        .map_or(default, |rule| rule.category.as_str())
}
