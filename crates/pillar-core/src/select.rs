//! Relevance scoring and bounded target selection.
//!
//! An item's score against a target is the number of that target's keywords present in the
//! item's blob; each keyword counts at most once. Targets are ranked by descending score with a
//! stable sort, so equal scores keep catalog order. Selection keeps positive scores only, caps at
//! `max_results`, then pads from the fallback list.

use serde::Serialize;

use crate::{ContentItem, TopicTarget, contains_keyword, item_blob};

/// Body characters included in the matching blob by default.
pub const DEFAULT_BODY_PREFIX_CHARS: usize = 2000;

/// Default number of targets selected per item.
pub const DEFAULT_MAX_RESULTS: usize = 3;

/// A target slug with its keyword score for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredTarget {
    /// Slug of the scored target.
    pub slug: String,
    /// Number of the target's keywords present in the item blob.
    pub score: usize,
}

/// Counts how many of the target's keywords occur in `blob`.
pub fn score_target(blob: &str, target: &TopicTarget) -> usize {
    target
        .keywords
        .iter()
        .filter(|keyword| contains_keyword(blob, keyword))
        .count()
}

/// Scores every target except `own_slug` and ranks them by descending score.
///
/// Ties keep catalog order.
pub fn score_targets<I: ContentItem + ?Sized>(
    item: &I,
    own_slug: &str,
    catalog: &[TopicTarget],
    body_prefix_chars: usize,
) -> Vec<ScoredTarget> {
    let blob = item_blob(item, body_prefix_chars);

    let mut scored: Vec<ScoredTarget> = catalog
        .iter()
        .filter(|target| target.slug != own_slug)
        .map(|target| ScoredTarget {
            slug: target.slug.clone(),
            score: score_target(&blob, target),
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored
}

/// Selects up to `max_results` target slugs for an item.
///
/// Uses the default body cap of [`DEFAULT_BODY_PREFIX_CHARS`]. See [`Selector::select`].
pub fn select_top_targets<I: ContentItem + ?Sized>(
    item: &I,
    own_slug: &str,
    catalog: &[TopicTarget],
    fallback: &[String],
    max_results: usize,
) -> Vec<String> {
    Selector {
        catalog,
        fallback,
        max_results,
        body_prefix_chars: DEFAULT_BODY_PREFIX_CHARS,
    }
    .select(item, own_slug)
}

/// Selection parameters shared by every item in a run.
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a> {
    /// Targets to score against, in precedence order.
    pub catalog: &'a [TopicTarget],
    /// Ordered slugs used to pad short selections.
    pub fallback: &'a [String],
    /// Upper bound on selected slugs.
    pub max_results: usize,
    /// Body characters included in the blob.
    pub body_prefix_chars: usize,
}

impl<'a> Selector<'a> {
    /// Creates a selector with default limits.
    pub fn new(catalog: &'a [TopicTarget], fallback: &'a [String]) -> Self {
        Self {
            catalog,
            fallback,
            max_results: DEFAULT_MAX_RESULTS,
            body_prefix_chars: DEFAULT_BODY_PREFIX_CHARS,
        }
    }

    /// Returns the ordered, distinct slugs to recommend for `item`.
    ///
    /// The result never contains `own_slug` and never exceeds `max_results`. Targets with a
    /// positive score come first, best first; remaining slots are filled from the fallback list in
    /// declared order, skipping slugs already selected.
    pub fn select<I: ContentItem + ?Sized>(&self, item: &I, own_slug: &str) -> Vec<String> {
        let mut selected: Vec<String> =
            score_targets(item, own_slug, self.catalog, self.body_prefix_chars)
                .into_iter()
                .filter(|scored| scored.score > 0)
                .take(self.max_results)
                .map(|scored| scored.slug)
                .collect();

        for slug in self.fallback {
            if selected.len() >= self.max_results {
                break;
            }
            if slug != own_slug && !selected.contains(slug) {
                selected.push(slug.clone());
            }
        }

        selected
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::fixtures::Item;

    fn catalog() -> Vec<TopicTarget> {
        vec![
            TopicTarget::new("growth", "Growth", ["growth hacking", "cac", "escalar fintech"]),
            TopicTarget::new("outreach", "Outreach", ["outreach b2b", "prospección"]),
            TopicTarget::new("gtm", "GTM", ["go-to-market", "gtm fintech"]),
            TopicTarget::new("afiliados", "Afiliados", ["programa afiliado", "k-factor"]),
        ]
    }

    fn fallback() -> Vec<String> {
        vec!["growth".into(), "gtm".into(), "automatizacion".into()]
    }

    #[test]
    fn score_counts_presence_not_frequency() {
        let target = TopicTarget::new("t", "T", ["cac", "ltv"]);
        assert_eq!(score_target("cac cac cac", &target), 1);
        assert_eq!(score_target("cac y ltv", &target), 2);
        assert_eq!(score_target("nada", &target), 0);
    }

    #[test]
    fn score_is_case_insensitive() {
        let item = Item::new("Guía de Outreach B2B para fintechs", "guia-outreach");
        let scored = score_targets(&item, "guia-outreach", &catalog(), 2000);
        let outreach = scored.iter().find(|s| s.slug == "outreach").unwrap();
        assert_eq!(outreach.score, 1);
    }

    #[test]
    fn scores_are_ranked_with_stable_ties() {
        let item = Item::new("k-factor y gtm fintech", "post");
        let scored = score_targets(&item, "post", &catalog(), 2000);
        let order: Vec<_> = scored.iter().map(|s| s.slug.as_str()).collect();
        // gtm and afiliados both score 1; gtm is earlier in the catalog.
        assert_eq!(order, vec!["gtm", "afiliados", "growth", "outreach"]);
    }

    #[test]
    fn own_slug_is_never_scored() {
        let item = Item::new("growth hacking", "growth");
        let scored = score_targets(&item, "growth", &catalog(), 2000);
        assert!(scored.iter().all(|s| s.slug != "growth"));
        assert_eq!(scored.len(), 3);
    }

    #[test]
    fn fallback_fills_remaining_slots_in_order() {
        let item = Item::new("Guía de Outreach B2B para fintechs", "guia-outreach-b2b");
        let selected = select_top_targets(&item, "guia-outreach-b2b", &catalog(), &fallback(), 3);
        assert_eq!(selected, vec!["outreach", "growth", "gtm"]);
    }

    #[test]
    fn fallback_skips_own_slug_and_duplicates() {
        let item = Item::new("growth hacking y cac", "gtm");
        let selected = select_top_targets(&item, "gtm", &catalog(), &fallback(), 3);
        // growth matches; gtm is self; automatizacion pads.
        assert_eq!(selected, vec!["growth", "automatizacion"]);
    }

    #[test]
    fn matches_are_truncated_to_max_results() {
        let item = Item::new("cac outreach b2b gtm fintech k-factor", "post");
        let selected = select_top_targets(&item, "post", &catalog(), &fallback(), 2);
        assert_eq!(selected, vec!["growth", "outreach"]);
    }

    #[test]
    fn empty_catalog_is_filled_from_fallback() {
        let item = Item::new("anything", "post");
        let selected = select_top_targets(&item, "post", &[], &fallback(), 3);
        assert_eq!(selected, vec!["growth", "gtm", "automatizacion"]);
    }

    #[test]
    fn own_slug_excluded_even_when_fallback_is_only_self() {
        let item = Item::new("", "growth");
        let fallback = vec!["growth".to_string(), "growth".to_string()];
        let selected = select_top_targets(&item, "growth", &[], &fallback, 3);
        assert!(selected.is_empty());
    }

    #[test]
    fn zero_max_results_selects_nothing() {
        let item = Item::new("cac", "post");
        assert!(select_top_targets(&item, "post", &catalog(), &fallback(), 0).is_empty());
    }

    #[test]
    fn empty_item_gets_only_fallback() {
        let item = Item::new("", "");
        let selected = select_top_targets(&item, "", &catalog(), &fallback(), 3);
        assert_eq!(selected, vec!["growth", "gtm", "automatizacion"]);
    }

    #[test]
    fn body_cap_limits_matching_surface() {
        let item = Item::new("t", "s").with_body("xxxxxxxxxx cac");
        let selector = Selector {
            body_prefix_chars: 10,
            ..Selector::new(&[], &[])
        };
        let catalog = catalog();
        let capped = Selector { catalog: &catalog, ..selector };
        assert!(capped.select(&item, "s").is_empty());

        let full = Selector {
            body_prefix_chars: 2000,
            ..capped
        };
        assert_eq!(full.select(&item, "s"), vec!["growth"]);
    }

    #[test]
    fn selection_is_deterministic_and_distinct() {
        let item = Item::new("cac gtm fintech outreach b2b", "post").with_body("k-factor");
        let selector = Selector::new(&[], &[]);
        let catalog = catalog();
        let fb = fallback();
        let selector = Selector {
            catalog: &catalog,
            fallback: &fb,
            ..selector
        };
        let first = selector.select(&item, "post");
        for _ in 0..5 {
            assert_eq!(selector.select(&item, "post"), first);
        }
        let distinct: HashSet<&String> = first.iter().collect();
        assert_eq!(distinct.len(), first.len());
        assert!(first.len() <= selector.max_results);
    }
}
