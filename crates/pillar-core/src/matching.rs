//! The shared keyword-match primitive and blob construction.
//!
//! A blob is the lowercased text an item is matched against. Keywords are literal phrases
//! matched as contiguous substrings: there is no tokenization, no stemming and no word-boundary
//! check, so a short keyword can match inside a longer word.

use crate::ContentItem;

/// Returns true if `keyword` occurs as a contiguous substring of `blob`.
///
/// Both arguments are expected to be lowercase already. Keywords may contain spaces, hyphens or
/// punctuation; they are matched literally.
pub fn contains_keyword(blob: &str, keyword: &str) -> bool {
    blob.contains(keyword)
}

/// Replaces slug separators with spaces so multi-word keywords can match a slug.
pub fn slug_words(slug: &str) -> String {
    slug.replace('-', " ")
}

/// Builds the lowercased matching surface for an item.
///
/// The blob is `title`, the slug with hyphens as spaces, and the first `body_prefix_chars`
/// characters of the body, joined by single spaces. The body cap bounds scoring cost on long
/// bodies and counts characters, never bytes.
pub fn item_blob<I: ContentItem + ?Sized>(item: &I, body_prefix_chars: usize) -> String {
    let body = char_prefix(item.body(), body_prefix_chars);
    let mut blob = String::with_capacity(item.title().len() + item.slug().len() + body.len() + 2);
    blob.push_str(item.title());
    blob.push(' ');
    blob.push_str(&slug_words(item.slug()));
    blob.push(' ');
    blob.push_str(body);
    blob.to_lowercase()
}

/// Returns the first `max_chars` characters of `text`.
fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::Item;

    #[test]
    fn matches_multi_word_phrase() {
        assert!(contains_keyword("guía de outreach b2b", "outreach b2b"));
        assert!(!contains_keyword("guía de outreach", "outreach b2b"));
    }

    #[test]
    fn matches_inside_larger_words() {
        // No word boundaries: "app" is found inside "apparatus".
        assert!(contains_keyword("the apparatus", "app"));
        assert!(contains_keyword("escalar-usuarios", "escalar-usuario"));
    }

    #[test]
    fn empty_keyword_always_matches() {
        assert!(contains_keyword("", ""));
        assert!(contains_keyword("anything", ""));
    }

    #[test]
    fn blob_joins_title_slug_and_body() {
        let item = Item::new("Guía de Outreach", "outreach-b2b-fintech").with_body("Texto LIBRE");
        assert_eq!(
            item_blob(&item, 2000),
            "guía de outreach outreach b2b fintech texto libre"
        );
    }

    #[test]
    fn blob_caps_body_by_characters() {
        let item = Item::new("t", "s").with_body("ñandú y más");
        assert_eq!(item_blob(&item, 5), "t s ñandú");
        assert_eq!(item_blob(&item, 0), "t s ");
    }

    #[test]
    fn blob_of_empty_item_has_no_text() {
        let item = Item::new("", "");
        assert!(item_blob(&item, 2000).trim().is_empty());
    }

    #[test]
    fn char_prefix_handles_short_text() {
        assert_eq!(char_prefix("abc", 10), "abc");
        assert_eq!(char_prefix("abc", 3), "abc");
        assert_eq!(char_prefix("abc", 2), "ab");
    }
}
