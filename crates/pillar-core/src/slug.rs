//! URL slug generation for post titles.
//!
//! Slugs keep non-ASCII letters but drop accents, so Spanish titles produce readable URLs:
//! - Lowercase the text
//! - Decompose (NFD) and drop combining marks, so `ó` becomes `o` and `ñ` becomes `n`
//!
//!   Every mark category is dropped, spacing marks included. Latin text is unaffected, but
//!   scripts that write vowels as spacing marks (Devanagari `ि`, `ी`) lose them.
//! - Trim, then replace whitespace runs with a hyphen
//! - Remove everything except word characters and hyphens
//! - Collapse consecutive hyphens

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Creates a URL slug from a title.
///
/// Leading or trailing hyphens that survive punctuation removal are kept; an empty or
/// all-punctuation title yields an empty slug.
pub fn create_slug(text: &str) -> String {
    let stripped: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect();

    let mut slug = String::with_capacity(stripped.len());
    let mut in_whitespace = false;
    for c in stripped.trim().chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
            continue;
        }
        in_whitespace = false;
        if c.is_alphanumeric() || c == '_' || c == '-' {
            slug.push(c);
        }
    }

    collapse_hyphens(&slug)
}

/// Collapses runs of hyphens into a single hyphen.
fn collapse_hyphens(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut prev_hyphen = false;
    for c in text.chars() {
        if c == '-' {
            if !prev_hyphen {
                result.push('-');
            }
            prev_hyphen = true;
        } else {
            result.push(c);
            prev_hyphen = false;
        }
    }
    result
}
