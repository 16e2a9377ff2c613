//! Configuration templates for `pillar init`.
//!
//! The template is a complete, valid configuration for the marketing site: its pillar pages,
//! fallback order and category rules. Global configs get the same content commented out.

/// Configuration template (valid TOML).
const TEMPLATE: &str = include_str!("../templates/config.toml");

/// Returns the local configuration template, ready to use.
pub fn local_template() -> String {
    TEMPLATE.to_string()
}

/// Returns the global configuration template as a commented-out example.
pub fn global_template() -> String {
    comment_template(TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Lines that are already comments are preserved as-is. Non-comment, non-empty
/// lines get a "# " prefix. Empty lines are preserved.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}
