//! Configuration file parsing.
//!
//! Parses individual `.pillar.toml` files into intermediate `RawConfig` structures
//! that preserve the optional nature of all fields before merging.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
///
/// All fields are optional to support partial configs that will be merged.
/// This mirrors the TOML schema exactly.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// When true, stop discovery here - ignore parent and global configs.
    pub root: Option<bool>,
    /// General settings section.
    pub settings: Option<RawSettings>,
    /// Internal linking section, including the target catalog.
    pub linker: Option<RawLinkerSettings>,
    /// Recategorization section, including the rule list.
    pub classifier: Option<RawClassifierSettings>,
}

/// Raw general settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSettings {
    /// Path to the posts JSON file, relative to the config file's directory.
    pub posts: Option<String>,
}

/// Raw linker settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawLinkerSettings {
    /// Heading of the appended section; also the idempotence marker.
    pub heading: Option<String>,
    /// Maximum targets linked per post.
    pub max_results: Option<usize>,
    /// Body characters included in the scoring blob.
    pub body_prefix_chars: Option<usize>,
    /// URL prefix joined with a target slug.
    pub link_base: Option<String>,
    /// Ordered fallback slugs used to pad short selections.
    pub fallback: Option<Vec<String>>,
    /// Target catalog, as `[[linker.target]]` tables.
    pub target: Option<Vec<RawTarget>>,
}

/// Raw topic target from TOML.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawTarget {
    /// Unique slug of the target page.
    pub slug: String,
    /// Display title for rendered links.
    pub title: String,
    /// Relevance phrases. Accepts either a single string or an array of strings.
    #[serde_as(as = "OneOrMany<_>")]
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Raw classifier settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawClassifierSettings {
    /// Category assigned when no rule matches.
    pub default: Option<String>,
    /// Ordered rules, as `[[classifier.rule]]` tables.
    pub rule: Option<Vec<RawRule>>,
}

/// Raw category rule from TOML.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    /// Category assigned on match.
    pub category: String,
    /// Trigger phrases. Accepts either a single string or an array of strings.
    #[serde_as(as = "OneOrMany<_>")]
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Parses a configuration file from disk.
///
/// Returns a `RawConfig` with all fields as optionals, ready for merging.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration from a TOML string without path context.
///
/// Useful for validating template content (tests only).
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = parse_config_str("", Path::new("test.toml")).unwrap();
        assert!(config.root.is_none());
        assert!(config.settings.is_none());
        assert!(config.linker.is_none());
        assert!(config.classifier.is_none());
    }

    #[test]
    fn test_parse_settings() {
        let toml = r#"
[settings]
posts = "data/posts.json"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        assert_eq!(
            config.settings.unwrap().posts.as_deref(),
            Some("data/posts.json")
        );
    }

    #[test]
    fn test_parse_linker_with_targets_in_order() {
        let toml = r#"
[linker]
max_results = 2
fallback = ["b", "a"]

[[linker.target]]
slug = "b"
title = "B page"
keywords = ["beta", "second"]

[[linker.target]]
slug = "a"
title = "A page"
keywords = ["alpha"]
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let linker = config.linker.unwrap();
        assert_eq!(linker.max_results, Some(2));
        assert_eq!(linker.fallback.unwrap(), vec!["b", "a"]);
        let targets = linker.target.unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].slug, "b");
        assert_eq!(targets[0].keywords, vec!["beta", "second"]);
        assert_eq!(targets[1].slug, "a");
        assert!(linker.heading.is_none());
    }

    #[test]
    fn test_parse_keywords_single_string() {
        let toml = r#"
[[classifier.rule]]
category = "GEO"
keywords = "chatgpt"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let rules = config.classifier.unwrap().rule.unwrap();
        assert_eq!(rules[0].keywords, vec!["chatgpt"]);
    }

    #[test]
    fn test_parse_missing_keywords_defaults_empty() {
        let toml = r#"
[[linker.target]]
slug = "a"
title = "A"
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let targets = config.linker.unwrap().target.unwrap();
        assert!(targets[0].keywords.is_empty());
    }

    #[test]
    fn test_parse_classifier_rules_in_order() {
        let toml = r#"
[classifier]
default = "Estrategia"

[[classifier.rule]]
category = "GEO"
keywords = ["chatgpt", "llm"]

[[classifier.rule]]
category = "Growth"
keywords = ["cac"]
"#;
        let config = parse_config_str(toml, Path::new("test.toml")).unwrap();
        let classifier = config.classifier.unwrap();
        assert_eq!(classifier.default.as_deref(), Some("Estrategia"));
        let categories: Vec<_> = classifier
            .rule
            .unwrap()
            .into_iter()
            .map(|r| r.category)
            .collect();
        assert_eq!(categories, vec!["GEO", "Growth"]);
    }

    #[test]
    fn test_parse_root() {
        let config = parse_config_str("root = true\n", Path::new("test.toml")).unwrap();
        assert_eq!(config.root, Some(true));
    }

    #[test]
    fn test_parse_error_includes_path() {
        let err = parse_config_str("[linker\n", Path::new("/tmp/bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains("/tmp/bad.toml"));
    }

    #[test]
    fn test_target_requires_slug() {
        let toml = r#"
[[linker.target]]
title = "No slug"
"#;
        assert!(parse_config(toml).is_err());
    }
}
