//! Configuration merging.
//!
//! Merges multiple `RawConfig` files into a single resolved `Config`,
//! applying precedence rules and resolving paths.

use std::collections::HashSet;

use pillar_core::{CategoryRule, TopicTarget};

use crate::{
    ClassifierSettings, Config, ConfigError, LinkerSettings, Settings,
    discovery::ParsedConfig,
    parse::{RawClassifierSettings, RawLinkerSettings},
    resolve::resolve_posts_path,
};

/// Merges multiple configuration files into a single resolved `Config`.
///
/// Configs should be provided in precedence order: highest precedence first (closest to CWD),
/// lowest precedence last (global config).
///
/// Merge rules:
/// - Scalar settings: first defined value wins (highest precedence)
/// - Fallback list: taken whole from the first config that defines it
/// - Targets: merged by slug, first definition wins completely; higher-precedence targets come
///   first in the catalog
/// - Classifier rules: concatenated, higher-precedence rules first
pub fn merge_configs(configs: &[ParsedConfig]) -> Result<Config, ConfigError> {
    if configs.is_empty() {
        return Ok(Config::default());
    }

    let settings = merge_settings(configs)?;
    let linker = merge_linker_settings(configs);
    let classifier = merge_classifier_settings(configs);
    let config_root = configs.first().map(|c| c.dir().to_path_buf());
    let sources = configs.iter().map(|c| c.path.clone()).collect();

    Ok(Config {
        settings,
        linker,
        classifier,
        config_root,
        sources,
    })
}

/// Merges general settings, resolving the posts path against its defining file.
fn merge_settings(configs: &[ParsedConfig]) -> Result<Settings, ConfigError> {
    let defining = configs.iter().find_map(|parsed| {
        let posts = parsed.config.settings.as_ref()?.posts.as_deref()?;
        Some((posts, parsed.dir()))
    });

    let posts = match defining {
        Some((posts, dir)) => Some(resolve_posts_path(posts, dir)?),
        None => None,
    };

    Ok(Settings { posts })
}

/// Merges linker settings and the target catalog.
fn merge_linker_settings(configs: &[ParsedConfig]) -> LinkerSettings {
    let mut result = LinkerSettings::default();

    // Iterate in reverse (lowest precedence first) so higher precedence overwrites
    for parsed in configs.iter().rev() {
        if let Some(ref linker) = parsed.config.linker {
            apply_raw_linker_scalars(&mut result, linker);
        }
    }

    // Ordered lists are never merged element-wise: the closest definition wins whole.
    if let Some(fallback) = configs
        .iter()
        .find_map(|parsed| parsed.config.linker.as_ref()?.fallback.as_ref())
    {
        result.fallback = fallback.clone();
    }

    result.targets = merge_targets(configs);
    result
}

/// Applies raw linker scalars to result, overwriting any present values.
fn apply_raw_linker_scalars(result: &mut LinkerSettings, raw: &RawLinkerSettings) {
    if let Some(ref v) = raw.heading {
        result.section.heading = v.clone();
    }
    if let Some(ref v) = raw.link_base {
        result.section.link_base = v.clone();
    }
    if let Some(v) = raw.max_results {
        result.max_results = v;
    }
    if let Some(v) = raw.body_prefix_chars {
        result.body_prefix_chars = v;
    }
}

/// Merges targets from all configs by slug.
///
/// Iterates in precedence order (highest first) so the first definition of a slug wins and
/// keeps its position.
fn merge_targets(configs: &[ParsedConfig]) -> Vec<TopicTarget> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut targets = Vec::new();

    for parsed in configs {
        let Some(raw_targets) = parsed
            .config
            .linker
            .as_ref()
            .and_then(|l| l.target.as_ref())
        else {
            continue;
        };
        for raw in raw_targets {
            if seen.insert(raw.slug.as_str()) {
                targets.push(TopicTarget::new(
                    raw.slug.clone(),
                    raw.title.clone(),
                    &raw.keywords,
                ));
            }
        }
    }

    targets
}

/// Merges classifier settings.
fn merge_classifier_settings(configs: &[ParsedConfig]) -> ClassifierSettings {
    let mut result = ClassifierSettings::default();

    // First pass: scalar values (reverse order)
    for parsed in configs.iter().rev() {
        if let Some(ref classifier) = parsed.config.classifier {
            apply_raw_classifier_scalars(&mut result, classifier);
        }
    }

    // Second pass: rules (forward order - high precedence first)
    for parsed in configs {
        if let Some(ref classifier) = parsed.config.classifier
            && let Some(ref rules) = classifier.rule
        {
            for rule in rules {
                result
                    .rules
                    .push(CategoryRule::new(rule.category.clone(), &rule.keywords));
            }
        }
    }

    result
}

/// Applies raw classifier scalar settings to result (not rules).
fn apply_raw_classifier_scalars(result: &mut ClassifierSettings, raw: &RawClassifierSettings) {
    if let Some(ref v) = raw.default {
        result.default_category = v.clone();
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use super::*;
    use crate::parse::parse_config_str;

    fn parsed(path: &str, toml: &str) -> ParsedConfig {
        ParsedConfig {
            path: PathBuf::from(path),
            config: parse_config_str(toml, Path::new(path)).unwrap(),
        }
    }

    #[test]
    fn test_merge_empty() {
        let config = merge_configs(&[]).unwrap();
        assert!(config.linker.targets.is_empty());
        assert!(config.config_root.is_none());
    }

    #[test]
    fn test_merge_scalars_first_defined_wins() {
        let local = parsed("/site/.pillar.toml", "[linker]\nmax_results = 5\n");
        let global = parsed(
            "/home/u/.pillar.toml",
            "[linker]\nmax_results = 2\nheading = \"## Related\"\n",
        );

        let config = merge_configs(&[local, global]).unwrap();
        assert_eq!(config.linker.max_results, 5);
        assert_eq!(config.linker.section.heading, "## Related");
        assert_eq!(config.linker.body_prefix_chars, 2000);
        assert_eq!(config.config_root, Some(PathBuf::from("/site")));
        assert_eq!(
            config.sources,
            vec![
                PathBuf::from("/site/.pillar.toml"),
                PathBuf::from("/home/u/.pillar.toml")
            ]
        );
    }

    #[test]
    fn test_merge_posts_resolved_against_defining_file() {
        let local = parsed("/site/scripts/.pillar.toml", "[linker]\nmax_results = 1\n");
        let parent = parsed("/site/.pillar.toml", "[settings]\nposts = \"data/posts.json\"\n");

        let config = merge_configs(&[local, parent]).unwrap();
        assert_eq!(
            config.settings.posts,
            Some(PathBuf::from("/site/data/posts.json"))
        );
    }

    #[test]
    fn test_merge_fallback_taken_whole() {
        let local = parsed("/a/.pillar.toml", "[linker]\nfallback = [\"x\"]\n");
        let global = parsed("/b/.pillar.toml", "[linker]\nfallback = [\"y\", \"z\"]\n");

        let config = merge_configs(&[local, global]).unwrap();
        assert_eq!(config.linker.fallback, vec!["x"]);
    }

    #[test]
    fn test_merge_targets_by_slug_first_wins() {
        let local = parsed(
            "/a/.pillar.toml",
            r#"
[[linker.target]]
slug = "gtm"
title = "Local GTM"
keywords = ["GTM Fintech"]
"#,
        );
        let global = parsed(
            "/b/.pillar.toml",
            r#"
[[linker.target]]
slug = "growth"
title = "Growth"
keywords = ["cac"]

[[linker.target]]
slug = "gtm"
title = "Global GTM"
keywords = ["go-to-market"]
"#,
        );

        let config = merge_configs(&[local, global]).unwrap();
        let targets = &config.linker.targets;
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].slug, "gtm");
        assert_eq!(targets[0].title, "Local GTM");
        assert_eq!(targets[0].keywords, vec!["gtm fintech"]);
        assert_eq!(targets[1].slug, "growth");
    }

    #[test]
    fn test_merge_rules_concatenated_in_precedence_order() {
        let local = parsed(
            "/a/.pillar.toml",
            "[[classifier.rule]]\ncategory = \"Local\"\nkeywords = [\"X\"]\n",
        );
        let global = parsed(
            "/b/.pillar.toml",
            "[classifier]\ndefault = \"Estrategia\"\n\n[[classifier.rule]]\ncategory = \"Global\"\nkeywords = [\"y\"]\n",
        );

        let config = merge_configs(&[local, global]).unwrap();
        let categories: Vec<_> = config
            .classifier
            .rules
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(categories, vec!["Local", "Global"]);
        assert_eq!(config.classifier.rules[0].keywords, vec!["x"]);
        assert_eq!(config.classifier.default_category, "Estrategia");
    }
}
