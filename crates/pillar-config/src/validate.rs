//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::fmt;

use crate::Config;

/// Keywords shorter than this many characters are flagged: without word boundaries they tend
/// to match inside unrelated words.
pub const MIN_KEYWORD_CHARS: usize = 3;

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    /// The target catalog is empty; linking only uses the fallback list.
    NoTargetsDefined,
    /// No classifier rules; every post gets the default category.
    NoRulesDefined,
    /// `max_results` is zero, so linking never selects anything.
    ZeroMaxResults,
    /// A fallback slug has no catalog entry and can never be rendered.
    UnknownFallbackSlug {
        /// The unknown slug.
        slug: String,
    },
    /// A target has no keywords and can only be reached through the fallback list.
    TargetWithoutKeywords {
        /// Slug of the target.
        slug: String,
    },
    /// A rule has no keywords and never matches.
    RuleWithoutKeywords {
        /// Category of the rule.
        category: String,
    },
    /// A keyword is short enough to match inside unrelated words.
    ShortKeyword {
        /// Target slug or rule category owning the keyword.
        owner: String,
        /// The keyword.
        keyword: String,
    },
    /// The configured posts file does not exist.
    PostsFileMissing {
        /// Path that doesn't exist.
        path: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoTargetsDefined => write!(f, "no link targets are defined in configuration"),
            Self::NoRulesDefined => write!(f, "no classifier rules are defined in configuration"),
            Self::ZeroMaxResults => write!(f, "linker max_results is 0"),
            Self::UnknownFallbackSlug { slug } => {
                write!(f, "fallback slug '{slug}' is not a defined target")
            }
            Self::TargetWithoutKeywords { slug } => {
                write!(f, "target '{slug}' has no keywords")
            }
            Self::RuleWithoutKeywords { category } => {
                write!(f, "rule for category '{category}' has no keywords")
            }
            Self::ShortKeyword { owner, keyword } => {
                write!(
                    f,
                    "keyword '{keyword}' in '{owner}' is shorter than {MIN_KEYWORD_CHARS} characters"
                )
            }
            Self::PostsFileMissing { path } => write!(f, "posts file does not exist: {path}"),
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if let Some(ref posts) = config.settings.posts
        && !posts.is_file()
    {
        warnings.push(ConfigWarning::PostsFileMissing {
            path: posts.display().to_string(),
        });
    }

    warnings.extend(validate_linker(config));
    warnings.extend(validate_classifier(config));

    warnings
}

/// Validates the target catalog and fallback list.
fn validate_linker(config: &Config) -> Vec<ConfigWarning> {
    let linker = &config.linker;
    let mut warnings = Vec::new();

    if linker.max_results == 0 {
        warnings.push(ConfigWarning::ZeroMaxResults);
    }

    if linker.targets.is_empty() {
        warnings.push(ConfigWarning::NoTargetsDefined);
    }

    for slug in &linker.fallback {
        if !linker.is_target(slug) {
            warnings.push(ConfigWarning::UnknownFallbackSlug { slug: slug.clone() });
        }
    }

    for target in &linker.targets {
        if target.keywords.is_empty() {
            warnings.push(ConfigWarning::TargetWithoutKeywords {
                slug: target.slug.clone(),
            });
        }
        warnings.extend(short_keywords(&target.slug, &target.keywords));
    }

    warnings
}

/// Validates the classifier rule list.
fn validate_classifier(config: &Config) -> Vec<ConfigWarning> {
    let classifier = &config.classifier;
    let mut warnings = Vec::new();

    if classifier.rules.is_empty() {
        warnings.push(ConfigWarning::NoRulesDefined);
    }

    for rule in &classifier.rules {
        if rule.keywords.is_empty() {
            warnings.push(ConfigWarning::RuleWithoutKeywords {
                category: rule.category.clone(),
            });
        }
        warnings.extend(short_keywords(&rule.category, &rule.keywords));
    }

    warnings
}

/// Flags keywords below [`MIN_KEYWORD_CHARS`].
fn short_keywords<'a>(
    owner: &'a str,
    keywords: &'a [String],
) -> impl Iterator<Item = ConfigWarning> + 'a {
    keywords
        .iter()
        .filter(|k| k.chars().count() < MIN_KEYWORD_CHARS)
        .map(move |k| ConfigWarning::ShortKeyword {
            owner: owner.to_string(),
            keyword: k.clone(),
        })
}
