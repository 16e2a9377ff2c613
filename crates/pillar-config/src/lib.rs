//! Configuration system for pillar.
//!
//! pillar uses TOML configuration files named `.pillar.toml`. Configuration is resolved by
//! walking up the directory tree from the current working directory, collecting any
//! `.pillar.toml` files found, then loading `~/.pillar.toml` as the global config with lowest
//! precedence.
//!
//! The target catalog, fallback list and classifier rules are configuration data: ordered
//! lists whose order is part of their meaning.

#![warn(missing_docs)]

mod discovery;
mod error;
mod merge;
mod parse;
mod resolve;
mod templates;
#[cfg(test)]
mod test_support;
mod validate;

use std::path::{Path, PathBuf};

pub use discovery::{
    CONFIG_FILENAME, ParsedConfig, discover_configs, global_config_path, is_global_config,
};
pub use error::ConfigError;
pub use merge::merge_configs;
use pillar_core::{
    CategoryRule, DEFAULT_BODY_PREFIX_CHARS, DEFAULT_MAX_RESULTS, RelatedSection, Selector,
    TopicTarget,
};
pub use parse::{
    RawClassifierSettings, RawConfig, RawLinkerSettings, RawRule, RawSettings, RawTarget,
    parse_config_file, parse_config_str,
};
pub use resolve::resolve_posts_path;
use serde::Serialize;
pub use templates::{global_template, local_template};
pub use validate::{ConfigWarning, MIN_KEYWORD_CHARS};
use validate::validate_config;

/// Category assigned when no rule matches and no default is configured.
pub const DEFAULT_CATEGORY: &str = "General";

/// Top-level merged configuration for pillar.
///
/// This represents the fully resolved configuration after merging all discovered
/// `.pillar.toml` files according to precedence rules.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// General settings.
    pub settings: Settings,
    /// Internal linking settings and target catalog.
    pub linker: LinkerSettings,
    /// Recategorization settings and rules.
    pub classifier: ClassifierSettings,
    /// Directory containing the most specific config file.
    pub config_root: Option<PathBuf>,
    /// Config files merged into this configuration, highest precedence first.
    pub sources: Vec<PathBuf>,
}

impl Config {
    /// Loads configuration by discovering and merging all relevant `.pillar.toml` files.
    ///
    /// This is the main entry point for loading configuration. Each file is parsed once, during
    /// discovery, then merged with the closest to `cwd` winning.
    ///
    /// Returns `Ok(Config::default())` if no configuration files are found.
    pub fn load(cwd: &Path) -> Result<Self, ConfigError> {
        merge_configs(&discover_configs(cwd)?)
    }

    /// Loads configuration from a specific list of config file paths.
    ///
    /// Files should be provided in precedence order: highest precedence first.
    /// This is primarily useful for testing.
    ///
    /// Returns `Ok(Config::default())` if the list is empty.
    pub fn load_from_files(files: &[PathBuf]) -> Result<Self, ConfigError> {
        if files.is_empty() {
            return Ok(Self::default());
        }

        let parsed = files
            .iter()
            .map(|path| ParsedConfig::read(path.clone()))
            .collect::<Result<Vec<_>, ConfigError>>()?;

        merge_configs(&parsed)
    }

    /// Validates the configuration and returns any warnings.
    ///
    /// This checks for:
    /// - An empty target catalog or rule list
    /// - `max_results = 0`, which disables linking
    /// - Fallback slugs with no catalog entry (they would never render)
    /// - Targets or rules without keywords
    /// - Very short keywords, which match inside unrelated words
    /// - A configured posts file that does not exist
    pub fn validate(&self) -> Vec<ConfigWarning> {
        validate_config(self)
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// This outputs the merged configuration in the same format as a `.pillar.toml` file,
    /// making it easy to see the effective catalog and rule order.
    pub fn settings_to_toml(&self) -> String {
        let serializable = SerializableConfig {
            settings: SerializableSettings {
                posts: self
                    .settings
                    .posts
                    .as_ref()
                    .map(|p| p.display().to_string()),
            },
            linker: SerializableLinker {
                heading: &self.linker.section.heading,
                max_results: self.linker.max_results,
                body_prefix_chars: self.linker.body_prefix_chars,
                link_base: &self.linker.section.link_base,
                fallback: &self.linker.fallback,
                target: &self.linker.targets,
            },
            classifier: SerializableClassifier {
                default: &self.classifier.default_category,
                rule: &self.classifier.rules,
            },
        };
        toml::to_string_pretty(&serializable).expect("settings serialization should not fail")
    }
}

/// General settings for pillar.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    /// Resolved path to the posts JSON file, if configured.
    pub posts: Option<PathBuf>,
}

/// Settings for the internal linking pass.
#[derive(Debug, Clone)]
pub struct LinkerSettings {
    /// Heading and link format of the appended section.
    pub section: RelatedSection,
    /// Maximum targets linked per post.
    pub max_results: usize,
    /// Body characters included in the scoring blob.
    pub body_prefix_chars: usize,
    /// Ordered slugs used to pad short selections.
    pub fallback: Vec<String>,
    /// Target catalog in precedence order.
    pub targets: Vec<TopicTarget>,
}

impl Default for LinkerSettings {
    fn default() -> Self {
        Self {
            section: RelatedSection::default(),
            max_results: DEFAULT_MAX_RESULTS,
            body_prefix_chars: DEFAULT_BODY_PREFIX_CHARS,
            fallback: Vec::new(),
            targets: Vec::new(),
        }
    }
}

impl LinkerSettings {
    /// Returns a selector borrowing this catalog and fallback list.
    pub fn selector(&self) -> Selector<'_> {
        Selector {
            catalog: &self.targets,
            fallback: &self.fallback,
            max_results: self.max_results,
            body_prefix_chars: self.body_prefix_chars,
        }
    }

    /// Returns true if `slug` names a target in the catalog.
    pub fn is_target(&self, slug: &str) -> bool {
        self.targets.iter().any(|t| t.slug == slug)
    }
}

/// Settings for the recategorization pass.
#[derive(Debug, Clone)]
pub struct ClassifierSettings {
    /// Category assigned when no rule matches.
    pub default_category: String,
    /// Rules in precedence order; the first match wins.
    pub rules: Vec<CategoryRule>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            default_category: DEFAULT_CATEGORY.to_string(),
            rules: Vec::new(),
        }
    }
}

/// Internal struct for TOML serialization of the effective configuration.
#[derive(Serialize)]
struct SerializableConfig<'a> {
    /// General settings.
    settings: SerializableSettings,
    /// Linker settings.
    linker: SerializableLinker<'a>,
    /// Classifier settings.
    classifier: SerializableClassifier<'a>,
}

/// General settings as written to TOML.
#[derive(Serialize)]
struct SerializableSettings {
    /// Posts path, omitted when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    posts: Option<String>,
}

/// Linker settings as written to TOML; scalars precede the target tables.
#[derive(Serialize)]
struct SerializableLinker<'a> {
    /// Section heading.
    heading: &'a str,
    /// Maximum targets per post.
    max_results: usize,
    /// Body characters scored.
    body_prefix_chars: usize,
    /// Link prefix.
    link_base: &'a str,
    /// Fallback slugs.
    fallback: &'a [String],
    /// Target catalog, rendered as `[[linker.target]]`.
    target: &'a [TopicTarget],
}

/// Classifier settings as written to TOML.
#[derive(Serialize)]
struct SerializableClassifier<'a> {
    /// Default category.
    default: &'a str,
    /// Rules, rendered as `[[classifier.rule]]`.
    rule: &'a [CategoryRule],
}
