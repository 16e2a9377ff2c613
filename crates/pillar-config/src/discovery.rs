//! Configuration file discovery.
//!
//! Walks up from the working directory collecting `.pillar.toml` files, parsing each one as it
//! is found. A file with `root = true` ends the walk; otherwise `~/.pillar.toml` closes the list.

use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::{ConfigError, parse::RawConfig, parse_config_file};

/// The configuration filename.
pub const CONFIG_FILENAME: &str = ".pillar.toml";

/// A parsed config file with its source path.
#[derive(Debug, Clone)]
pub struct ParsedConfig {
    /// Path to the config file.
    pub path: PathBuf,
    /// Parsed raw configuration.
    pub config: RawConfig,
}

impl ParsedConfig {
    /// Reads and parses the config file at `path`.
    pub fn read(path: PathBuf) -> Result<Self, ConfigError> {
        let config = parse_config_file(&path)?;
        Ok(Self { path, config })
    }

    /// Directory containing the config file; relative paths resolve against it.
    pub fn dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }

    /// True when the file sets `root = true`.
    pub fn is_root(&self) -> bool {
        self.config.root == Some(true)
    }
}

/// Discovers and parses every configuration file relevant to `cwd`.
///
/// Results are in precedence order: closest to `cwd` first, `~/.pillar.toml` last. The global
/// file is skipped once a root config is found, and files above a root config are never read.
///
/// A file that cannot be read or parsed fails the whole discovery.
pub fn discover_configs(cwd: &Path) -> Result<Vec<ParsedConfig>, ConfigError> {
    let mut configs = Vec::new();

    for dir in cwd.ancestors() {
        let path = dir.join(CONFIG_FILENAME);
        if !path.is_file() {
            continue;
        }
        let parsed = ParsedConfig::read(path)?;
        let is_root = parsed.is_root();
        configs.push(parsed);
        if is_root {
            return Ok(configs);
        }
    }

    if let Some(global) = global_config_path()
        && global.is_file()
        && !configs.iter().any(|c| c.path == global)
    {
        configs.push(ParsedConfig::read(global)?);
    }

    Ok(configs)
}

/// Returns the path to the global configuration file (`~/.pillar.toml`).
///
/// Returns `None` if the home directory cannot be determined.
pub fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().join(CONFIG_FILENAME))
}

/// Checks if a path is the global configuration file.
pub fn is_global_config(path: &Path) -> bool {
    global_config_path().is_some_and(|global| path == global)
}
