//! Shared context for running CLI commands.

use std::{
    env,
    path::{Path, PathBuf},
    process::ExitCode,
};

use pillar_config::Config;
use pillar_posts::{Post, load_posts, save_posts};
use tracing::debug;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Current working directory.
    pub cwd: PathBuf,
    /// Loaded configuration (may be default if no config files found).
    pub config: Config,
}

impl CommandContext {
    /// Loads the current directory and configuration.
    pub fn load() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        let config = load_config_or_failure(&cwd)?;
        debug!(
            cwd = %cwd.display(),
            targets = config.linker.targets.len(),
            rules = config.classifier.rules.len(),
            "loaded configuration"
        );
        Ok(Self { cwd, config })
    }

    /// Loads only the current directory, skipping configuration parsing.
    ///
    /// Used for commands like `init` that should work even when an existing config file is
    /// invalid.
    pub fn load_cwd_only() -> Result<Self, ExitCode> {
        let cwd = current_dir_or_failure()?;
        Ok(Self {
            cwd,
            config: Config::default(),
        })
    }

    /// Resolves the posts file: the `--posts` override relative to the working directory, else
    /// the configured path.
    pub fn posts_path(&self, override_path: Option<&Path>) -> Result<PathBuf, ExitCode> {
        if let Some(path) = override_path {
            let path = self.cwd.join(path);
            debug!(path = %path.display(), "posts file from --posts");
            return Ok(path);
        }
        self.config.settings.posts.clone().ok_or_else(|| {
            eprintln!("error: no posts file configured");
            eprintln!("Set 'posts' under [settings] in .pillar.toml, or pass --posts.");
            ExitCode::FAILURE
        })
    }

    /// Ensures the target catalog is not empty.
    pub fn require_targets(&self) -> Result<(), ExitCode> {
        if self.config.linker.targets.is_empty() {
            eprintln!("error: no link targets defined in configuration");
            eprintln!("Run 'pillar init' to create a configuration file, then add [[linker.target]] entries.");
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }

    /// Ensures at least one classifier rule is defined.
    pub fn require_rules(&self) -> Result<(), ExitCode> {
        if self.config.classifier.rules.is_empty() {
            eprintln!("error: no classifier rules defined in configuration");
            eprintln!("Add [[classifier.rule]] entries to .pillar.toml.");
            return Err(ExitCode::FAILURE);
        }
        Ok(())
    }
}

/// Loads the posts file or exits with an error.
pub fn load_posts_or_failure(path: &Path) -> Result<Vec<Post>, ExitCode> {
    load_posts(path).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}

/// Writes the posts file or exits with an error.
pub fn save_posts_or_failure(path: &Path, posts: &[Post]) -> Result<(), ExitCode> {
    save_posts(path, posts).map_err(|e| {
        eprintln!("error: {e}");
        ExitCode::FAILURE
    })
}

/// Returns the current working directory or exits with a consistent error.
fn current_dir_or_failure() -> Result<PathBuf, ExitCode> {
    env::current_dir().map_err(|e| {
        eprintln!("error: could not determine current directory: {e}");
        ExitCode::FAILURE
    })
}

/// Loads configuration from the provided directory or exits with an error.
fn load_config_or_failure(cwd: &Path) -> Result<Config, ExitCode> {
    Config::load(cwd).map_err(|e| {
        eprintln!("error: failed to load configuration: {e}");
        ExitCode::FAILURE
    })
}
