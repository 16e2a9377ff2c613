//! Clap argument definitions for the `pillar` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "pillar", version)]
#[command(about = "Internal linking and recategorization for a blog's posts file")]
pub struct Cli {
    /// Log more detail to stderr (-v for info, -vv for debug)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared flags for commands that read the posts file.
#[derive(Args, Debug, Clone, Default)]
pub struct PostsArgs {
    /// Posts JSON file, overriding [settings] posts
    #[arg(long, value_name = "PATH")]
    pub posts: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the passes that rewrite the posts file.
#[derive(Args, Debug, Clone, Default)]
pub struct PassCommand {
    #[command(flatten)]
    /// Posts file and output flags.
    pub posts: PostsArgs,

    /// Report what would change without writing the posts file
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for `pillar init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.pillar.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `pillar suggest`.
#[derive(Args, Debug, Clone)]
pub struct SuggestCommand {
    /// Slug of the post to score
    pub slug: String,

    #[command(flatten)]
    /// Posts file and output flags.
    pub posts: PostsArgs,
}

/// Arguments for `pillar classify`.
#[derive(Args, Debug, Clone)]
pub struct ClassifyCommand {
    /// Slug to classify
    pub slug: String,

    /// Title to classify alongside the slug
    #[arg(short = 't', long, default_value = "")]
    pub title: String,
}

/// Arguments for `pillar slugify`.
#[derive(Args, Debug, Clone)]
pub struct SlugifyCommand {
    /// Text to turn into a slug; several words are joined with spaces
    #[arg(required = true)]
    pub text: Vec<String>,
}

/// Supported `pillar` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize pillar configuration in current directory
    Init(InitCommand),

    /// Validate configuration and diagnose issues
    Check,

    /// Show configuration files, catalog, rules and effective settings
    Status,

    /// Append a related-articles section to every post that lacks one
    #[command(after_help = "\
Targets are scored by how many of their keywords appear in the post's title,
slug and the first characters of its body. The best targets are linked first
and the fallback list fills any remaining slots. Posts that already contain the
section heading are skipped, so the pass can be rerun safely.

EXAMPLES:
  pillar link --dry-run
  pillar link --posts astro-app/src/data/posts.json
  pillar link --json")]
    Link(PassCommand),

    /// Reassign every post's category from the classifier rules
    Recategorize(PassCommand),

    /// Fill missing slugs from titles and report duplicate slugs
    Normalize(PassCommand),

    /// Show how a post scores against the target catalog
    Suggest(SuggestCommand),

    /// Print the category the rules assign to a slug and title
    Classify(ClassifyCommand),

    /// Print the slug generated for some text
    Slugify(SlugifyCommand),
}

impl Commands {
    /// Returns true if the command reads the merged configuration.
    ///
    /// `init` and `slugify` must work even when an existing config file is invalid.
    pub fn needs_config(&self) -> bool {
        !matches!(self, Self::Init(_) | Self::Slugify(_))
    }
}
