//! Implementation of `pillar check`.

use std::process::ExitCode;

use pillar_config::ConfigWarning;
use pillar_posts::normalize_slugs;

use super::exit_codes;
use crate::cli::{
    context::{CommandContext, load_posts_or_failure},
    output::{dim, subheader, success, warning},
};

/// Validates configuration and the posts file, printing warnings and hints.
///
/// Exits with failure when anything needs attention.
pub fn run(ctx: &CommandContext) -> Result<ExitCode, ExitCode> {
    let config_files = &ctx.config.sources;

    println!("Checking configuration...");
    println!();

    if config_files.is_empty() {
        println!("No configuration files found.");
        println!();
        println!("Run 'pillar init' to create a configuration file.");
        return Ok(exit_codes::OK);
    }

    println!("{}", subheader("Config files:"));
    for path in config_files {
        println!("  {}", path.display());
    }
    println!();

    let config = &ctx.config;
    println!(
        "{} {} targets, {} fallback, {} rules",
        subheader("Catalog:"),
        config.linker.targets.len(),
        config.linker.fallback.len(),
        config.classifier.rules.len()
    );
    println!();

    let config_warnings = config.validate();
    let mut warnings: Vec<String> = config_warnings.iter().map(ToString::to_string).collect();

    if let Some(ref posts_path) = config.settings.posts
        && posts_path.is_file()
    {
        let mut posts = load_posts_or_failure(posts_path)?;
        // Slug problems are reported on a scratch copy; check never writes.
        let report = normalize_slugs(&mut posts);
        println!(
            "{} {} posts in {}",
            subheader("Posts:"),
            posts.len(),
            posts_path.display()
        );
        println!();
        if report.unresolved > 0 {
            warnings.push(format!("{} posts have no slug and no usable title", report.unresolved));
        }
        if report.non_text > 0 {
            warnings.push(format!("{} posts have a slug that is not a string", report.non_text));
        }
        let missing = report.filled.len();
        if missing > 0 {
            warnings.push(format!("{missing} posts have no slug (run 'pillar normalize')"));
        }
        for dup in &report.duplicates {
            warnings.push(format!("slug '{}' is used by {} posts", dup.slug, dup.count));
        }
    }

    if warnings.is_empty() {
        println!("{}", success("No issues found."));
        return Ok(exit_codes::OK);
    }

    println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
    for w in &warnings {
        println!("  - {}", warning(w));
    }
    println!();

    print_hints(&config_warnings);

    Ok(exit_codes::WARNINGS)
}

/// Prints one hint per kind of configuration warning present.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints = Vec::new();

    for w in warnings {
        let hint = match w {
            ConfigWarning::NoTargetsDefined => {
                "Add [[linker.target]] entries with a slug, title and keywords."
            }
            ConfigWarning::NoRulesDefined => {
                "Add [[classifier.rule]] entries; the first rule that matches wins."
            }
            ConfigWarning::ZeroMaxResults => "Set linker max_results to 1 or more.",
            ConfigWarning::UnknownFallbackSlug { .. } => {
                "Fallback slugs must name a [[linker.target]]."
            }
            ConfigWarning::TargetWithoutKeywords { .. } | ConfigWarning::RuleWithoutKeywords { .. } => {
                "Give every target and rule at least one keyword."
            }
            ConfigWarning::ShortKeyword { .. } => {
                "Keywords match anywhere in the text, including inside longer words."
            }
            ConfigWarning::PostsFileMissing { .. } => {
                "Check [settings] posts; relative paths start at the config file's directory."
            }
        };
        if !hints.contains(&hint) {
            hints.push(hint);
        }
    }

    for hint in hints {
        println!("{}", dim(&format!("Hint: {hint}")));
    }
}
