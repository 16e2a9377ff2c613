//! Implementation of `pillar normalize`.

use std::process::ExitCode;

use pillar_posts::{SlugReport, normalize_slugs};

use super::exit_codes;
use crate::cli::{
    args::PassCommand,
    context::{CommandContext, load_posts_or_failure, save_posts_or_failure},
    output::{JsonPassOutput, dim, print_json, print_write_outcome, subheader, warning},
};

/// Fills empty slugs from titles and reports duplicates.
///
/// Exits with failure when duplicate or unresolvable slugs remain, after writing any fills.
pub fn run(ctx: &CommandContext, cmd: &PassCommand) -> Result<ExitCode, ExitCode> {
    let path = ctx.posts_path(cmd.posts.posts.as_deref())?;
    let mut posts = load_posts_or_failure(&path)?;

    let report = normalize_slugs(&mut posts);

    let written = !report.filled.is_empty() && !cmd.dry_run;
    if written {
        save_posts_or_failure(&path, &posts)?;
    }

    let status = if report.is_clean() {
        exit_codes::OK
    } else {
        exit_codes::WARNINGS
    };

    if cmd.posts.json {
        let printed = print_json(&JsonPassOutput {
            posts_file: path.display().to_string(),
            dry_run: cmd.dry_run,
            written,
            report: &report,
        });
        return Ok(if report.is_clean() { printed } else { status });
    }

    print_report(&report);
    print_write_outcome(&path, cmd.dry_run, written);
    Ok(status)
}

/// Prints filled slugs and slug problems.
fn print_report(report: &SlugReport) {
    if report.filled.is_empty() {
        println!("{}", dim("Every post has a slug."));
    } else {
        println!("{}", subheader("Filled slugs:"));
        for filled in &report.filled {
            println!("  {} {}", filled.slug, dim(&format!("<- {}", filled.title)));
        }
    }
    println!();

    if report.unresolved > 0 {
        println!(
            "{}",
            warning(&format!(
                "{} posts have no slug and no title to derive one from",
                report.unresolved
            ))
        );
    }
    if report.non_text > 0 {
        println!(
            "{}",
            warning(&format!(
                "{} posts have a slug that is not a string",
                report.non_text
            ))
        );
    }
    if !report.duplicates.is_empty() {
        println!("{}", subheader("Duplicate slugs:"));
        for dup in &report.duplicates {
            println!("  {}", warning(&format!("{} ({} posts)", dup.slug, dup.count)));
        }
        println!();
    }
}
