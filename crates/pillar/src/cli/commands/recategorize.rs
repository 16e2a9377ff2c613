//! Implementation of `pillar recategorize`.

use std::process::ExitCode;

use pillar_posts::{RecategorizeReport, recategorize_posts};

use crate::cli::{
    args::PassCommand,
    context::{CommandContext, load_posts_or_failure, save_posts_or_failure},
    output::{
        JsonPassOutput, dim, histogram_table, print_json, print_write_outcome, subheader, success,
        warning,
    },
};

/// Reassigns every post's category from the configured rules.
pub fn run(ctx: &CommandContext, cmd: &PassCommand) -> Result<ExitCode, ExitCode> {
    ctx.require_rules()?;
    let path = ctx.posts_path(cmd.posts.posts.as_deref())?;
    let mut posts = load_posts_or_failure(&path)?;

    let classifier = &ctx.config.classifier;
    let report = recategorize_posts(&mut posts, &classifier.rules, &classifier.default_category);

    let written = report.changed > 0 && !cmd.dry_run;
    if written {
        save_posts_or_failure(&path, &posts)?;
    }

    if cmd.posts.json {
        return Ok(print_json(&JsonPassOutput {
            posts_file: path.display().to_string(),
            dry_run: cmd.dry_run,
            written,
            report: &report,
        }));
    }

    print_report(&report, posts.len(), cmd.dry_run);
    print_write_outcome(&path, cmd.dry_run, written);
    Ok(ExitCode::SUCCESS)
}

/// Prints before/after distributions and the change count.
fn print_report(report: &RecategorizeReport, total: usize, dry_run: bool) {
    println!("{}", subheader("Before:"));
    println!("{}", histogram_table(&report.before));
    println!();
    println!("{}", subheader("After:"));
    println!("{}", histogram_table(&report.after));
    println!();

    if dry_run && !report.changes.is_empty() {
        println!("{}", subheader("Would change:"));
        for change in &report.changes {
            let from = if change.from.is_empty() {
                "(none)"
            } else {
                change.from.as_str()
            };
            println!(
                "  {} {}",
                change.slug,
                dim(&format!("{from} -> {}", change.to))
            );
        }
        println!();
    }

    println!(
        "{} of {total} posts recategorized",
        success(&report.changed.to_string())
    );
    if report.skipped_non_text > 0 {
        println!(
            "{} {}",
            subheader("Skipped, category not text:"),
            warning(&report.skipped_non_text.to_string())
        );
    }
}
