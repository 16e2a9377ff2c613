//! Implementation of `pillar link`.

use std::process::ExitCode;

use pillar_posts::{LinkOptions, LinkReport, link_posts};

use crate::cli::{
    args::PassCommand,
    context::{CommandContext, load_posts_or_failure, save_posts_or_failure},
    output::{
        JsonPassOutput, dim, print_json, print_write_outcome, subheader, success, warning,
    },
};

/// Appends a related-articles section to every post that lacks one.
pub fn run(ctx: &CommandContext, cmd: &PassCommand) -> Result<ExitCode, ExitCode> {
    ctx.require_targets()?;
    let path = ctx.posts_path(cmd.posts.posts.as_deref())?;
    let mut posts = load_posts_or_failure(&path)?;

    let linker = &ctx.config.linker;
    let options = LinkOptions {
        selector: linker.selector(),
        section: &linker.section,
    };
    let report = link_posts(&mut posts, &options);

    let written = report.updated > 0 && !cmd.dry_run;
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

    print_report(&report, cmd.dry_run);
    print_write_outcome(&path, cmd.dry_run, written);
    Ok(ExitCode::SUCCESS)
}

/// Prints the linking summary; a dry run also lists each post's targets.
fn print_report(report: &LinkReport, dry_run: bool) {
    if dry_run && !report.posts.is_empty() {
        println!("{}", subheader("Would link:"));
        for linked in &report.posts {
            let slug = if linked.slug.is_empty() {
                "(no slug)"
            } else {
                linked.slug.as_str()
            };
            println!("  {slug} {}", dim(&format!("-> {}", linked.targets.join(", "))));
        }
        println!();
    }

    println!("{} {}", subheader("Posts:"), report.total);
    println!(
        "{} {}",
        subheader("Linked:"),
        success(&report.updated.to_string())
    );
    println!("{} {}", subheader("Already linked:"), report.skipped_linked);
    println!(
        "{} {}",
        subheader("Pillar pages already linked:"),
        report.skipped_pillar
    );
    if report.no_links > 0 {
        println!("{} {}", subheader("Nothing to link:"), report.no_links);
    }
    if report.skipped_non_text > 0 {
        println!(
            "{} {}",
            subheader("Skipped, content not text:"),
            warning(&report.skipped_non_text.to_string())
        );
    }
    println!();
}
