//! Implementation of `pillar classify`.

use std::process::ExitCode;

use pillar_core::classify;

use crate::cli::{args::ClassifyCommand, context::CommandContext};

/// Prints the category the configured rules assign, or the default when none match.
pub fn run(ctx: &CommandContext, cmd: &ClassifyCommand) -> Result<ExitCode, ExitCode> {
    let classifier = &ctx.config.classifier;
    let category = classify(
        &cmd.slug,
        &cmd.title,
        &classifier.rules,
        &classifier.default_category,
    );
    println!("{category}");
    Ok(ExitCode::SUCCESS)
}
