//! Implementation of `pillar slugify`.

use std::process::ExitCode;

use pillar_core::create_slug;

use crate::cli::args::SlugifyCommand;

/// Prints the slug for the joined text.
pub fn run(cmd: &SlugifyCommand) -> Result<ExitCode, ExitCode> {
    let slug = create_slug(&cmd.text.join(" "));
    if slug.is_empty() {
        eprintln!("error: text contains nothing that can appear in a slug");
        return Err(ExitCode::FAILURE);
    }
    println!("{slug}");
    Ok(ExitCode::SUCCESS)
}
