//! Implementation of `pillar init`.

use std::{fs, process::ExitCode};

use pillar_config::{CONFIG_FILENAME, global_config_path, global_template, local_template};

use crate::cli::{
    args::InitCommand,
    context::CommandContext,
    output::{indent, subheader},
};

/// Initializes a `.pillar.toml` configuration file.
pub fn run(ctx: &CommandContext, cmd: &InitCommand) -> Result<ExitCode, ExitCode> {
    let cwd = &ctx.cwd;

    let is_home_dir = global_config_path()
        .and_then(|p| p.parent().map(|h| h == cwd))
        .unwrap_or(false);

    let use_global = cmd.global || is_home_dir;

    let config_path = if use_global {
        global_config_path().ok_or_else(|| {
            eprintln!("error: could not determine home directory");
            ExitCode::FAILURE
        })?
    } else {
        cwd.join(CONFIG_FILENAME)
    };

    if config_path.exists() && !cmd.force {
        eprintln!(
            "error: configuration file already exists: {}",
            config_path.display()
        );
        eprintln!("use --force to overwrite");
        return Err(ExitCode::FAILURE);
    }

    let template = if use_global {
        global_template()
    } else {
        local_template()
    };

    fs::write(&config_path, &template).map_err(|e| {
        eprintln!("error: failed to write {}: {e}", config_path.display());
        ExitCode::FAILURE
    })?;

    println!("Created {}", config_path.display());
    println!();
    println!("{}", subheader("Configuration written:"));
    println!("{}", indent(&template));

    Ok(ExitCode::SUCCESS)
}
