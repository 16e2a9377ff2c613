//! Command-line interface for `pillar`.

use std::process::ExitCode;

use clap::Parser;
use pillar::cli::{CommandContext, args::Cli, commands, logging};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let ctx = if cli.command.needs_config() {
        CommandContext::load()
    } else {
        CommandContext::load_cwd_only()
    };

    match ctx {
        Ok(ctx) => commands::run(cli.command, &ctx),
        Err(code) => code,
    }
}
