//! Command implementations and dispatch.

pub mod check;
pub mod classify;
pub mod init;
pub mod link;
pub mod normalize;
pub mod recategorize;
pub mod slugify;
pub mod status;
pub mod suggest;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Exit codes for commands that report diagnostics.
pub mod exit_codes {
    use std::process::ExitCode;

    /// Everything is valid with no warnings.
    pub const OK: ExitCode = ExitCode::SUCCESS;
    /// Usable, but with warnings.
    pub const WARNINGS: ExitCode = ExitCode::FAILURE;
}

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    let result = match command {
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Check => check::run(ctx),
        Commands::Status => status::run(ctx),
        Commands::Link(cmd) => link::run(ctx, &cmd),
        Commands::Recategorize(cmd) => recategorize::run(ctx, &cmd),
        Commands::Normalize(cmd) => normalize::run(ctx, &cmd),
        Commands::Suggest(cmd) => suggest::run(ctx, &cmd),
        Commands::Classify(cmd) => classify::run(ctx, &cmd),
        Commands::Slugify(cmd) => slugify::run(&cmd),
    };
    result.unwrap_or_else(|code| code)
}
