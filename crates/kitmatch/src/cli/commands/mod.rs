//! Command implementations and dispatch.

pub mod catalog;
pub mod check;
pub mod config;
pub mod init;
pub mod parse;
pub mod recommend;

use std::process::ExitCode;

use super::{args::Commands, context::CommandContext};

/// Dispatches to the selected subcommand.
pub fn run(command: Commands, ctx: &CommandContext) -> ExitCode {
    match command {
        Commands::Recommend(cmd) => recommend::run(ctx, &cmd),
        Commands::Parse(cmd) => parse::run(ctx, &cmd),
        Commands::Catalog(cmd) => catalog::run(ctx, &cmd),
        Commands::Init(cmd) => init::run(ctx, &cmd),
        Commands::Config => config::run(ctx),
        Commands::Check(cmd) => check::run(ctx, &cmd),
    }
}
