//! Implementation of `kitmatch catalog`.

use std::process::ExitCode;

use kitmatch_catalog::CatalogProvider;

use crate::cli::{
    args::CatalogCommand,
    context::CommandContext,
    output::{catalog_table, dim, print_json},
};

/// Lists the active catalog.
pub fn run(ctx: &CommandContext, cmd: &CatalogCommand) -> ExitCode {
    let catalog = match ctx.catalog(&cmd.catalog) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if cmd.json {
        return print_json(&*catalog);
    }

    println!("{}", catalog_table(&catalog));
    println!(
        "{}",
        dim(&format!(
            "{} kits from {}",
            catalog.len(),
            ctx.catalog_source(&cmd.catalog).describe()
        ))
    );
    ExitCode::SUCCESS
}
