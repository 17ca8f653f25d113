//! Implementation of `kitmatch check`.

use std::process::ExitCode;

use kitmatch_catalog::{CatalogProvider, LoadReport};
use kitmatch_config::{ConfigWarning, discover_config_files, is_global_config};

use crate::cli::{
    args::CheckCommand,
    context::{CatalogSource, CommandContext},
    output::{dim, subheader, success, warning},
};

/// Validates configuration and catalog, exiting non-zero on any warning or error.
pub fn run(ctx: &CommandContext, cmd: &CheckCommand) -> ExitCode {
    let config = &ctx.config;
    let mut problems = 0;

    println!("{}", subheader("Config files:"));
    let config_files = discover_config_files(&ctx.cwd);
    if config_files.is_empty() {
        println!("   {}", dim("(none, using built-in defaults)"));
    }
    for path in &config_files {
        let scope = if is_global_config(path) { "global" } else { "local" };
        println!("   {} {}", path.display(), dim(&format!("({scope})")));
    }
    println!();

    println!("{}", subheader("Settings:"));
    let settings = &config.settings;
    println!(
        "   strategy {}, ruleset {}, top_k {}, stemmer {}",
        settings.strategy, settings.ruleset, settings.top_k, settings.stemmer
    );
    // Surfaces bad stemmer or stopword names; the error is printed by the context.
    if ctx.recommender().is_err() {
        problems += 1;
    }
    println!();

    let warnings = config.validate();
    let source = ctx.catalog_source(&cmd.catalog);
    println!("{}", subheader("Catalog:"));
    match load_report(&source) {
        Ok((kits, report)) => {
            println!("   {} {}", source.describe(), success(&format!("{kits} kits")));
            if report.skipped > 0 {
                problems += 1;
                println!(
                    "   {}",
                    warning(&format!("{} rows skipped (missing or duplicate name)", report.skipped))
                );
            }
        }
        Err(message) => {
            problems += 1;
            println!("   {}", warning(&message));
        }
    }
    println!();

    if warnings.is_empty() && problems == 0 {
        println!("No issues found.");
        return ExitCode::SUCCESS;
    }

    if !warnings.is_empty() {
        println!("{}", subheader(&format!("Warnings ({}):", warnings.len())));
        for w in &warnings {
            println!("   {}", warning(&w.to_string()));
        }
        println!();
        print_hints(&warnings);
    }

    ExitCode::FAILURE
}

/// Loads the catalog, returning the kit count and ingestion counts.
fn load_report(source: &CatalogSource) -> Result<(usize, LoadReport), String> {
    match source {
        CatalogSource::Csv(csv) => csv
            .load()
            .map(|loaded| (loaded.kits.len(), loaded.report))
            .map_err(|e| e.to_string()),
        CatalogSource::Seed(seed) => seed
            .list_items()
            .map(|kits| {
                let report = LoadReport {
                    added: kits.len(),
                    skipped: 0,
                };
                (kits.len(), report)
            })
            .map_err(|e| e.to_string()),
    }
}

/// Prints hints for resolving common warnings.
fn print_hints(warnings: &[ConfigWarning]) {
    let mut hints: Vec<&str> = warnings
        .iter()
        .map(|w| match w {
            ConfigWarning::CatalogPathMissing { .. } | ConfigWarning::CatalogPathNotFile { .. } => {
                "Hint: point [catalog] path at a CSV file, or remove it to use the demo catalog"
            }
            ConfigWarning::AuditDirectoryMissing { .. } => {
                "Hint: create the audit log directory or change [audit] path"
            }
            ConfigWarning::ZeroTopK => "Hint: set [settings] top_k to 1 or more",
        })
        .collect();
    hints.dedup();
    for hint in hints {
        println!("{}", dim(hint));
    }
}
