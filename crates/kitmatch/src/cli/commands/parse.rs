//! Implementation of `kitmatch parse`.

use std::process::ExitCode;

use kitmatch_engine::{Analysis, Preference};
use serde::Serialize;

use crate::cli::{
    args::ParseCommand,
    context::CommandContext,
    output::{dim, format_analysis, format_preference, print_json, subheader},
};

/// JSON output for `kitmatch parse`.
#[derive(Serialize)]
struct ParseOutput<'a> {
    /// Input text.
    text: &'a str,
    /// Token pipeline.
    analysis: &'a Analysis,
    /// Extracted preference.
    preference: &'a Preference,
    /// Whether the preference is specific enough to rank on.
    has_signals: bool,
}

/// Shows how text is tokenized, mapped to tags and turned into a preference.
pub fn run(ctx: &CommandContext, cmd: &ParseCommand) -> ExitCode {
    let recommender = match ctx.recommender() {
        Ok(r) => r,
        Err(code) => return code,
    };
    let text = cmd.text();
    let (analysis, preference) = recommender.parse(&text);
    let has_signals = preference.has_signals();

    if cmd.json {
        return print_json(&ParseOutput {
            text: &text,
            analysis: &analysis,
            preference: &preference,
            has_signals,
        });
    }

    println!("{}", subheader("Analysis:"));
    print!("{}", format_analysis(&analysis));
    println!();
    println!("{}", subheader("Preference:"));
    print!("{}", format_preference(&preference));
    if !has_signals {
        println!();
        println!("{}", dim("No preference signal: recommend would reject this request."));
    }
    ExitCode::SUCCESS
}
