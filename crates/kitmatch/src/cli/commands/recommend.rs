//! Implementation of `kitmatch recommend`.

use std::process::ExitCode;

use kitmatch_engine::{MatchError, Request};

use crate::cli::{
    args::RecommendCommand,
    context::CommandContext,
    output::{format_analysis, format_preference, print_json, print_results, rule, subheader},
};

/// Ranks the catalog for a free-text request.
pub fn run(ctx: &CommandContext, cmd: &RecommendCommand) -> ExitCode {
    let recommender = match ctx.recommender() {
        Ok(r) => r,
        Err(code) => return code,
    };
    let catalog = match ctx.catalog(&cmd.catalog) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let mut request = Request::text(cmd.text()).with_budget(cmd.budget);
    if let Some(top_k) = cmd.top_k {
        request = request.with_top_k(top_k);
    }
    if let Some(strategy) = cmd.strategy {
        request = request.with_strategy(strategy);
    }

    let recommendation = match recommender.recommend(&request, &catalog) {
        Ok(r) => r,
        Err(MatchError::Validation { hint }) => {
            eprintln!("error: {hint}");
            return ExitCode::FAILURE;
        }
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.json {
        return print_json(&recommendation);
    }

    if cmd.explain {
        let query = &recommendation.query;
        println!("{}", subheader("Analysis:"));
        print!("{}", format_analysis(&query.analysis));
        println!("{}", subheader("Preference:"));
        print!("{}", format_preference(&query.preference));
        println!("{}", rule(40));
    }

    print_results(&recommendation.results, &catalog);
    ExitCode::SUCCESS
}
