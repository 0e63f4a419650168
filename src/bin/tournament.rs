//! Runs one eight-player bracket and prints the results.
//! Run with: cargo run --bin tournament [-- --json]
//! Override with env: WIN_THRESHOLD (default 2), TIE_LIMIT (default unbounded), SEED.

use element_bracket::{
    report::render_text, resolve_bracket, Bracket, ElementGraph, RandomPicks, TournamentConfig,
};
use std::process::ExitCode;

const COMPETITORS: usize = 8;

fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = TournamentConfig::from_env()?;
    log::info!(
        "Win threshold {}, tie limit {:?}, seed {:?}",
        config.win_threshold,
        config.tie_limit,
        config.seed
    );

    let names = (1..=COMPETITORS).map(|i| format!("P{i}"));
    let mut bracket = Bracket::with_names(ElementGraph::canonical(), names, config)?;
    let mut picks = RandomPicks::from_seed_option(config.seed);
    resolve_bracket(&mut bracket, &mut picks)?;

    let report = bracket.report()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let json = std::env::args().skip(1).any(|a| a == "--json");
    match run(json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
