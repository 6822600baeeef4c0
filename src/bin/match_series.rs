//! Standalone random-vs-random series runner.
//!
//! Run with:
//! `cargo run --release --bin match_series`
//! `cargo run --release --bin match_series -- --verbose`

use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::engines::engine_trait::Engine;
use plum_checkers::utils::match_harness::{
    play_engine_match, play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use plum_checkers::utils::render_board::render_board;

fn main() -> Result<(), String> {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let player1 = |seed: u64| Box::new(RandomEngine::seeded(seed)) as Box<dyn Engine>;
    let player2 = |seed: u64| Box::new(RandomEngine::seeded(seed)) as Box<dyn Engine>;

    let per_game = MatchConfig {
        max_rounds: 120,
        ..MatchConfig::default()
    };

    if verbose {
        let sample = play_engine_match(player1(1234), player2(1235), &per_game)?;
        for line in &sample.info_lines {
            println!("{line}");
        }
        println!("{}", render_board(sample.final_game.board()));
    }

    let stats = play_engine_match_series(
        player1,
        player2,
        MatchSeriesConfig {
            games: 20,
            base_seed: 1234,
            per_game,
            verbose,
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
