//! Crate root module declarations for the Plum Checkers rules engine.
//!
//! This file exposes the rules core (board, pieces, movement templates and the
//! game state machine) alongside the driver-side subsystems (turn candidate
//! filtering, pluggable engines and the match harness) so binaries, benches
//! and external tooling can import stable module paths.

pub mod checkers_errors;

pub mod game_state {
    pub mod board;
    pub mod checkers_rules;
    pub mod checkers_types;
    pub mod game;
}

pub mod moves {
    pub mod move_templates;
    pub mod piece;
}

pub mod move_generation {
    pub mod candidate_turns;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_scripted;
    pub mod engine_trait;
}

pub mod utils {
    pub mod match_harness;
    pub mod render_board;
}
