//! Random-turn engine.
//!
//! Selects uniformly from the candidate turns and is used for diagnostics,
//! match-harness smoke runs and low-strength play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::TeamColor;
use crate::move_generation::candidate_turns::candidate_turns;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Deterministic engine for reproducible matches.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PlumCheckers Random"
    }

    fn choose_turn(&mut self, board: &Board, mover: TeamColor) -> Result<EngineOutput, String> {
        let candidates = candidate_turns(board, mover);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string random_engine candidates {}",
            candidates.len()
        ));

        out.selection = candidates.as_slice().choose(&mut self.rng).copied();
        Ok(out)
    }
}
