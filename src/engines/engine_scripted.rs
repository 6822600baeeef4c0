//! Engine that replays a fixed queue of selections.
//!
//! Stands in for a human driver: a UI pushes the player's chosen turns and
//! the game pulls them one at a time.

use std::collections::VecDeque;

use crate::engines::engine_trait::{Engine, EngineOutput};
use crate::game_state::board::Board;
use crate::game_state::checkers_types::TeamColor;
use crate::game_state::game::TurnSelection;

#[derive(Debug, Clone, Default)]
pub struct ScriptedEngine {
    queue: VecDeque<TurnSelection>,
}

impl ScriptedEngine {
    pub fn new(selections: impl IntoIterator<Item = TurnSelection>) -> Self {
        Self {
            queue: selections.into_iter().collect(),
        }
    }

    pub fn push(&mut self, selection: TurnSelection) {
        self.queue.push_back(selection);
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// Drop every queued selection.
    pub fn clear(&mut self) {
        self.queue.clear();
    }
}

impl Engine for ScriptedEngine {
    fn name(&self) -> &str {
        "PlumCheckers Scripted"
    }

    fn choose_turn(&mut self, _board: &Board, mover: TeamColor) -> Result<EngineOutput, String> {
        let selection = self.queue.pop_front();
        Ok(EngineOutput {
            selection,
            info_lines: vec![format!(
                "info string scripted_engine mover {:?} remaining {}",
                mover,
                self.queue.len()
            )],
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ScriptedEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::checkers_types::TeamColor;
    use crate::game_state::game::{Game, TurnSelection};
    use crate::moves::move_templates::Move;

    #[test]
    fn replays_selections_in_order() {
        let game = Game::standard(TeamColor::Dark).expect("standard game should build");
        let first = TurnSelection::new(0, 5, Move::new(1, -1));
        let second = TurnSelection::new(2, 5, Move::new(1, -1));
        let mut engine = ScriptedEngine::new([first]);
        engine.push(second);

        let out = engine
            .choose_turn(game.board(), TeamColor::Dark)
            .expect("scripted engine does not fail");
        assert_eq!(out.selection, Some(first));
        assert_eq!(engine.remaining(), 1);

        // Selections queued before the match survive its start.
        engine.new_game();
        assert_eq!(engine.remaining(), 1);

        engine.clear();
        let out = engine
            .choose_turn(game.board(), TeamColor::Dark)
            .expect("scripted engine does not fail");
        assert_eq!(out.selection, None);
    }
}
