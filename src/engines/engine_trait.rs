//! Turn-strategy abstraction used by `Game::take_turn` and the match harness.
//!
//! Human input, scripted replays and computer players all sit behind the same
//! trait so the rules core never depends on how a turn was chosen.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::TeamColor;
use crate::game_state::game::TurnSelection;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    /// `None` when the engine has nothing to play.
    pub selection: Option<TurnSelection>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a turn for `mover`. Selections should come from the piece's own
    /// templates; the game rejects anything else.
    fn choose_turn(&mut self, board: &Board, mover: TeamColor) -> Result<EngineOutput, String>;
}
