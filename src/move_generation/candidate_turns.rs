//! Filters a side's pieces and templates down to the turns the board accepts.
//!
//! The board trusts callers to pass one of the moving piece's own templates,
//! so drivers use this to build their menu of options before committing.

use crate::game_state::board::Board;
use crate::game_state::checkers_types::TeamColor;
use crate::game_state::game::TurnSelection;
use crate::moves::move_templates::MoveTemplate;

/// Every selection `team` could play right now, captures and plain moves
/// alike, in board order.
pub fn candidate_turns(board: &Board, team: TeamColor) -> Vec<TurnSelection> {
    let mut out = Vec::new();

    for (origin, piece) in board.pieces() {
        if piece.team() != team {
            continue;
        }
        for template in piece.templates() {
            let accepted = match template {
                MoveTemplate::Standard(step) => board.plan_move(origin.col, origin.row, step).is_ok(),
                MoveTemplate::Capture(jump) => {
                    board.plan_capture(origin.col, origin.row, jump).is_ok()
                }
            };
            if accepted {
                out.push(TurnSelection {
                    origin,
                    template: *template,
                });
            }
        }
    }

    out
}
