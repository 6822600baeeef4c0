//! Errors used throughout the checkers engine.
//!
//! `BoardError` covers grid-level validation failures raised by `Board`
//! operations. `TurnError` wraps those and adds the turn-orchestration
//! failures raised by `Game`. Every failing operation leaves the board exactly
//! as it was, so callers may re-prompt (human input) or discard the candidate
//! (engine) and try again.

use thiserror::Error;

use crate::game_state::checkers_types::{GameStatus, Square, TeamColor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The board has no player team, so move directions cannot be resolved.
    #[error("board player team has not been assigned")]
    NotInitialized,

    #[error("board player team cannot be reassigned")]
    TeamAlreadyAssigned,

    #[error("board dimensions {width}x{height} are below the 1x1 minimum")]
    InvalidDimensions { width: usize, height: usize },

    #[error("square {0} is out of bounds")]
    OutOfBounds(Square),

    /// A square that must hold a piece (origin or captured square) is empty.
    #[error("no piece at {0}")]
    EmptySelection(Square),

    #[error("cannot move onto occupied square {0}")]
    Occupied(Square),

    #[error("invalid capture: {0}")]
    InvalidCapture(CaptureRejection),
}

/// Reason a geometrically valid capture was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CaptureRejection {
    /// Landing square holds a piece other than the one being captured.
    #[error("landing square {0} is occupied")]
    LandingOccupied(Square),
    /// Captured piece is on the mover's team and does not allow friendly fire.
    #[error("piece at {0} is on the same team")]
    FriendlyFire(Square),
    /// Captured square resolves to the mover's own square.
    #[error("piece at {0} cannot capture itself")]
    SelfCapture(Square),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("game is already over ({0:?})")]
    GameOver(GameStatus),

    #[error("it is {expected:?}'s turn but the selected piece is {found:?}")]
    WrongTeam { expected: TeamColor, found: TeamColor },

    #[error("piece at {0} does not have the selected template")]
    TemplateNotOwned(Square),

    #[error("{0:?} has no turn to play")]
    NoTurnAvailable(TeamColor),

    #[error("engine failed: {0}")]
    Engine(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

#[cfg(test)]
mod tests {
    use super::{BoardError, CaptureRejection, TurnError};
    use crate::game_state::checkers_types::Square;

    #[test]
    fn board_errors_convert_into_turn_errors() {
        let err: TurnError = BoardError::Occupied(Square::new(1, 2)).into();
        assert_eq!(err, TurnError::Board(BoardError::Occupied(Square::new(1, 2))));
        assert_eq!(err.to_string(), "cannot move onto occupied square (1, 2)");
    }

    #[test]
    fn capture_rejections_describe_the_square() {
        let err = BoardError::InvalidCapture(CaptureRejection::FriendlyFire(Square::new(4, 5)));
        assert_eq!(
            err.to_string(),
            "invalid capture: piece at (4, 5) is on the same team"
        );
        assert_eq!(
            CaptureRejection::LandingOccupied(Square::new(1, 2)).to_string(),
            "landing square (1, 2) is occupied"
        );
        assert_eq!(
            CaptureRejection::SelfCapture(Square::new(3, 4)).to_string(),
            "piece at (3, 4) cannot capture itself"
        );
    }
}
