//! Piece-relative movement templates and direction resolution.
//!
//! A template is an offset expressed from the mover's own point of view.
//! `Orientation` turns it into an absolute square: pieces on the local
//! player's team apply offsets as written, opposing pieces apply them
//! mirrored, so one template table serves both sides of the board.

use crate::game_state::checkers_types::{MoveType, Square};

/// Which way a piece faces relative to the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Local player's pieces. Forward is toward row 0.
    PlayerFacing,
    /// Opposing pieces. Forward is toward the last row.
    OpponentFacing,
}

/// Non-capturing step to `(dx, dy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    dx: i32,
    dy: i32,
}

impl Move {
    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    #[inline]
    pub const fn dx(&self) -> i32 {
        self.dx
    }

    #[inline]
    pub const fn dy(&self) -> i32 {
        self.dy
    }

    /// Absolute landing square for a piece at `origin`, or `None` when the
    /// offset overflows the coordinate range.
    #[inline]
    pub fn resolve(&self, origin: Square, orientation: Orientation) -> Option<Square> {
        offset_square(origin, orientation, self.dx, self.dy)
    }
}

/// Jump that lands at `(dx, dy)` and removes the piece at `(capture_dx, capture_dy)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capture {
    dx: i32,
    dy: i32,
    capture_dx: i32,
    capture_dy: i32,
}

impl Capture {
    #[inline]
    pub const fn new(dx: i32, dy: i32, capture_dx: i32, capture_dy: i32) -> Self {
        Self {
            dx,
            dy,
            capture_dx,
            capture_dy,
        }
    }

    #[inline]
    pub const fn dx(&self) -> i32 {
        self.dx
    }

    #[inline]
    pub const fn dy(&self) -> i32 {
        self.dy
    }

    #[inline]
    pub const fn capture_dx(&self) -> i32 {
        self.capture_dx
    }

    #[inline]
    pub const fn capture_dy(&self) -> i32 {
        self.capture_dy
    }

    /// Absolute landing square for a piece at `origin`.
    ///
    /// Opponent-facing landings swap the axes of the offset (column takes
    /// `dy`, row takes `dx`). The swap is part of the established rules and
    /// only coincides with a plain mirror when `|dx| == |dy|` with equal signs.
    #[inline]
    pub fn resolve_landing(&self, origin: Square, orientation: Orientation) -> Option<Square> {
        match orientation {
            Orientation::PlayerFacing => offset_square(origin, orientation, self.dx, self.dy),
            Orientation::OpponentFacing => offset_square(origin, orientation, self.dy, self.dx),
        }
    }

    /// Absolute square of the piece being jumped.
    #[inline]
    pub fn resolve_captured(&self, origin: Square, orientation: Orientation) -> Option<Square> {
        offset_square(origin, orientation, self.capture_dx, self.capture_dy)
    }
}

/// `origin` shifted by `(dx, dy)`, negated for opponent-facing pieces.
fn offset_square(origin: Square, orientation: Orientation, dx: i32, dy: i32) -> Option<Square> {
    let (col, row) = match orientation {
        Orientation::PlayerFacing => (origin.col.checked_add(dx)?, origin.row.checked_add(dy)?),
        Orientation::OpponentFacing => (origin.col.checked_sub(dx)?, origin.row.checked_sub(dy)?),
    };
    Some(Square::new(col, row))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTemplate {
    Standard(Move),
    Capture(Capture),
}

impl MoveTemplate {
    #[inline]
    pub const fn move_type(&self) -> MoveType {
        match self {
            MoveTemplate::Standard(_) => MoveType::Standard,
            MoveTemplate::Capture(_) => MoveType::Capture,
        }
    }
}

impl From<Move> for MoveTemplate {
    fn from(value: Move) -> Self {
        MoveTemplate::Standard(value)
    }
}

impl From<Capture> for MoveTemplate {
    fn from(value: Capture) -> Self {
        MoveTemplate::Capture(value)
    }
}

/// Forward diagonals only.
pub const STANDARD_TEMPLATES: [MoveTemplate; 4] = [
    MoveTemplate::Standard(Move::new(-1, -1)),
    MoveTemplate::Standard(Move::new(1, -1)),
    MoveTemplate::Capture(Capture::new(-2, -2, -1, -1)),
    MoveTemplate::Capture(Capture::new(2, -2, 1, -1)),
];

/// All four diagonals.
pub const KING_TEMPLATES: [MoveTemplate; 8] = [
    MoveTemplate::Standard(Move::new(-1, -1)),
    MoveTemplate::Standard(Move::new(1, -1)),
    MoveTemplate::Standard(Move::new(1, 1)),
    MoveTemplate::Standard(Move::new(-1, 1)),
    MoveTemplate::Capture(Capture::new(-2, -2, -1, -1)),
    MoveTemplate::Capture(Capture::new(2, -2, 1, -1)),
    MoveTemplate::Capture(Capture::new(-2, 2, -1, 1)),
    MoveTemplate::Capture(Capture::new(2, 2, 1, 1)),
];

#[cfg(test)]
mod tests {
    use super::{Capture, Move, MoveTemplate, Orientation, KING_TEMPLATES, STANDARD_TEMPLATES};
    use crate::game_state::checkers_types::{MoveType, Square};

    #[test]
    fn player_facing_moves_apply_offsets_as_written() {
        let step = Move::new(1, -1);
        assert_eq!(
            step.resolve(Square::new(2, 5), Orientation::PlayerFacing),
            Some(Square::new(3, 4))
        );
    }

    #[test]
    fn opponent_facing_moves_are_mirrored() {
        let step = Move::new(1, -1);
        assert_eq!(
            step.resolve(Square::new(2, 2), Orientation::OpponentFacing),
            Some(Square::new(1, 3))
        );
    }

    #[test]
    fn player_facing_capture_lands_two_past_the_jumped_piece() {
        let jump = Capture::new(-2, -2, -1, -1);
        let origin = Square::new(3, 4);
        assert_eq!(
            jump.resolve_landing(origin, Orientation::PlayerFacing),
            Some(Square::new(1, 2))
        );
        assert_eq!(
            jump.resolve_captured(origin, Orientation::PlayerFacing),
            Some(Square::new(2, 3))
        );
    }

    #[test]
    fn opponent_facing_capture_landing_swaps_axes() {
        let jump = Capture::new(2, -2, 1, -1);
        let origin = Square::new(4, 2);
        // Column takes -dy, row takes -dx.
        assert_eq!(
            jump.resolve_landing(origin, Orientation::OpponentFacing),
            Some(Square::new(6, 0))
        );
        assert_eq!(
            jump.resolve_captured(origin, Orientation::OpponentFacing),
            Some(Square::new(3, 3))
        );
    }

    #[test]
    fn offsets_past_the_coordinate_range_do_not_resolve() {
        let step = Move::new(1, -1);
        assert_eq!(
            step.resolve(Square::new(i32::MIN, 0), Orientation::OpponentFacing),
            None
        );
        assert_eq!(
            step.resolve(Square::new(0, i32::MIN), Orientation::PlayerFacing),
            None
        );

        let jump = Capture::new(2, -2, 1, -1);
        let origin = Square::new(0, i32::MIN);
        assert_eq!(jump.resolve_landing(origin, Orientation::OpponentFacing), None);
        assert_eq!(
            jump.resolve_captured(origin, Orientation::OpponentFacing),
            Some(Square::new(-1, i32::MIN + 1))
        );
        assert_eq!(
            jump.resolve_landing(Square::new(i32::MAX, 0), Orientation::PlayerFacing),
            None
        );
    }

    #[test]
    fn template_tables_hold_moves_before_captures() {
        let kinds: Vec<MoveType> = STANDARD_TEMPLATES.iter().map(MoveTemplate::move_type).collect();
        assert_eq!(
            kinds,
            vec![
                MoveType::Standard,
                MoveType::Standard,
                MoveType::Capture,
                MoveType::Capture
            ]
        );
        assert_eq!(
            KING_TEMPLATES
                .iter()
                .filter(|t| t.move_type() == MoveType::Capture)
                .count(),
            4
        );
        assert!(STANDARD_TEMPLATES.iter().all(|t| KING_TEMPLATES.contains(t)));
    }
}
