//! Shared vocabulary types for the checkers rules engine.
//!
//! Teams, piece kinds, move kinds, game status and board squares are closed
//! value types so an invalid color or move kind cannot be constructed.

use std::fmt;

/// Side a piece plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamColor {
    Light,
    Dark,
}

impl TeamColor {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            TeamColor::Light => TeamColor::Dark,
            TeamColor::Dark => TeamColor::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Standard,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    Standard,
    Capture,
}

/// Outcome of a game from the local player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Win,
    Lose,
    Draw,
}

impl GameStatus {
    #[inline]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

/// Absolute board coordinate. Signed so resolved offsets can fall off the
/// board and be rejected by bounds checks instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub col: i32,
    pub row: i32,
}

impl Square {
    #[inline]
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
