//! Canonical checkers rule constants and the configuration structs that
//! parameterize a board and a game.
//!
//! Variation between board sizes and layouts is expressed as data here rather
//! than through separate board types.

use crate::game_state::checkers_types::TeamColor;

/// Side length of the standard board.
pub const STANDARD_BOARD_SIZE: usize = 8;

/// Rows of pieces each side starts with on the standard board.
pub const STANDARD_STARTING_ROWS: usize = 3;

pub const MIN_BOARD_WIDTH: usize = 1;
pub const MIN_BOARD_HEIGHT: usize = 1;

/// How `Board::in_bounds` maps coordinates onto the grid dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundsRule {
    /// Columns are checked against the height and rows against the width.
    /// Matches historical behavior; only equivalent to `Intuitive` on square
    /// boards.
    #[default]
    CrossAxis,
    /// Columns are checked against the width and rows against the height.
    Intuitive,
}

/// Initial piece placement applied by `Board::set_up_pieces`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupLayout {
    /// Standard pieces on every square with odd `row + col`, `starting_rows`
    /// deep from each edge.
    #[default]
    DarkSquares,
    /// No pieces. Useful for arranging positions by hand.
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub starting_rows: usize,
    pub bounds_rule: BoundsRule,
    pub layout: SetupLayout,
}

impl BoardConfig {
    pub const fn standard() -> Self {
        Self {
            width: STANDARD_BOARD_SIZE,
            height: STANDARD_BOARD_SIZE,
            starting_rows: STANDARD_STARTING_ROWS,
            bounds_rule: BoundsRule::CrossAxis,
            layout: SetupLayout::DarkSquares,
        }
    }

    /// Standard-sized board with no pieces placed at setup.
    pub const fn empty_standard() -> Self {
        Self {
            layout: SetupLayout::Empty,
            ..Self::standard()
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub board: BoardConfig,
    pub first_to_move: TeamColor,
    /// Replace a Standard piece with a King when it lands on its far row.
    pub promote_on_far_row: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::standard(),
            first_to_move: TeamColor::Dark,
            promote_on_far_row: true,
        }
    }
}
