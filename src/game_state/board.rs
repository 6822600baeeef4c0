//! Grid ownership, bounds checking and move/capture application.
//!
//! Every mutating operation is split into a `plan_*` step that resolves and
//! validates the target squares without touching the grid, and an apply step
//! that only runs on a validated plan. A rejected move or capture therefore
//! never leaves the board half-updated.

use crate::checkers_errors::{BoardError, CaptureRejection};
use crate::game_state::checkers_rules::{
    BoardConfig, BoundsRule, SetupLayout, MIN_BOARD_HEIGHT, MIN_BOARD_WIDTH,
};
use crate::game_state::checkers_types::{Square, TeamColor};
use crate::moves::move_templates::{Capture, Move, Orientation};
use crate::moves::piece::Piece;

/// Validated, not yet applied, non-capturing move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlan {
    pub origin: Square,
    pub target: Square,
}

/// Validated, not yet applied, capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapturePlan {
    pub origin: Square,
    pub target: Square,
    pub captured: Square,
}

#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    // Column-major: index = col * height + row.
    tiles: Vec<Option<Piece>>,
    player_team: Option<TeamColor>,
}

impl Board {
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        if config.width < MIN_BOARD_WIDTH || config.height < MIN_BOARD_HEIGHT {
            return Err(BoardError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }

        let mut tiles = Vec::with_capacity(config.width * config.height);
        tiles.resize_with(config.width * config.height, || None);

        Ok(Self {
            config,
            tiles,
            player_team: None,
        })
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.config.height
    }

    #[inline]
    pub fn player_team(&self) -> Option<TeamColor> {
        self.player_team
    }

    /// Fix the local player's team. Allowed exactly once.
    pub fn assign_player_team(&mut self, team: TeamColor) -> Result<(), BoardError> {
        if self.player_team.is_some() {
            return Err(BoardError::TeamAlreadyAssigned);
        }
        self.player_team = Some(team);
        Ok(())
    }

    /// Bounds test under the configured `BoundsRule`.
    ///
    /// The default `CrossAxis` rule checks `col` against the height and `row`
    /// against the width. That only matches the grid on square boards.
    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        let (col_limit, row_limit) = match self.config.bounds_rule {
            BoundsRule::CrossAxis => (self.config.height, self.config.width),
            BoundsRule::Intuitive => (self.config.width, self.config.height),
        };
        in_range(col, col_limit) && in_range(row, row_limit)
    }

    /// Storage slot for a square that passes `in_bounds` and exists in the grid.
    fn slot(&self, square: Square) -> Result<usize, BoardError> {
        if !self.in_bounds(square.col, square.row) {
            return Err(BoardError::OutOfBounds(square));
        }
        self.storage_index(square)
            .ok_or(BoardError::OutOfBounds(square))
    }

    fn storage_index(&self, square: Square) -> Option<usize> {
        if !in_range(square.col, self.config.width) || !in_range(square.row, self.config.height) {
            return None;
        }
        Some(square.col as usize * self.config.height + square.row as usize)
    }

    /// Piece on a square, or `None` when empty or off the grid.
    pub fn piece_at(&self, col: i32, row: i32) -> Option<&Piece> {
        let square = Square::new(col, row);
        if !self.in_bounds(col, row) {
            return None;
        }
        self.storage_index(square)
            .and_then(|index| self.tiles[index].as_ref())
    }

    fn piece_on(&self, square: Square) -> Option<&Piece> {
        self.piece_at(square.col, square.row)
    }

    /// Put a piece on an empty square.
    pub fn place_piece(&mut self, col: i32, row: i32, piece: Piece) -> Result<(), BoardError> {
        let square = Square::new(col, row);
        let index = self.slot(square)?;
        if self.tiles[index].is_some() {
            return Err(BoardError::Occupied(square));
        }
        self.tiles[index] = Some(piece);
        Ok(())
    }

    /// Replace the piece on a square with its promoted form.
    pub fn promote_piece(&mut self, col: i32, row: i32) -> Result<(), BoardError> {
        let square = Square::new(col, row);
        let index = self.slot(square)?;
        let tile = &mut self.tiles[index];
        let promoted = tile
            .as_ref()
            .map(Piece::promoted)
            .ok_or(BoardError::EmptySelection(square))?;
        *tile = Some(promoted);
        Ok(())
    }

    /// Orientation of `team`'s pieces on this board.
    pub fn orientation_of(&self, team: TeamColor) -> Result<Orientation, BoardError> {
        let player_team = self.player_team.ok_or(BoardError::NotInitialized)?;
        Ok(if team == player_team {
            Orientation::PlayerFacing
        } else {
            Orientation::OpponentFacing
        })
    }

    /// Row on which a `team` piece has walked the whole board forward.
    pub fn far_row_for(&self, team: TeamColor) -> Result<i32, BoardError> {
        Ok(match self.orientation_of(team)? {
            Orientation::PlayerFacing => 0,
            Orientation::OpponentFacing => self.config.height as i32 - 1,
        })
    }

    /// Orientation used to resolve a template for whatever sits on `origin`.
    /// An empty or off-grid origin resolves as opponent-facing; the later
    /// origin checks reject it.
    fn mover_orientation(&self, origin: Square) -> Result<Orientation, BoardError> {
        let player_team = self.player_team.ok_or(BoardError::NotInitialized)?;
        Ok(match self.piece_on(origin) {
            Some(piece) if piece.team() == player_team => Orientation::PlayerFacing,
            _ => Orientation::OpponentFacing,
        })
    }

    /// Resolve and validate a non-capturing move without applying it.
    pub fn plan_move(&self, col: i32, row: i32, step: &Move) -> Result<MovePlan, BoardError> {
        let origin = Square::new(col, row);
        let orientation = self.mover_orientation(origin)?;
        let target = step
            .resolve(origin, orientation)
            .ok_or(BoardError::OutOfBounds(origin))?;

        let target_index = self.slot(target)?;
        let origin_index = self.slot(origin)?;

        if self.tiles[origin_index].is_none() {
            return Err(BoardError::EmptySelection(origin));
        }
        if self.tiles[target_index].is_some() {
            return Err(BoardError::Occupied(target));
        }

        Ok(MovePlan { origin, target })
    }

    /// Resolve and validate a capture without applying it.
    pub fn plan_capture(
        &self,
        col: i32,
        row: i32,
        jump: &Capture,
    ) -> Result<CapturePlan, BoardError> {
        let origin = Square::new(col, row);
        let orientation = self.mover_orientation(origin)?;
        let target = jump
            .resolve_landing(origin, orientation)
            .ok_or(BoardError::OutOfBounds(origin))?;
        let captured = jump
            .resolve_captured(origin, orientation)
            .ok_or(BoardError::OutOfBounds(origin))?;

        let captured_index = self.slot(captured)?;
        let target_index = self.slot(target)?;
        let origin_index = self.slot(origin)?;

        let captured_piece = self.tiles[captured_index]
            .as_ref()
            .ok_or(BoardError::EmptySelection(captured))?;
        let mover = self.tiles[origin_index]
            .as_ref()
            .ok_or(BoardError::EmptySelection(origin))?;

        if captured == origin {
            return Err(BoardError::InvalidCapture(CaptureRejection::SelfCapture(
                origin,
            )));
        }
        if self.tiles[target_index].is_some() && target != captured {
            return Err(BoardError::InvalidCapture(
                CaptureRejection::LandingOccupied(target),
            ));
        }
        if mover.team() == captured_piece.team() && !captured_piece.friendly_fire() {
            return Err(BoardError::InvalidCapture(CaptureRejection::FriendlyFire(
                captured,
            )));
        }

        Ok(CapturePlan {
            origin,
            target,
            captured,
        })
    }

    /// Move the piece at `(col, row)` by `step`, resolved for the mover's side.
    pub fn move_piece(&mut self, col: i32, row: i32, step: &Move) -> Result<(), BoardError> {
        let plan = self.plan_move(col, row, step)?;
        self.apply_move(plan)
    }

    /// Jump the piece at `(col, row)` by `jump`, removing the captured piece.
    pub fn capture_piece(&mut self, col: i32, row: i32, jump: &Capture) -> Result<(), BoardError> {
        let plan = self.plan_capture(col, row, jump)?;
        self.apply_capture(plan)
    }

    pub(crate) fn apply_move(&mut self, plan: MovePlan) -> Result<(), BoardError> {
        let origin_index = self.slot(plan.origin)?;
        let target_index = self.slot(plan.target)?;
        let piece = self.tiles[origin_index].take();
        self.tiles[target_index] = piece;
        Ok(())
    }

    pub(crate) fn apply_capture(&mut self, plan: CapturePlan) -> Result<(), BoardError> {
        let origin_index = self.slot(plan.origin)?;
        let target_index = self.slot(plan.target)?;
        let captured_index = self.slot(plan.captured)?;
        // Clear the captured square first so a landing on it keeps the mover.
        self.tiles[captured_index] = None;
        let piece = self.tiles[origin_index].take();
        self.tiles[target_index] = piece;
        Ok(())
    }

    /// Clear the grid and place the starting pieces for the configured layout.
    pub fn set_up_pieces(&mut self) -> Result<(), BoardError> {
        let player_team = self.player_team.ok_or(BoardError::NotInitialized)?;
        let enemy_team = player_team.opposite();

        self.tiles.fill(None);
        if self.config.layout == SetupLayout::Empty {
            return Ok(());
        }

        let height = self.config.height;
        let starting_rows = self.config.starting_rows;
        for row in 0..height {
            for col in 0..self.config.width {
                if (row + col) % 2 != 1 {
                    continue;
                }
                let team = if row < starting_rows {
                    enemy_team
                } else if row + starting_rows >= height {
                    player_team
                } else {
                    continue;
                };
                self.tiles[col * height + row] = Some(Piece::standard(team));
            }
        }

        Ok(())
    }

    /// Every occupied square with its piece, column by column.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, &Piece)> + '_ {
        let height = self.config.height;
        self.tiles.iter().enumerate().filter_map(move |(index, tile)| {
            tile.as_ref().map(|piece| {
                (
                    Square::new((index / height) as i32, (index % height) as i32),
                    piece,
                )
            })
        })
    }

    pub fn piece_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_some()).count()
    }

    pub fn count_for(&self, team: TeamColor) -> usize {
        self.pieces().filter(|(_, piece)| piece.team() == team).count()
    }
}

#[inline]
fn in_range(value: i32, limit: usize) -> bool {
    value >= 0 && (value as usize) < limit
}
