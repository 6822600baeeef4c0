//! Piece identity and its movement template set.
//!
//! A `Piece` is immutable once built. Promotion is modeled by replacing the
//! value on its tile with `Piece::promoted`, never by mutating `kind`.

use crate::game_state::checkers_types::{PieceType, TeamColor};
use crate::moves::move_templates::{Capture, Move, MoveTemplate, KING_TEMPLATES, STANDARD_TEMPLATES};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    team: TeamColor,
    kind: PieceType,
    templates: &'static [MoveTemplate],
    friendly_fire: bool,
}

impl Piece {
    pub const fn new(team: TeamColor, kind: PieceType) -> Self {
        let templates: &'static [MoveTemplate] = match kind {
            PieceType::Standard => &STANDARD_TEMPLATES,
            PieceType::King => &KING_TEMPLATES,
        };
        Self {
            team,
            kind,
            templates,
            friendly_fire: false,
        }
    }

    #[inline]
    pub const fn standard(team: TeamColor) -> Self {
        Self::new(team, PieceType::Standard)
    }

    #[inline]
    pub const fn king(team: TeamColor) -> Self {
        Self::new(team, PieceType::King)
    }

    /// Allow same-team pieces to capture this one.
    #[must_use]
    pub const fn with_friendly_fire(mut self, friendly_fire: bool) -> Self {
        self.friendly_fire = friendly_fire;
        self
    }

    #[inline]
    pub const fn team(&self) -> TeamColor {
        self.team
    }

    #[inline]
    pub const fn kind(&self) -> PieceType {
        self.kind
    }

    #[inline]
    pub const fn friendly_fire(&self) -> bool {
        self.friendly_fire
    }

    #[inline]
    pub const fn templates(&self) -> &'static [MoveTemplate] {
        self.templates
    }

    pub fn owns_template(&self, template: &MoveTemplate) -> bool {
        self.templates.contains(template)
    }

    pub fn moves(&self) -> impl Iterator<Item = &'static Move> {
        let templates: &'static [MoveTemplate] = self.templates;
        templates.iter().filter_map(|t| match t {
            MoveTemplate::Standard(m) => Some(m),
            MoveTemplate::Capture(_) => None,
        })
    }

    pub fn captures(&self) -> impl Iterator<Item = &'static Capture> {
        let templates: &'static [MoveTemplate] = self.templates;
        templates.iter().filter_map(|t| match t {
            MoveTemplate::Capture(c) => Some(c),
            MoveTemplate::Standard(_) => None,
        })
    }

    /// King of the same team that keeps this piece's friendly-fire flag.
    pub const fn promoted(&self) -> Self {
        Self::king(self.team).with_friendly_fire(self.friendly_fire)
    }
}
