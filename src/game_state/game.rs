//! Turn order, outcome evaluation and turn orchestration.
//!
//! `Game` owns the board for the whole match. Drivers either hand it a
//! `TurnSelection` directly (`play_turn`) or let an `Engine` pick one
//! (`take_turn`).

use chrono::{DateTime, Utc};

use crate::checkers_errors::{BoardError, TurnError};
use crate::engines::engine_trait::Engine;
use crate::game_state::board::Board;
use crate::game_state::checkers_rules::GameConfig;
use crate::game_state::checkers_types::{GameStatus, PieceType, Square, TeamColor};
use crate::move_generation::candidate_turns::candidate_turns;
use crate::moves::move_templates::MoveTemplate;

/// A driver's chosen turn: which piece, and which of its templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnSelection {
    pub origin: Square,
    pub template: MoveTemplate,
}

impl TurnSelection {
    pub fn new(col: i32, row: i32, template: impl Into<MoveTemplate>) -> Self {
        Self {
            origin: Square::new(col, row),
            template: template.into(),
        }
    }
}

/// One applied turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnRecord {
    pub turn_number: u32,
    pub mover: TeamColor,
    pub origin: Square,
    pub template: MoveTemplate,
    pub landing: Square,
    pub captured: Option<Square>,
    pub promoted: bool,
    pub played_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    pub record: TurnRecord,
    pub status: GameStatus,
    pub info_lines: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    first_to_move: TeamColor,
    current_move: TeamColor,
    player_team: TeamColor,
    turn_number: u32,
    board: Board,
    history: Vec<TurnRecord>,
}

impl Game {
    /// Build the board, assign the player team and place the starting pieces.
    pub fn new(player_team: TeamColor, config: GameConfig) -> Result<Self, BoardError> {
        let mut board = Board::new(config.board)?;
        board.assign_player_team(player_team)?;
        board.set_up_pieces()?;

        Ok(Self {
            config,
            first_to_move: config.first_to_move,
            current_move: config.first_to_move,
            player_team,
            turn_number: 1,
            board,
            history: Vec::new(),
        })
    }

    /// Standard 8x8 game, Dark moves first.
    pub fn standard(player_team: TeamColor) -> Result<Self, BoardError> {
        Self::new(player_team, GameConfig::default())
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn first_to_move(&self) -> TeamColor {
        self.first_to_move
    }

    #[inline]
    pub fn current_move(&self) -> TeamColor {
        self.current_move
    }

    #[inline]
    pub fn player_team(&self) -> TeamColor {
        self.player_team
    }

    /// Completed rounds plus one.
    #[inline]
    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for arranging positions.
    #[inline]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[inline]
    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// Outcome from the player team's point of view.
    pub fn state(&self) -> GameStatus {
        let mut dark_present = false;
        let mut light_present = false;

        for (_, piece) in self.board.pieces() {
            match piece.team() {
                TeamColor::Dark => dark_present = true,
                TeamColor::Light => light_present = true,
            }
            if dark_present && light_present {
                return GameStatus::Ongoing;
            }
        }

        let survivor = match (dark_present, light_present) {
            (true, _) => TeamColor::Dark,
            (false, true) => TeamColor::Light,
            (false, false) => return GameStatus::Draw,
        };

        if survivor == self.player_team {
            GameStatus::Win
        } else {
            GameStatus::Lose
        }
    }

    /// Hand the move to the other side. `first_to_move` opens every round, so
    /// the round counter advances when play returns to it.
    pub fn next_turn(&mut self) {
        if self.current_move != self.first_to_move {
            self.current_move = self.first_to_move;
            self.turn_number = self.turn_number.saturating_add(1);
        } else {
            self.current_move = self.current_move.opposite();
        }
    }

    /// Validate and apply a selection for the side to move, then advance the
    /// turn if the game is still running.
    pub fn play_turn(&mut self, selection: TurnSelection) -> Result<TurnReport, TurnError> {
        let status = self.state();
        if status.is_terminal() {
            return Err(TurnError::GameOver(status));
        }

        let origin = selection.origin;
        let piece = self
            .board
            .piece_at(origin.col, origin.row)
            .ok_or(BoardError::EmptySelection(origin))?;
        if piece.team() != self.current_move {
            return Err(TurnError::WrongTeam {
                expected: self.current_move,
                found: piece.team(),
            });
        }
        if !piece.owns_template(&selection.template) {
            return Err(TurnError::TemplateNotOwned(origin));
        }
        let kind = piece.kind();
        let mover = self.current_move;

        let (landing, captured) = match &selection.template {
            MoveTemplate::Standard(step) => {
                let plan = self.board.plan_move(origin.col, origin.row, step)?;
                self.board.apply_move(plan)?;
                (plan.target, None)
            }
            MoveTemplate::Capture(jump) => {
                let plan = self.board.plan_capture(origin.col, origin.row, jump)?;
                self.board.apply_capture(plan)?;
                (plan.target, Some(plan.captured))
            }
        };

        let promoted = self.config.promote_on_far_row
            && kind == PieceType::Standard
            && landing.row == self.board.far_row_for(mover)?;
        if promoted {
            self.board.promote_piece(landing.col, landing.row)?;
        }

        let record = TurnRecord {
            turn_number: self.turn_number,
            mover,
            origin,
            template: selection.template,
            landing,
            captured,
            promoted,
            played_at: Utc::now(),
        };

        let mut info_lines = vec![format!(
            "info string game turn {} mover {:?} from {} to {}",
            record.turn_number, mover, origin, landing
        )];
        if let Some(square) = captured {
            info_lines.push(format!("info string game captured {square}"));
        }
        if promoted {
            info_lines.push(format!("info string game promoted {landing}"));
        }

        let status = self.state();
        if status == GameStatus::Ongoing {
            self.next_turn();
        } else {
            info_lines.push(format!("info string game status {status:?}"));
        }

        self.history.push(record.clone());
        Ok(TurnReport {
            record,
            status,
            info_lines,
        })
    }

    /// Ask `engine` for the side to move's selection and play it.
    ///
    /// An engine that returns no selection is only taken at its word when the
    /// side to move really has nothing to play.
    pub fn take_turn(&mut self, engine: &mut dyn Engine) -> Result<TurnReport, TurnError> {
        let status = self.state();
        if status.is_terminal() {
            return Err(TurnError::GameOver(status));
        }

        let mover = self.current_move;
        let output = engine
            .choose_turn(&self.board, mover)
            .map_err(TurnError::Engine)?;
        let Some(selection) = output.selection else {
            let available = candidate_turns(&self.board, mover).len();
            if available == 0 {
                return Err(TurnError::NoTurnAvailable(mover));
            }
            return Err(TurnError::Engine(format!(
                "{} returned no selection with {available} legal turns for {mover:?}",
                engine.name()
            )));
        };

        let mut report = self.play_turn(selection)?;
        let mut info_lines = output.info_lines;
        info_lines.append(&mut report.info_lines);
        report.info_lines = info_lines;
        Ok(report)
    }
}
