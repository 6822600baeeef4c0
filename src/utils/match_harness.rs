//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other through
//! `Game::take_turn`, collecting the per-turn info lines as the match log.

use std::time::Instant;

use chrono::{DateTime, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::checkers_errors::TurnError;
use crate::engines::engine_trait::Engine;
use crate::game_state::checkers_rules::GameConfig;
use crate::game_state::checkers_types::{GameStatus, TeamColor};
use crate::game_state::game::Game;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    /// The other side has no pieces left.
    WinAllCaptured(TeamColor),
    /// The other side has pieces but nothing it can play.
    WinBlockade(TeamColor),
    DrawNoPieces,
    DrawMaxRounds,
}

impl MatchOutcome {
    pub fn winner(self) -> Option<TeamColor> {
        match self {
            MatchOutcome::WinAllCaptured(team) | MatchOutcome::WinBlockade(team) => Some(team),
            MatchOutcome::DrawNoPieces | MatchOutcome::DrawMaxRounds => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, color: TeamColor },
    Draw(MatchOutcome),
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub game: GameConfig,
    pub player_team: TeamColor,
    /// Rounds played before the match is scored as a draw.
    pub max_rounds: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            player_team: TeamColor::Dark,
            max_rounds: 150,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_game: Game,
    pub info_lines: Vec<String>,
    pub dark_move_count: u32,
    pub light_move_count: u32,
    pub dark_total_time_ns: u128,
    pub light_total_time_ns: u128,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms
        )
    }
}

/// Play a single engine-vs-engine match from the configured starting layout.
pub fn play_engine_match(
    engine_dark: Box<dyn Engine>,
    engine_light: Box<dyn Engine>,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    let game = Game::new(config.player_team, config.game).map_err(|e| e.to_string())?;
    play_engine_match_from_game(engine_dark, engine_light, game, config.max_rounds)
}

/// Play a match from a caller-arranged game, for curated positions.
pub fn play_engine_match_from_game(
    mut engine_dark: Box<dyn Engine>,
    mut engine_light: Box<dyn Engine>,
    mut game: Game,
    max_rounds: u32,
) -> Result<MatchResult, String> {
    engine_dark.new_game();
    engine_light.new_game();

    let started_at = Utc::now();
    let mut info_lines = vec![format!(
        "info string match start dark {} light {} player_team {:?}",
        engine_dark.name(),
        engine_light.name(),
        game.player_team()
    )];
    let mut dark_move_count = 0u32;
    let mut light_move_count = 0u32;
    let mut dark_total_time_ns = 0u128;
    let mut light_total_time_ns = 0u128;

    let outcome = loop {
        match game.state() {
            GameStatus::Ongoing => {}
            GameStatus::Win => break MatchOutcome::WinAllCaptured(game.player_team()),
            GameStatus::Lose => {
                break MatchOutcome::WinAllCaptured(game.player_team().opposite())
            }
            GameStatus::Draw => break MatchOutcome::DrawNoPieces,
        }
        if game.turn_number() > max_rounds {
            break MatchOutcome::DrawMaxRounds;
        }

        let mover = game.current_move();
        let engine: &mut dyn Engine = match mover {
            TeamColor::Dark => &mut *engine_dark,
            TeamColor::Light => &mut *engine_light,
        };

        let started = Instant::now();
        let turn = game.take_turn(engine);
        let elapsed_ns = started.elapsed().as_nanos();

        match turn {
            Ok(mut report) => {
                info_lines.append(&mut report.info_lines);
                match mover {
                    TeamColor::Dark => {
                        dark_move_count = dark_move_count.saturating_add(1);
                        dark_total_time_ns = dark_total_time_ns.saturating_add(elapsed_ns);
                    }
                    TeamColor::Light => {
                        light_move_count = light_move_count.saturating_add(1);
                        light_total_time_ns = light_total_time_ns.saturating_add(elapsed_ns);
                    }
                }
            }
            Err(TurnError::NoTurnAvailable(team)) => {
                break MatchOutcome::WinBlockade(team.opposite());
            }
            Err(e) => return Err(format!("{} failed on its turn: {e}", engine.name())),
        }
    };

    info_lines.push(format!(
        "info string match end outcome {:?} rounds {}",
        outcome,
        game.turn_number()
    ));

    Ok(MatchResult {
        outcome,
        final_game: game,
        info_lines,
        dark_move_count,
        light_move_count,
        dark_total_time_ns,
        light_total_time_ns,
        started_at,
        finished_at: Utc::now(),
    })
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Factories receive a per-game seed. Player colors are randomized each game
/// (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_dark = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        if config.verbose {
            let (dark, light) = if player1_is_dark {
                ("Player1", "Player2")
            } else {
                ("Player2", "Player1")
            };
            println!(
                "[series] game {}/{} seed={} dark={} light={}",
                i + 1,
                config.games,
                seed,
                dark,
                light
            );
        }

        let result = if player1_is_dark {
            play_engine_match(
                player1_factory(seed),
                player2_factory(seed.wrapping_add(1)),
                &config.per_game,
            )?
        } else {
            play_engine_match(
                player2_factory(seed.wrapping_add(1)),
                player1_factory(seed),
                &config.per_game,
            )?
        };

        let (p1_moves, p1_time, p2_moves, p2_time) = if player1_is_dark {
            (
                result.dark_move_count,
                result.dark_total_time_ns,
                result.light_move_count,
                result.light_total_time_ns,
            )
        } else {
            (
                result.light_move_count,
                result.light_total_time_ns,
                result.dark_move_count,
                result.dark_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_time);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_time);

        let player1_team = if player1_is_dark {
            TeamColor::Dark
        } else {
            TeamColor::Light
        };
        let series_outcome = match result.outcome.winner() {
            Some(color) if color == player1_team => {
                stats.player1_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player1,
                    color,
                }
            }
            Some(color) => {
                stats.player2_wins += 1;
                SeriesOutcome::PlayerWin {
                    player: PlayerId::Player2,
                    color,
                }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::Draw(result.outcome)
            }
        };
        stats.outcomes.push(series_outcome);

        if config.verbose {
            println!(
                "[series] game {} result={:?} rounds={}",
                i + 1,
                result.outcome,
                result.final_game.turn_number()
            );
        }
    }

    stats.player1_avg_move_time_ms = average_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms = average_ms(stats.player2_total_time_ns, stats.player2_moves);
    Ok(stats)
}

fn average_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        total_ns as f64 / f64::from(moves) / 1_000_000.0
    }
}

#[cfg(test)]
mod tests {
    use super::{
        play_engine_match, play_engine_match_from_game, play_engine_match_series, MatchConfig,
        MatchOutcome, MatchSeriesConfig,
    };
    use crate::engines::engine_random::RandomEngine;
    use crate::engines::engine_scripted::ScriptedEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::checkers_rules::{BoardConfig, GameConfig};
    use crate::game_state::checkers_types::TeamColor;
    use crate::game_state::game::{Game, TurnSelection};
    use crate::moves::move_templates::{Capture, Move};
    use crate::moves::piece::Piece;

    fn random(seed: u64) -> Box<dyn Engine> {
        Box::new(RandomEngine::seeded(seed))
    }

    #[test]
    fn random_match_reaches_a_consistent_result() {
        let result = play_engine_match(random(3), random(4), &MatchConfig::default())
            .expect("random engines only pick accepted turns");

        let game = &result.final_game;
        assert_eq!(
            game.history().len() as u32,
            result.dark_move_count + result.light_move_count
        );
        assert!(result.dark_move_count >= result.light_move_count);
        assert!(result.dark_move_count - result.light_move_count <= 1);
        assert!(result.started_at <= result.finished_at);

        if let MatchOutcome::WinAllCaptured(team) = result.outcome {
            assert_eq!(game.board().count_for(team.opposite()), 0);
        }
        if result.outcome == MatchOutcome::DrawMaxRounds {
            assert!(game.turn_number() > MatchConfig::default().max_rounds);
        }
        assert!(result.info_lines[0].starts_with("info string match start"));
        assert!(result
            .info_lines
            .last()
            .is_some_and(|line| line.starts_with("info string match end")));
    }

    #[test]
    fn scripted_capture_wins_the_match() {
        let mut game = Game::new(
            TeamColor::Dark,
            GameConfig {
                board: BoardConfig::empty_standard(),
                ..GameConfig::default()
            },
        )
        .expect("empty game should build");
        game.board_mut()
            .place_piece(3, 4, Piece::standard(TeamColor::Dark))
            .expect("empty square");
        game.board_mut()
            .place_piece(2, 3, Piece::standard(TeamColor::Light))
            .expect("empty square");

        let dark = ScriptedEngine::new([TurnSelection::new(3, 4, Capture::new(-2, -2, -1, -1))]);
        let result = play_engine_match_from_game(
            Box::new(dark),
            Box::new(ScriptedEngine::default()),
            game,
            10,
        )
        .expect("scripted capture is legal");

        assert_eq!(result.outcome, MatchOutcome::WinAllCaptured(TeamColor::Dark));
        assert_eq!(result.dark_move_count, 1);
        assert_eq!(result.light_move_count, 0);
    }

    #[test]
    fn side_without_a_turn_loses_by_blockade() {
        let mut game = Game::new(
            TeamColor::Dark,
            GameConfig {
                board: BoardConfig::empty_standard(),
                ..GameConfig::default()
            },
        )
        .expect("empty game should build");
        game.board_mut()
            .place_piece(3, 4, Piece::standard(TeamColor::Dark))
            .expect("empty square");
        game.board_mut()
            .place_piece(0, 7, Piece::standard(TeamColor::Light))
            .expect("empty square");

        let dark = ScriptedEngine::new([TurnSelection::new(3, 4, Move::new(1, -1))]);
        let result = play_engine_match_from_game(
            Box::new(dark),
            Box::new(ScriptedEngine::default()),
            game,
            10,
        )
        .expect("scripted move is legal");

        assert_eq!(result.outcome, MatchOutcome::WinBlockade(TeamColor::Dark));
        assert_eq!(result.dark_move_count, 1);
        assert_eq!(result.light_move_count, 0);
    }

    #[test]
    fn engine_passing_with_legal_turns_aborts_the_match() {
        let mut game = Game::new(
            TeamColor::Dark,
            GameConfig {
                board: BoardConfig::empty_standard(),
                ..GameConfig::default()
            },
        )
        .expect("empty game should build");
        game.board_mut()
            .place_piece(3, 4, Piece::standard(TeamColor::Dark))
            .expect("empty square");
        game.board_mut()
            .place_piece(6, 1, Piece::standard(TeamColor::Light))
            .expect("empty square");

        let dark = ScriptedEngine::new([TurnSelection::new(3, 4, Move::new(1, -1))]);
        let err = play_engine_match_from_game(
            Box::new(dark),
            Box::new(ScriptedEngine::default()),
            game,
            10,
        )
        .expect_err("light still has moves");
        assert!(err.starts_with("PlumCheckers Scripted failed on its turn"));
        assert!(err.contains("2 legal turns"));
    }

    #[test]
    fn illegal_engine_turns_abort_the_match() {
        let dark = ScriptedEngine::new([TurnSelection::new(0, 5, Move::new(1, 1))]);
        let err = play_engine_match(
            Box::new(dark),
            Box::new(ScriptedEngine::default()),
            &MatchConfig::default(),
        )
        .expect_err("backward move is not a Standard template");
        assert!(err.starts_with("PlumCheckers Scripted failed on its turn"));
    }

    #[test]
    fn series_accounts_for_every_game() {
        let stats = play_engine_match_series(
            random,
            random,
            MatchSeriesConfig {
                games: 3,
                base_seed: 42,
                per_game: MatchConfig {
                    max_rounds: 60,
                    ..MatchConfig::default()
                },
                verbose: false,
            },
        )
        .expect("random series should complete");

        assert_eq!(stats.games, 3);
        assert_eq!(stats.player1_wins + stats.player2_wins + stats.draws, 3);
        assert_eq!(stats.outcomes.len(), 3);
        assert!(stats.report().starts_with("games=3 "));
    }
}
