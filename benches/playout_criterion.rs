use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use plum_checkers::engines::engine_random::RandomEngine;
use plum_checkers::game_state::checkers_types::{GameStatus, TeamColor};
use plum_checkers::game_state::game::Game;
use plum_checkers::move_generation::candidate_turns::candidate_turns;

const PLAYOUT_SEEDS: &[u64] = &[1, 7, 42];

fn bench_setup(c: &mut Criterion) {
    c.bench_function("standard_setup", |b| {
        b.iter(|| Game::standard(black_box(TeamColor::Dark)))
    });
}

fn bench_candidates(c: &mut Criterion) {
    let game = Game::standard(TeamColor::Dark).expect("standard game should build");
    c.bench_function("opening_candidate_turns", |b| {
        b.iter(|| candidate_turns(black_box(game.board()), TeamColor::Dark))
    });
}

fn bench_playouts(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_playout");
    for &seed in PLAYOUT_SEEDS {
        group.bench_with_input(BenchmarkId::from_parameter(seed), &seed, |b, &seed| {
            b.iter(|| {
                let mut game = Game::standard(TeamColor::Dark).expect("standard game should build");
                let mut dark = RandomEngine::seeded(seed);
                let mut light = RandomEngine::seeded(seed.wrapping_add(1));
                while game.state() == GameStatus::Ongoing && game.turn_number() <= 150 {
                    let turn = match game.current_move() {
                        TeamColor::Dark => game.take_turn(&mut dark),
                        TeamColor::Light => game.take_turn(&mut light),
                    };
                    if turn.is_err() {
                        break;
                    }
                }
                black_box(game.history().len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_setup, bench_candidates, bench_playouts);
criterion_main!(benches);
