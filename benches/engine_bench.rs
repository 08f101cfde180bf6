//! ChessBall Engine Benchmarks
//!
//! Performance benchmarks for move generation, retrograde generation,
//! evaluation and search using Criterion.

use chessball_engine::api::new_game;
use chessball_engine::evaluation::{evaluate, EvalWeights};
use chessball_engine::forced_win::is_win_avoidable_by_opponent;
use chessball_engine::move_gen::{moves_for, previous_moves_for};
use chessball_engine::search::{search, SearchOptions};
use chessball_engine::{Player, Variant};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_new_game(c: &mut Criterion) {
    c.bench_function("new_game", |b| {
        b.iter(|| black_box(new_game(Variant::Extended)))
    });
}

fn bench_move_generation_both_sides(c: &mut Criterion) {
    let board = new_game(Variant::Extended);

    c.bench_function("moves_for_both_sides", |b| {
        b.iter(|| {
            let white = moves_for(&board, Player::White);
            let black = moves_for(&board, Player::Black);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_retrograde_generation(c: &mut Criterion) {
    let board = new_game(Variant::Extended);

    c.bench_function("previous_moves_for_both_sides", |b| {
        b.iter(|| {
            let white = previous_moves_for(&board, Player::White);
            let black = previous_moves_for(&board, Player::Black);
            black_box((white.len(), black.len()))
        })
    });
}

fn bench_forced_win_classifier(c: &mut Criterion) {
    let board = new_game(Variant::Classic);

    c.bench_function("is_win_avoidable_by_opponent", |b| {
        b.iter(|| black_box(is_win_avoidable_by_opponent(&board, Player::White)))
    });
}

fn bench_evaluate(c: &mut Criterion) {
    let board = new_game(Variant::Extended);
    let weights = EvalWeights::default();

    c.bench_function("evaluate_starting_position", |b| {
        b.iter(|| black_box(evaluate(&board, Player::White, &weights)))
    });
}

fn bench_search_depths(c: &mut Criterion) {
    let board = new_game(Variant::Extended);
    let weights = EvalWeights::default();
    let mut group = c.benchmark_group("search_starting_position");
    group.sample_size(10);

    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("depth", depth), &depth, |b, &depth| {
            let options = SearchOptions::with_depth(depth);
            b.iter(|| black_box(search(&board, Player::White, &weights, &options).score))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_new_game,
    bench_move_generation_both_sides,
    bench_retrograde_generation,
    bench_forced_win_classifier,
    bench_evaluate,
    bench_search_depths,
);
criterion_main!(benches);
