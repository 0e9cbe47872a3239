use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tictactoe_core::{Board, Game, Mark, Pruning, SearchEngine};

fn bench_empty_board(pruning: Pruning) {
    let board = Board::new();
    SearchEngine::analyze(black_box(&board), Mark::X, Mark::O, pruning).ok();
}

fn bench_mid_game(pruning: Pruning) {
    let board: Board = "X../.O./..X".parse().unwrap();
    SearchEngine::analyze(black_box(&board), Mark::O, Mark::X, pruning).ok();
}

fn bench_self_play(use_pruning: bool) {
    let mut game = Game::new(Mark::X);
    while !game.is_over() {
        let mover = game.to_move();
        match SearchEngine::choose_move(game.board(), mover, mover.opponent(), use_pruning) {
            Ok(pos) => {
                game.play(pos).ok();
            }
            Err(_) => break,
        }
    }
}

fn search_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.sample_size(20);

    group.bench_function("empty_minimax", |b| {
        b.iter(|| bench_empty_board(Pruning::None))
    });
    group.bench_function("empty_alpha_beta", |b| {
        b.iter(|| bench_empty_board(Pruning::AlphaBeta))
    });
    group.bench_function("mid_game_minimax", |b| {
        b.iter(|| bench_mid_game(Pruning::None))
    });
    group.bench_function("mid_game_alpha_beta", |b| {
        b.iter(|| bench_mid_game(Pruning::AlphaBeta))
    });
    group.bench_function("self_play_alpha_beta", |b| b.iter(|| bench_self_play(true)));

    group.finish();
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
