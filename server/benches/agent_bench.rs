use criterion::{Criterion, criterion_group, criterion_main};

use dqn_tictactoe_server::agent::ThreatHeuristic;
use engine::{Board, GameState, Mark, RewardScheme, select_move};

fn bench_heuristic_empty_board(c: &mut Criterion) {
    c.bench_function("heuristic_select_empty_board", |b| {
        let board = Board::new();
        b.iter(|| select_move(&board, &ThreatHeuristic));
    });
}

fn bench_heuristic_midgame(c: &mut Criterion) {
    c.bench_function("heuristic_select_midgame", |b| {
        let mut board = Board::new();
        board.set(4, Mark::X);
        board.set(0, Mark::O);
        board.set(8, Mark::X);
        board.set(2, Mark::O);
        b.iter(|| select_move(&board, &ThreatHeuristic));
    });
}

fn bench_full_self_play_game(c: &mut Criterion) {
    c.bench_function("heuristic_self_play_game", |b| {
        let rewards = RewardScheme::default();
        b.iter(|| {
            let mut state = GameState::new();
            while !state.terminal {
                let cell = select_move(&state.board, &ThreatHeuristic)
                    .expect("open game always has a legal move");
                state.step(cell, &rewards);
            }
            state
        });
    });
}

criterion_group!(
    benches,
    bench_heuristic_empty_board,
    bench_heuristic_midgame,
    bench_full_self_play_game
);
criterion_main!(benches);
