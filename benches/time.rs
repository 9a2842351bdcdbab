//! Criterion benchmarks measure time of the clearly separated pieces of code.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use twochess::chess::board::Board;
use twochess::chess::core::Square;
use twochess::chess::game::Game;
use twochess::chess::rules;

const POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
    "2r3r1/p3k3/1p3pp1/1B5p/5P2/2P1p1P1/PP4KP/3R4",
    "r3k2r/pp1n1ppp/2p5/3pP3/1b1P4/2N2N2/PPP2PPP/R1BQK2R",
    "r1b1qrk1/ppp2pbp/n2p1np1/4p1B1/2PPP3/2NB1N1P/PP3PP1/R2QK2R",
];

fn all_targets(boards: &[Board]) {
    for board in boards {
        for piece in board.pieces() {
            let _ = criterion::black_box(rules::targets(piece, board));
        }
    }
}

fn validation_bench(c: &mut Criterion) {
    let boards = POSITIONS
        .iter()
        .map(|placement| Board::try_from(*placement).unwrap())
        .collect::<Vec<_>>();
    let _ = c.bench_with_input(
        BenchmarkId::new("targets", format!("{} positions", boards.len())),
        &boards,
        |b, boards| {
            b.iter(|| all_targets(boards));
        },
    );
}

/// Ruy Lopez with an exchange on c6, as consecutive clicks.
const CLICKS: &[&str] = &[
    "e2", "e4", "e7", "e5", "g1", "f3", "b8", "c6", "f1", "b5", "a7", "a6", "b5", "c6", "d7",
    "c6",
];

fn replay(clicks: &[Square]) -> Game {
    let mut game = Game::new();
    for &square in clicks {
        let _ = criterion::black_box(game.handle_click(square));
    }
    game
}

fn game_bench(c: &mut Criterion) {
    let clicks = CLICKS
        .iter()
        .map(|square| Square::try_from(*square).unwrap())
        .collect::<Vec<_>>();
    let _ = c.bench_with_input(
        BenchmarkId::new("replay", format!("{} clicks", clicks.len())),
        &clicks,
        |b, clicks| {
            b.iter(|| replay(clicks));
        },
    );
}

criterion_group! {
    name = engine;
    config = Criterion::default().sample_size(100);
    targets = validation_bench, game_bench
}

criterion_main!(engine);
