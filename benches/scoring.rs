use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tenpin::core::{compute, GameBoard, GameSnapshot, GameState};
use tenpin::record::{finalize, GameMetadata};
use tenpin::types::Destination;

// Strike, spare, open pattern ending in a three-ball tenth
const GAME: [u8; 16] = [10, 7, 3, 9, 0, 10, 10, 8, 2, 0, 6, 10, 10, 10, 9, 1];

fn played_game() -> GameState {
    let mut state = GameState::new(Destination::Casual);
    for &pins in GAME.iter() {
        let _ = state.record_roll(pins);
    }
    state
}

fn bench_compute(c: &mut Criterion) {
    let board: GameBoard = played_game().board().clone();

    c.bench_function("compute_full_board", |b| {
        b.iter(|| compute(black_box(board.frames())))
    });
}

fn bench_full_game_entry(c: &mut Criterion) {
    c.bench_function("enter_full_game", |b| {
        b.iter(|| {
            let mut state = GameState::default();
            for &pins in GAME.iter() {
                let _ = state.record_roll(black_box(pins));
            }
            state.total_score()
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let state = played_game();
    let mut snap = GameSnapshot::default();

    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            state.snapshot_into(&mut snap);
            black_box(snap.total_score)
        })
    });
}

fn bench_finalize_encode(c: &mut Criterion) {
    let state = played_game();

    c.bench_function("finalize_and_encode", |b| {
        b.iter(|| {
            let record = finalize(&state, GameMetadata::default());
            serde_json::to_vec(&record).map(|v| v.len()).unwrap_or(0)
        })
    });
}

criterion_group!(
    benches,
    bench_compute,
    bench_full_game_entry,
    bench_snapshot,
    bench_finalize_encode
);
criterion_main!(benches);
