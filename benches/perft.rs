use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use motor_damas::perft::perft;
use motor_damas::search::minimax;
use motor_damas::{legal_moves, Board, Side};

fn bench_legal_moves(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("legal_moves_initial_position", |b| {
        b.iter(|| black_box(legal_moves(black_box(&board), Side::Black)))
    });
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");
    group.sample_size(20);

    let board = Board::new();
    for depth in 1..6 {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| perft(black_box(&board), Side::Black, depth))
        });
    }

    group.finish();
}

fn bench_minimax(c: &mut Criterion) {
    let board = Board::new();
    c.bench_function("minimax_depth_3", |b| {
        b.iter(|| black_box(minimax(black_box(&board), 3, true)))
    });
}

criterion_group!(benches, bench_legal_moves, bench_perft, bench_minimax);
criterion_main!(benches);
