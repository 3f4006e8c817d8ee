use chesskit::board::Board;
use chesskit::move_generator::MoveGenerator;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn count_moves(board: &mut Board, generator: &MoveGenerator, depth: u8) -> usize {
    let candidates = generator.generate_moves(board);
    if depth <= 1 {
        return candidates.len();
    }

    let mut count = 0;
    for chess_move in candidates {
        board.apply_move(chess_move);
        count += count_moves(board, generator, depth - 1);
        board.undo_move();
    }
    count
}

fn move_generation_benchmark(c: &mut Criterion) {
    let generator = MoveGenerator::new();
    let board = Board::starting_position();

    c.bench_function("generate moves from the starting position", |b| {
        b.iter(|| generator.generate_moves(black_box(&board)))
    });

    c.bench_function("walk the move tree to depth 3", |b| {
        b.iter(|| {
            let mut board = Board::starting_position();
            count_moves(&mut board, &generator, black_box(3))
        })
    });
}

criterion_group!(benches, move_generation_benchmark);
criterion_main!(benches);
