use criterion::{black_box, criterion_group, criterion_main, Criterion};
use just_not_tetris::core::{random_supply, FieldConfig, PieceSpec, PlayingField};
use just_not_tetris::types::{GameAction, PieceKind};

fn bench_drop_round(c: &mut Criterion) {
    c.bench_function("drop_full_round_50_pieces", |b| {
        b.iter(|| {
            let supply = random_supply(black_box(12345), 50, |_| ());
            let mut field = PlayingField::new(FieldConfig::default(), supply).unwrap();
            while !field.status().is_terminal() {
                field.move_down();
            }
            field.locked_count()
        })
    });
}

fn bench_side_moves(c: &mut Criterion) {
    let supply = [PieceKind::T].map(PieceSpec::plain);
    let mut field = PlayingField::new(FieldConfig::default(), supply).unwrap();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            field.apply_action(black_box(GameAction::MoveLeft));
            field.apply_action(black_box(GameAction::MoveRight));
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let supply = [PieceKind::L].map(PieceSpec::plain);
    let mut field = PlayingField::new(FieldConfig::default(), supply).unwrap();

    c.bench_function("rotate", |b| {
        b.iter(|| {
            field.rotate();
        })
    });
}

fn bench_draw(c: &mut Criterion) {
    let supply = random_supply(7, 20, |kind| kind);
    let mut field = PlayingField::new(FieldConfig::default(), supply).unwrap();
    for _ in 0..60 {
        field.move_down();
    }

    c.bench_function("draw_pieces", |b| {
        b.iter(|| {
            let mut n = 0;
            field.draw(|piece, px| {
                black_box((piece.handle(), px));
                n += 1;
            });
            n
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let supply = random_supply(99, 10, |_| ());
    let field = PlayingField::new(FieldConfig::default(), supply).unwrap();

    c.bench_function("snapshot", |b| b.iter(|| black_box(field.snapshot())));
}

criterion_group!(
    benches,
    bench_drop_round,
    bench_side_moves,
    bench_rotate,
    bench_draw,
    bench_snapshot
);
criterion_main!(benches);
