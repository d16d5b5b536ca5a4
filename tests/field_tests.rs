//! Playing field tests - movement, rotation, locking and spawning end to end

use just_not_tetris::core::{
    random_supply, FieldConfig, FieldStatus, PieceSpec, PlayingField, SimpleRng,
};
use just_not_tetris::types::{GameAction, Orientation, PieceKind, Vector};

fn classic(kinds: &[PieceKind]) -> PlayingField<()> {
    PlayingField::new(
        FieldConfig::default(),
        kinds.iter().copied().map(PieceSpec::plain),
    )
    .unwrap()
}

fn active_cells<H>(field: &PlayingField<H>) -> Vec<(i32, i32)> {
    let mut cells: Vec<(i32, i32)> = field
        .active()
        .map(|p| p.occupied_cells().iter().map(|c| (c.x, c.y)).collect())
        .unwrap_or_default();
    cells.sort();
    cells
}

#[test]
fn test_bar_falls_to_the_floor_and_locks() {
    let mut field = classic(&[PieceKind::I, PieceKind::I]);
    assert_eq!(active_cells(&field), vec![(3, 0), (3, 1), (3, 2), (3, 3)]);

    for _ in 0..10 {
        assert!(field.move_down());
    }
    assert_eq!(active_cells(&field), vec![(3, 10), (3, 11), (3, 12), (3, 13)]);

    // The eleventh step cannot move: lock and spawn the next bar.
    assert!(!field.move_down());
    assert_eq!(field.locked_count(), 1);
    assert_eq!(active_cells(&field), vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
    for row in 10..14 {
        assert!(field.cell(3, row).is_some());
    }
    assert!(field.is_consistent());
}

#[test]
fn test_square_stops_at_left_wall() {
    let mut field = classic(&[PieceKind::R]);
    assert_eq!(active_cells(&field), vec![(2, 0), (2, 1), (3, 0), (3, 1)]);

    assert!(field.move_left());
    assert!(field.move_left());
    assert_eq!(active_cells(&field), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);

    // Against the wall, further moves change nothing.
    let at_wall = field.snapshot();
    for _ in 0..3 {
        assert!(!field.move_left());
        assert_eq!(active_cells(&field), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(field.snapshot().grid, at_wall.grid);
        assert_eq!(field.snapshot(), at_wall);
    }
}

#[test]
fn test_right_wall_blocks_square() {
    let mut field = classic(&[PieceKind::R]);
    for _ in 0..3 {
        assert!(field.move_right());
    }
    assert!(!field.move_right());
    assert_eq!(active_cells(&field), vec![(5, 0), (5, 1), (6, 0), (6, 1)]);
}

#[test]
fn test_piece_locks_on_top_of_another() {
    let mut field = classic(&[PieceKind::I, PieceKind::I, PieceKind::R]);
    while field.move_down() {}
    assert_eq!(field.locked_count(), 1);

    // Second bar stops directly above the first, rows 6..=9.
    let mut steps = 0;
    while field.move_down() {
        steps += 1;
    }
    assert_eq!(steps, 6);
    assert_eq!(field.locked_count(), 2);
    for row in 6..14 {
        assert!(field.cell(3, row).is_some(), "row {} empty", row);
    }
    assert_eq!(field.active().map(|p| p.kind()), Some(PieceKind::R));
    assert!(field.is_consistent());
}

#[test]
fn test_side_move_blocked_by_locked_piece() {
    let mut field = classic(&[PieceKind::I, PieceKind::I]);
    while field.move_down() {}

    // New bar at column 4, alongside the locked one at column 3.
    assert!(field.move_right());
    for _ in 0..10 {
        assert!(field.move_down());
    }
    assert!(!field.move_left());
    assert_eq!(active_cells(&field), vec![(4, 10), (4, 11), (4, 12), (4, 13)]);
}

#[test]
fn test_l_piece_rotates_full_circle() {
    let mut field = classic(&[PieceKind::L]);
    let start = active_cells(&field);
    assert_eq!(start, vec![(2, 0), (2, 1), (2, 2), (3, 2)]);

    let mut seen = vec![start.clone()];
    for expected in [Orientation::Right, Orientation::Down, Orientation::Left] {
        assert!(field.rotate());
        assert_eq!(field.active().map(|p| p.orientation()), Some(expected));
        let cells = active_cells(&field);
        assert!(!seen.contains(&cells), "{:?} repeats a shape", expected);
        seen.push(cells);
    }

    assert!(field.rotate());
    assert_eq!(field.active().map(|p| p.orientation()), Some(Orientation::Up));
    assert_eq!(active_cells(&field), start);
    assert!(field.is_consistent());
}

#[test]
fn test_square_rotation_keeps_cells() {
    let mut field = classic(&[PieceKind::R]);
    let before = active_cells(&field);
    assert!(field.rotate());
    assert_eq!(active_cells(&field), before);
    assert_eq!(field.active().map(|p| p.orientation()), Some(Orientation::Right));
}

#[test]
fn test_horizontal_bar_fits_field_width() {
    let mut field = classic(&[PieceKind::I]);
    assert!(field.rotate());
    assert_eq!(active_cells(&field), vec![(3, 0), (4, 0), (5, 0), (6, 0)]);
    assert!(!field.move_right());

    for _ in 0..3 {
        assert!(field.move_left());
    }
    assert!(!field.move_left());
    assert_eq!(active_cells(&field), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
}

#[test]
fn test_rotation_into_wall_is_rejected() {
    let mut field = classic(&[PieceKind::I]);
    for _ in 0..3 {
        assert!(field.move_right());
    }
    let before = active_cells(&field);

    assert!(!field.rotate());
    assert_eq!(active_cells(&field), before);
    assert_eq!(field.active().map(|p| p.orientation()), Some(Orientation::Up));
}

#[test]
fn test_supply_runs_out() {
    let mut field = classic(&[PieceKind::R, PieceKind::R]);
    assert_eq!(field.remaining(), 1);

    while field.status() == FieldStatus::Falling {
        field.move_down();
    }

    assert_eq!(field.status(), FieldStatus::OutOfPieces);
    assert!(field.active().is_none());
    assert_eq!(field.locked_count(), 2);
    assert!(!field.move_down());
    assert!(!field.move_left());
    assert!(!field.rotate());
    assert!(field.is_consistent());
}

#[test]
fn test_stack_reaches_the_top() {
    let kinds = vec![PieceKind::I; 8];
    let mut field = classic(&kinds);

    while field.status() == FieldStatus::Falling {
        field.move_down();
    }

    // Three bars fill rows 2..=13 of column 3; the fourth cannot enter.
    assert_eq!(field.status(), FieldStatus::SpawnBlocked);
    assert_eq!(field.locked_count(), 3);
    assert_eq!(field.remaining(), 4);
    assert!(field.is_consistent());
}

#[test]
fn test_random_play_keeps_field_consistent() {
    for seed in 1..=20u32 {
        let config = FieldConfig::new(7, 14);
        let mut field = PlayingField::new(config, random_supply(seed, 30, |kind| kind)).unwrap();
        let mut rng = SimpleRng::new(seed.wrapping_mul(31));
        let actions = [
            GameAction::MoveLeft,
            GameAction::MoveRight,
            GameAction::SoftDrop,
            GameAction::SoftDrop,
            GameAction::Rotate,
        ];

        for _ in 0..2000 {
            let Some(action) = rng.choose(&actions) else {
                break;
            };
            field.apply_action(action);

            assert!(field.is_consistent(), "seed {} after {:?}", seed, action);
            if let Some(active) = field.active() {
                assert_eq!(active.occupied_cells().len(), 4);
                assert_eq!(*active.handle(), active.kind());
                for cell in active.occupied_cells() {
                    assert!((0..7).contains(&cell.x) && (0..14).contains(&cell.y));
                }
            }
            if field.status().is_terminal() {
                break;
            }
        }
    }
}

#[test]
fn test_draw_reports_handles_at_pixel_positions() {
    let supply = [PieceKind::R, PieceKind::T].map(|kind| PieceSpec::new(kind, kind.as_str()));
    let mut field = PlayingField::new(FieldConfig::default(), supply).unwrap();
    field.set_top_left(Vector::new(100, 50));
    while field.move_down() {}

    let mut draws = Vec::new();
    field.draw(|piece, px| draws.push((*piece.handle(), px)));
    draws.sort_by_key(|(_, px)| (px.y, px.x));

    // T spawns at column 2; R locked at column 2, rows 12..=13.
    assert_eq!(
        draws,
        vec![
            ("T", Vector::new(100 + 2 * 44, 50)),
            ("R", Vector::new(100 + 2 * 44, 50 + 12 * 44)),
        ]
    );
}
