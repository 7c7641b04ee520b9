//! Integration tests for the game engine update cycle

use blockfall::core::{color_for, EngineConfig, GameEngine, Piece, SequenceRng};
use blockfall::types::{GameAction, GameStatus, Rgb, ShapeKind, DEFAULT_FALL_INTERVAL_MS};

fn engine_with(kinds: &[ShapeKind]) -> GameEngine<SequenceRng> {
    GameEngine::new(EngineConfig::default(), SequenceRng::of_kinds(kinds))
}

#[test]
fn test_game_lifecycle() {
    let engine = GameEngine::with_seed(12345);

    assert_eq!(engine.status(), GameStatus::Running);
    assert!(engine.piece().is_some());
    assert_eq!(engine.fall_timer_ms(), 0);
    assert_eq!(engine.grid().count_occupied(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let mut a = GameEngine::with_seed(777);
    let mut b = GameEngine::with_seed(777);
    let script = [GameAction::MoveLeft, GameAction::Rotate];

    for _ in 0..400 {
        a.update(DEFAULT_FALL_INTERVAL_MS, &script);
        b.update(DEFAULT_FALL_INTERVAL_MS, &script);
    }
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_move_left_blocked_at_wall() {
    let mut engine = engine_with(&[ShapeKind::T]);
    engine.set_piece(Piece::new(ShapeKind::T, 0, 5));

    engine.update(0, &[GameAction::MoveLeft]);
    let piece = engine.piece().unwrap();
    assert_eq!((piece.x, piece.y), (0, 5));
}

#[test]
fn test_move_right_blocked_at_wall() {
    let mut engine = engine_with(&[ShapeKind::I]);
    // Rightmost occupied column is 9.
    engine.set_piece(Piece::new(ShapeKind::I, 6, 5));

    engine.update(0, &[GameAction::MoveRight]);
    assert_eq!(engine.piece().unwrap().x, 6);
}

#[test]
fn test_each_intent_validated_in_order() {
    let mut engine = engine_with(&[ShapeKind::O]);
    engine.set_piece(Piece::new(ShapeKind::O, 1, 5));

    // Left succeeds, second left hits the wall, right succeeds.
    engine.update(
        0,
        &[GameAction::MoveLeft, GameAction::MoveLeft, GameAction::MoveRight],
    );
    assert_eq!(engine.piece().unwrap().x, 1);
}

#[test]
fn test_soft_drop_moves_without_locking() {
    let mut engine = engine_with(&[ShapeKind::O]);

    engine.update(0, &[GameAction::SoftDrop; 30]);
    let piece = engine.piece().unwrap();
    assert_eq!(piece.y, 18);
    assert_eq!(engine.grid().count_occupied(), 0);
    assert_eq!(engine.pieces_spawned(), 1);
}

#[test]
fn test_rotate_against_wall_is_restored() {
    let mut engine = engine_with(&[ShapeKind::I]);
    // Vertical I against the right wall: turning back to horizontal overflows.
    let mut piece = Piece::new(ShapeKind::I, 9, 5);
    piece.rotate_clockwise();
    engine.set_piece(piece);

    engine.update(0, &[GameAction::Rotate]);
    assert_eq!(*engine.piece().unwrap(), piece);
}

#[test]
fn test_o_piece_end_to_end() {
    let mut engine = engine_with(&[ShapeKind::O]);
    let first = *engine.piece().unwrap();
    assert_eq!((first.x, first.y), (4, 0));

    let mut steps = 0;
    while engine.take_last_event().is_none() {
        engine.update(DEFAULT_FALL_INTERVAL_MS, &[]);
        steps += 1;
        assert!(steps <= 20, "piece never locked");
    }
    // 18 moves down, then the failed move that locks.
    assert_eq!(steps, 19);

    let color = color_for(ShapeKind::O);
    for y in 18..20 {
        for x in 4..6 {
            assert_eq!(engine.grid().get(x, y), Some(Some(color)));
        }
    }
    assert_eq!(engine.grid().count_occupied(), 4);

    let next = engine.piece().unwrap();
    assert_eq!((next.kind, next.x, next.y), (ShapeKind::O, 4, 0));
    assert_eq!(engine.pieces_spawned(), 2);
}

#[test]
fn test_fall_needs_full_interval() {
    let mut engine = engine_with(&[ShapeKind::T]);

    for _ in 0..31 {
        engine.update(16, &[]);
    }
    assert_eq!(engine.piece().unwrap().y, 0);

    engine.update(16, &[]);
    assert_eq!(engine.piece().unwrap().y, 1);
}

#[test]
fn test_custom_fall_interval() {
    let config = EngineConfig {
        fall_interval_ms: 50,
        ..EngineConfig::default()
    };
    let mut engine = GameEngine::new(config, SequenceRng::of_kinds(&[ShapeKind::S]));

    engine.update(49, &[]);
    assert_eq!(engine.piece().unwrap().y, 0);
    engine.update(1, &[]);
    assert_eq!(engine.piece().unwrap().y, 1);
}

#[test]
fn test_line_clear_through_update() {
    let mut engine = engine_with(&[ShapeKind::I, ShapeKind::T]);
    let gray = Rgb::new(100, 100, 100);
    for x in 0..6 {
        engine.grid_mut().set(x, 19, Some(gray));
    }
    engine.grid_mut().set(0, 18, Some(gray));
    engine.set_piece(Piece::new(ShapeKind::I, 6, 19));

    engine.update(DEFAULT_FALL_INTERVAL_MS, &[]);

    let event = engine.take_last_event().unwrap();
    assert_eq!(event.rows_cleared, 1);
    // The block above the cleared row dropped into it.
    assert_eq!(engine.grid().get(0, 19), Some(Some(gray)));
    assert_eq!(engine.grid().count_occupied(), 1);
    assert_eq!(engine.piece().unwrap().kind, ShapeKind::T);
}

#[test]
fn test_spawn_collision_ends_game() {
    let mut engine = engine_with(&[ShapeKind::O]);
    let gray = Rgb::new(100, 100, 100);
    // Stack reaching row 1 under the spawn columns.
    for y in 1..20 {
        engine.grid_mut().set(4, y, Some(gray));
    }
    engine.set_piece(Piece::new(ShapeKind::O, 0, 18));

    engine.update(DEFAULT_FALL_INTERVAL_MS, &[]);
    assert_eq!(engine.status(), GameStatus::GameOver);
    assert!(engine.piece().is_none());

    let event = engine.take_last_event().unwrap();
    assert!(event.game_over);
    assert_eq!((event.x, event.y), (0, 18));

    let grid = engine.grid().clone();
    for _ in 0..10 {
        engine.update(DEFAULT_FALL_INTERVAL_MS, &[GameAction::SoftDrop, GameAction::Rotate]);
    }
    assert_eq!(engine.grid(), &grid);
    assert_eq!(engine.fall_timer_ms(), 0);
    assert!(engine.snapshot().is_game_over());
}

#[test]
fn test_random_play_eventually_ends() {
    let mut engine = GameEngine::with_seed(2024);
    let mut updates = 0;
    while !engine.is_game_over() {
        engine.update(DEFAULT_FALL_INTERVAL_MS, &[]);
        updates += 1;
        assert!(updates < 10_000, "game without input should top out");
    }
    assert!(engine.pieces_spawned() > 1);
}
