//! Gameplay tests - controller behavior through ticks and commands

use blockfall::core::{Gameplay, Piece, Spawner};
use blockfall::types::{Command, Event, PieceKind, Point};

fn pts(raw: [(i16, i16); 4]) -> [Point; 4] {
    raw.map(|(x, y)| Point::new(x, y))
}

fn is_connected(points: &[Point; 4]) -> bool {
    points.iter().all(|p| {
        points
            .iter()
            .any(|q| (p.x - q.x).abs() + (p.y - q.y).abs() == 1)
    })
}

#[test]
fn test_wall_bounce() {
    let mut game = Gameplay::new(10, 20, Spawner::Fixed(PieceKind::T));
    let base: Vec<i16> = game
        .current_piece()
        .points()
        .iter()
        .filter(|p| p.y == 1)
        .map(|p| p.x)
        .collect();
    assert_eq!(base, vec![3, 4, 5]);

    let mut accepted = 0;
    for _ in 0..10 {
        if game.on_command(Command::MoveLeft) {
            accepted += 1;
        }
        assert!(game.current_piece().left() >= 0);
    }
    assert_eq!(accepted, 3);
    assert_eq!(game.current_piece().left(), 0);

    let before = *game.current_piece().points();
    assert!(!game.on_command(Command::MoveLeft));
    assert_eq!(game.current_piece().points(), &before);
}

#[test]
fn test_wall_bounce_right() {
    let mut game = Gameplay::new(10, 20, Spawner::Fixed(PieceKind::I));
    for _ in 0..10 {
        game.on_command(Command::MoveRight);
    }
    let right = game.current_piece().points().iter().map(|p| p.x).max();
    assert_eq!(right, Some(9));
}

#[test]
fn test_hard_drop_determinism() {
    for kind in PieceKind::ALL {
        let mut game = Gameplay::new(10, 20, Spawner::Fixed(kind));
        assert!(game.on_command(Command::HardDrop), "{kind:?}");

        let piece = game.current_piece();
        assert_eq!(piece.bottom(), 20, "{kind:?}");
        assert!(game.field().can_place(piece));
        assert!(game.field().is_landed(piece));
        assert_eq!(game.field().block_count(), 0);
    }
}

#[test]
fn test_t_rotation_sequence() {
    let mut game = Gameplay::new(10, 20, Spawner::Fixed(PieceKind::T));
    game.on_tick();
    assert_eq!(game.current_piece().points(), &pts([(4, 1), (3, 2), (4, 2), (5, 2)]));

    let expected = [
        pts([(5, 2), (4, 1), (4, 2), (4, 3)]),
        pts([(4, 3), (5, 2), (4, 2), (3, 2)]),
        pts([(3, 2), (4, 3), (4, 2), (4, 1)]),
        pts([(4, 1), (3, 2), (4, 2), (5, 2)]),
    ];
    for (i, want) in expected.iter().enumerate() {
        assert!(game.on_command(Command::Rotate));
        assert_eq!(game.current_piece().points(), want, "after rotation {}", i + 1);
        assert_eq!(game.current_piece().rotation(), (i + 1) % 4);
    }
}

#[test]
fn test_rotation_cycle_lengths() {
    let lengths = [
        (PieceKind::I, 4),
        (PieceKind::O, 1),
        (PieceKind::T, 4),
        (PieceKind::S, 2),
        (PieceKind::Z, 2),
        (PieceKind::J, 4),
        (PieceKind::L, 4),
    ];
    for (kind, n) in lengths {
        let mut piece = Piece::spawn(kind, 10);
        piece.move_vertical(3);
        let start = piece.clone();
        assert_eq!(piece.rotation_states(), n, "{kind:?}");

        for _ in 0..n {
            piece.rotate();
        }
        assert_eq!(piece, start, "{kind:?}");
    }
}

#[test]
fn test_every_rotation_state_is_a_tetromino() {
    for kind in PieceKind::ALL {
        let mut piece = Piece::spawn(kind, 10);
        for state in 0..piece.rotation_states() {
            let points = piece.points();
            assert!(is_connected(points), "{kind:?} state {state}: {points:?}");
            for (i, p) in points.iter().enumerate() {
                assert!(!points[i + 1..].contains(p), "{kind:?} state {state} overlaps");
            }
            piece.rotate();
        }
    }
}

#[test]
fn test_rotate_at_wall_is_rejected() {
    let mut game = Gameplay::new(10, 20, Spawner::Fixed(PieceKind::I));
    game.on_tick();
    assert!(game.on_command(Command::Rotate));
    for _ in 0..10 {
        game.on_command(Command::MoveRight);
    }
    assert_eq!(game.current_piece().left(), 9);

    // Back to horizontal would reach past the right wall.
    let before = game.current_piece().clone();
    assert!(!game.on_command(Command::Rotate));
    assert_eq!(game.current_piece(), &before);
}

#[test]
fn test_game_over_scenario() {
    let mut game = Gameplay::new(4, 4, Spawner::Fixed(PieceKind::O));

    assert!(game.on_command(Command::HardDrop));
    assert!(game.on_tick().is_empty());
    assert!(!game.is_over());

    assert!(game.on_command(Command::HardDrop));
    let events = game.on_tick();
    assert_eq!(events.as_slice(), &[Event::GameOver]);
    assert!(game.is_over());
    assert!(!game.field().can_place(game.current_piece()));

    for _ in 0..5 {
        assert!(game.on_tick().is_empty());
    }
    assert!(!game.on_command(Command::HardDrop));
    assert_eq!(game.field().block_count(), 8);
}

#[test]
fn test_gravity_alone_ends_the_session() {
    let mut game = Gameplay::new(10, 20, Spawner::Fixed(PieceKind::T));
    let mut game_overs = 0;
    let mut ticks = 0;

    while !game.is_over() && ticks < 10_000 {
        for event in game.on_tick() {
            match event {
                Event::GameOver => game_overs += 1,
                Event::LinesUpdated { .. } => panic!("a centered T stack never fills a row"),
            }
        }
        ticks += 1;
    }

    assert!(game.is_over());
    assert_eq!(game_overs, 1);
    assert_eq!(game.lines_cleared(), 0);
}

#[test]
fn test_lines_updated_reports_playable_rows() {
    let mut game = Gameplay::new(4, 20, Spawner::Fixed(PieceKind::I));
    assert!(game.on_command(Command::HardDrop));

    let events = game.on_tick();
    assert_eq!(events.as_slice(), &[Event::LinesUpdated { cleared: vec![19] }]);
    assert_eq!(game.lines_cleared(), 1);
    assert_eq!(game.field().block_count(), 0);
}

#[test]
fn test_same_seed_same_session() {
    let script = [
        Command::MoveLeft,
        Command::Rotate,
        Command::HardDrop,
        Command::MoveRight,
        Command::MoveRight,
        Command::HardDrop,
    ];

    let play = |seed| {
        let mut game = Gameplay::new(10, 20, Spawner::random(seed));
        for round in 0..40 {
            game.on_command(script[round % script.len()]);
            game.on_tick();
        }
        game
    };

    let a = play(7);
    let b = play(7);
    assert_eq!(a.field(), b.field());
    assert_eq!(a.current_piece(), b.current_piece());
    assert_eq!(a.lines_cleared(), b.lines_cleared());
    assert_eq!(a.is_over(), b.is_over());
}
