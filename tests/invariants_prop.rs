//! Property tests for the engine's structural invariants.

use proptest::prelude::*;

use blockfall::core::{Gameplay, Grid, Piece, Spawner};
use blockfall::types::{Cell, Command, PieceKind};

const W: usize = 6;
const H: usize = 10;

#[derive(Debug, Clone, Copy)]
enum Step {
    Tick,
    Cmd(Command),
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        2 => Just(Step::Tick),
        2 => Just(Step::Cmd(Command::MoveLeft)),
        2 => Just(Step::Cmd(Command::MoveRight)),
        2 => Just(Step::Cmd(Command::Rotate)),
        1 => Just(Step::Cmd(Command::HardDrop)),
    ]
}

fn piece_kind() -> impl Strategy<Value = PieceKind> {
    prop::sample::select(PieceKind::ALL.to_vec())
}

/// Rows biased towards being full so removal has something to do.
fn grid_rows() -> impl Strategy<Value = Vec<Vec<bool>>> {
    let row = prop_oneof![
        1 => Just(vec![true; W]),
        2 => prop::collection::vec(any::<bool>(), W),
    ];
    prop::collection::vec(row, H)
}

fn grid_from(rows: &[Vec<bool>]) -> Grid {
    let mut grid = Grid::new(W, rows.len());
    for (r, row) in rows.iter().enumerate() {
        for (c, &filled) in row.iter().enumerate() {
            if filled {
                grid.set(r, c, Cell::Block);
            }
        }
    }
    grid
}

fn assert_contained(game: &Gameplay) {
    let grid = game.field();
    for p in game.current_piece().points() {
        assert!(p.x >= 0 && (p.x as usize) < grid.width(), "column out of range: {p:?}");
        assert!(p.y >= 0 && (p.y as usize) <= grid.height(), "row out of range: {p:?}");
    }
}

proptest! {
    #[test]
    fn accepted_poses_stay_inside_the_grid(
        seed in any::<u32>(),
        steps in prop::collection::vec(step(), 1..200),
    ) {
        let mut game = Gameplay::new(W, H, Spawner::random(seed));

        for step in steps {
            if game.is_over() {
                break;
            }
            match step {
                Step::Tick => {
                    game.on_tick();
                }
                Step::Cmd(cmd) => {
                    game.on_command(cmd);
                }
            }
            if !game.is_over() {
                assert_contained(&game);
                prop_assert!(game.field().can_place(game.current_piece()));
            }
        }
    }

    #[test]
    fn rejected_commands_leave_points_unchanged(
        seed in any::<u32>(),
        rows in prop::collection::vec(prop::collection::vec(any::<bool>(), W), H - 1),
        steps in prop::collection::vec(step(), 1..120),
    ) {
        // Keep the first playable row clear so the session can start.
        let mut all = vec![vec![false; W]];
        all.extend(rows);
        let mut game = Gameplay::from_parts(grid_from(&all), Spawner::random(seed));

        for step in steps {
            if game.is_over() {
                break;
            }
            match step {
                Step::Tick => {
                    game.on_tick();
                }
                Step::Cmd(cmd) => {
                    let before = game.current_piece().clone();
                    if !game.on_command(cmd) {
                        prop_assert_eq!(game.current_piece(), &before);
                    }
                }
            }
        }
    }

    #[test]
    fn rotation_is_cyclic(
        kind in piece_kind(),
        dx in -20i16..20,
        dy in -20i16..20,
        turns in 0usize..4,
    ) {
        let mut piece = Piece::spawn(kind, 10);
        piece.move_horizontal(dx);
        piece.move_vertical(dy);
        for _ in 0..turns {
            piece.rotate();
        }

        let start = piece.clone();
        for _ in 0..piece.rotation_states() {
            piece.rotate();
        }
        prop_assert_eq!(piece, start);
    }

    #[test]
    fn removal_takes_exactly_the_full_rows(rows in grid_rows()) {
        let mut grid = grid_from(&rows);
        let full: Vec<usize> = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().all(|&b| b))
            .map(|(i, _)| i)
            .collect();
        let blocks_before = grid.block_count();

        let removed = grid.remove_completed_lines();

        prop_assert_eq!(&removed, &full);
        prop_assert_eq!(grid.block_count(), blocks_before - W * full.len());
        prop_assert!(grid.completed_lines().is_empty());
    }

    #[test]
    fn compaction_preserves_row_order(rows in grid_rows()) {
        let mut grid = grid_from(&rows);
        let before: Vec<Vec<Cell>> = (0..H).map(|r| grid.line(r).to_vec()).collect();
        let removed = grid.remove_completed_lines();

        let survivors: Vec<&Vec<Cell>> = before
            .iter()
            .enumerate()
            .filter(|(i, _)| !removed.contains(i))
            .map(|(_, row)| row)
            .collect();
        let vacated = removed.len();

        for r in 0..vacated {
            prop_assert!(grid.line(r).iter().all(|&c| c == Cell::Empty));
        }
        for (i, row) in survivors.iter().enumerate() {
            prop_assert_eq!(grid.line(vacated + i), row.as_slice());
        }
    }
}
