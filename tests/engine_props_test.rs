//! Property tests for collision, row clearing, scoring and whole-session rollouts.

use proptest::prelude::*;

use blockfall::core::scoring::apply_line_clear;
use blockfall::core::{drop_interval_ms, level_for_lines, shape, Board, GameState};
use blockfall::types::{GameAction, PieceKind};

const ACTIONS: [GameAction; 6] = [
    GameAction::MoveLeft,
    GameAction::MoveRight,
    GameAction::SoftDrop,
    GameAction::HardDrop,
    GameAction::Rotate,
    GameAction::Pause,
];

fn board_from(width: u8, height: u8, fill: &[bool]) -> Board {
    let mut board = Board::new(width, height);
    for (i, &filled) in fill.iter().enumerate().take(width as usize * height as usize) {
        if filled {
            let x = (i % width as usize) as i8;
            let y = (i / width as usize) as i8;
            board.set(x, y, Some(PieceKind::ALL[i % 7]));
        }
    }
    board
}

proptest! {
    #[test]
    fn collision_matches_cellwise_definition(
        fill in prop::collection::vec(any::<bool>(), 13 * 20),
        kind_index in 0usize..7,
        rotation in 0u8..4,
        x in prop_oneof![-6i8..18, any::<i8>()],
        y in prop_oneof![-6i8..24, any::<i8>()],
    ) {
        let board = board_from(13, 20, &fill);
        let kind = PieceKind::ALL[kind_index];
        let s = shape(kind, rotation);

        let expected = s.minos.iter().any(|&(dx, dy)| {
            let (px, py) = (i16::from(x) + i16::from(dx), i16::from(y) + i16::from(dy));
            px < 0 || px >= 13 || py >= 20 || (py >= 0 && board.is_occupied(px as i8, py as i8))
        });
        prop_assert_eq!(board.collides(&s, x, y), expected);
    }

    #[test]
    fn clearing_keeps_row_count_and_surviving_rows(
        width in 4u8..16,
        height in 4u8..24,
        fill in prop::collection::vec(prop::bool::weighted(0.8), 16 * 24),
    ) {
        let mut board = board_from(width, height, &fill);
        let full_before = (0..height as usize).filter(|&y| board.is_row_full(y)).count();
        let survivors: Vec<Vec<_>> = board
            .rows()
            .filter(|row| row.iter().any(|c| c.is_none()))
            .map(|row| row.to_vec())
            .collect();

        let cleared = board.clear_full_rows();

        prop_assert_eq!(cleared.len(), full_before);
        prop_assert_eq!(board.height(), height);
        prop_assert_eq!(board.rows().count(), height as usize);
        prop_assert!((0..height as usize).all(|y| !board.is_row_full(y)));

        // Empty rows on top, the surviving rows below in their original order.
        let rows: Vec<Vec<_>> = board.rows().map(|row| row.to_vec()).collect();
        let (top, bottom) = rows.split_at(full_before);
        prop_assert!(top.iter().all(|row| row.iter().all(|c| c.is_none())));
        prop_assert_eq!(bottom, survivors.as_slice());
    }

    #[test]
    fn line_clear_scores_at_previous_level(
        cleared in 1u32..=20,
        lines in 0u32..500,
        score in 0u32..1_000_000,
    ) {
        let level = level_for_lines(lines);
        let result = apply_line_clear(cleared, lines, score, level);

        prop_assert_eq!(result.lines, lines + cleared);
        prop_assert_eq!(result.score, score + cleared * 100 * level);
        prop_assert_eq!(result.level, (lines + cleared) / 10 + 1);
        prop_assert_eq!(result.drop_interval_ms, drop_interval_ms(result.level));
        prop_assert!(result.drop_interval_ms >= 50);
    }

    #[test]
    fn generated_rollout_respects_session_invariants(
        seed in any::<u64>(),
        steps in prop::collection::vec((0usize..ACTIONS.len(), 0u32..400), 1..150),
    ) {
        let mut game = GameState::seeded(seed);
        game.start();
        let mut last_score = 0;

        for (action_index, elapsed) in steps {
            game.apply_action(ACTIONS[action_index]);
            game.tick(elapsed);

            prop_assert!(game.score() >= last_score);
            last_score = game.score();
            prop_assert_eq!(game.level(), game.lines() / 10 + 1);
            prop_assert_eq!(game.drop_interval_ms(), drop_interval_ms(game.level()));
            prop_assert!(game.board().cells().len() == 13 * 20);

            if game.running() && !game.game_over() {
                let active = game.active().unwrap();
                prop_assert!(!game.check_collision(&active, active.x, active.y));
                prop_assert!(game.next().is_some());
            }
            prop_assert!(!(game.running() && game.game_over()));
        }
    }
}
