//! Integration tests - full engine flows through the public API

use tui_match3::core::{GameState, SelectionOutcome};
use tui_match3::error::EngineError;
use tui_match3::types::{EngineConfig, GameResult};

#[test]
fn test_two_games_with_same_seed_are_identical() {
    let config = EngineConfig {
        seed: 987,
        ..EngineConfig::default()
    };
    let mut a = GameState::new(config).unwrap();
    let mut b = GameState::new(config).unwrap();
    assert_eq!(a.snapshot(), b.snapshot());

    // Drive both with the same command stream; outcomes must match exactly.
    for index in [0usize, 1, 5, 15, 33, 34, 90, 91] {
        assert_eq!(a.select_tile(index).unwrap(), b.select_tile(index).unwrap());
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

#[test]
fn test_different_seeds_differ() {
    let a = GameState::new(EngineConfig {
        seed: 1,
        ..EngineConfig::default()
    })
    .unwrap();
    let b = GameState::new(EngineConfig {
        seed: 2,
        ..EngineConfig::default()
    })
    .unwrap();
    assert_ne!(a.snapshot().cells, b.snapshot().cells);
}

#[test]
fn test_selection_lifecycle() {
    let mut game = GameState::new(EngineConfig::default()).unwrap();

    assert_eq!(game.select_tile(40).unwrap(), SelectionOutcome::Selected);
    assert_eq!(game.selection(), Some(40));

    // A far-away second tile clears the selection without mutating anything.
    let before = game.snapshot();
    assert_eq!(game.select_tile(77).unwrap(), SelectionOutcome::SwapRejected);
    assert_eq!(game.selection(), None);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn test_out_of_range_selection() {
    let mut game = GameState::new(EngineConfig::default()).unwrap();
    assert_eq!(
        game.select_tile(100).unwrap_err(),
        EngineError::OutOfRange(100)
    );
    assert_eq!(
        game.select_tile(usize::MAX).unwrap_err(),
        EngineError::OutOfRange(usize::MAX)
    );
}

#[test]
fn test_accepted_swap_resolves_with_consistent_accounting() {
    let mut game = GameState::new(EngineConfig {
        seed: 31337,
        ..EngineConfig::default()
    })
    .unwrap();

    game.select_tile(44).unwrap();
    let outcome = game.select_tile(45).unwrap();

    let SelectionOutcome::Sequence(sequence) = outcome else {
        panic!("adjacent tiles must resolve to a sequence");
    };

    if sequence.penalty_applied {
        assert!(sequence.rounds.is_empty());
        assert_eq!(sequence.moves_left, 19);
        assert_eq!(sequence.score, 0);
    } else {
        assert!(!sequence.rounds.is_empty());
        let rounds = sequence.rounds.len() as u32;
        // Combo depths are 1..=n in order, and the peak is the round count.
        for (i, round) in sequence.rounds.iter().enumerate() {
            assert_eq!(round.combo, i as u32 + 1);
            assert!(round.cleared.len() >= 3);
            assert_eq!(
                round.score,
                round.cleared.len() as u32 * 10 * round.combo
            );
        }
        assert_eq!(sequence.highest_combo, rounds);
        assert_eq!(sequence.moves_left, 20 + 2 * rounds);
        let total: u32 = sequence.rounds.iter().map(|r| r.score).sum();
        assert_eq!(sequence.score, total);
    }

    assert_eq!(game.moves_left(), sequence.moves_left);
    assert_eq!(game.score(), sequence.score);
    assert_eq!(game.result(), sequence.result);
}

#[test]
fn test_rounds_replay_against_the_board() {
    // Each round's cleared set and refills must be internally consistent:
    // every column either keeps its tiles or receives exactly the refills
    // needed to replace what it lost.
    let mut game = GameState::new(EngineConfig {
        seed: 2024,
        ..EngineConfig::default()
    })
    .unwrap();
    let width = game.board().width() as usize;

    game.select_tile(10).unwrap();
    let outcome = game.select_tile(11).unwrap();
    let SelectionOutcome::Sequence(sequence) = outcome else {
        panic!("adjacent tiles must resolve to a sequence");
    };

    for round in &sequence.rounds {
        let mut lost_per_col = vec![0usize; width];
        for &index in &round.cleared {
            lost_per_col[index % width] += 1;
        }
        for (col, &lost) in lost_per_col.iter().enumerate() {
            let refilled = round
                .refills
                .iter()
                .find(|r| r.col as usize == col)
                .map(|r| r.colors.len())
                .unwrap_or(0);
            assert_eq!(refilled, lost, "column {col} refill mismatch");
        }
    }
}

#[test]
fn test_restart_produces_a_fresh_game() {
    let mut game = GameState::new(EngineConfig::default()).unwrap();
    let first_board = game.snapshot().cells;

    game.select_tile(0).unwrap();
    game.select_tile(1).unwrap();

    let snapshot = game.restart();
    assert_eq!(snapshot.score, 0);
    assert_eq!(snapshot.moves_left, 20);
    assert_eq!(snapshot.result, GameResult::InProgress);
    assert_eq!(snapshot.episode_id, 1);
    assert_eq!(snapshot.combos, 0);
    assert_eq!(snapshot.highest_combo, 0);
    assert!(snapshot.cells.iter().all(|cell| cell.is_some()));
    assert_ne!(snapshot.cells, first_board);

    // Another restart keeps counting episodes.
    assert_eq!(game.restart().episode_id, 2);
}

#[test]
fn test_moves_never_go_negative() {
    let mut game = GameState::new(EngineConfig {
        starting_moves: 1,
        ..EngineConfig::default()
    })
    .unwrap();

    // Keep making swap attempts until the game ends; the budget must never
    // underflow and the game must terminate by the budget rule.
    let mut attempts = 0;
    while game.result() == GameResult::InProgress && attempts < 200 {
        game.select_tile(attempts % 100).unwrap();
        let target = if (attempts % 100) % 10 == 9 {
            attempts % 100 - 1
        } else {
            attempts % 100 + 1
        };
        let _ = game.select_tile(target).unwrap();
        attempts += 1;
    }

    if game.result() == GameResult::Lost {
        assert_eq!(game.moves_left(), 0);
    }
}

#[test]
fn test_config_knobs_are_honored() {
    let config = EngineConfig {
        width: 6,
        height: 6,
        palette_size: 4,
        starting_moves: 7,
        target_score: 500,
        seed: 5,
        ..EngineConfig::default()
    };
    let game = GameState::new(config).unwrap();
    let snapshot = game.snapshot();

    assert_eq!(snapshot.width, 6);
    assert_eq!(snapshot.height, 6);
    assert_eq!(snapshot.cells.len(), 36);
    assert_eq!(snapshot.moves_left, 7);
    assert_eq!(snapshot.target_score, 500);
    // Palette prefix only: indices 0..4.
    assert!(snapshot
        .cells
        .iter()
        .all(|cell| cell.map(|c| c.index() < 4).unwrap_or(false)));
}
