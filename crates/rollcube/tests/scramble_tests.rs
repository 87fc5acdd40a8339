//! Scramble driver behavior
//!
//! Every scramble move is itself a legal roll, so replaying the returned
//! records in reverse must walk the board straight back to the seed.

use glam::IVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rollcube::{BoardConfig, Cell, Direction, RollEngine};

#[test]
fn test_scramble_is_reversible() {
    let mut engine = RollEngine::new(BoardConfig::default()).unwrap();
    let seed_board = engine.board().clone();

    let mut rng = StdRng::seed_from_u64(0x1157);
    let records = engine.scramble(40, &mut rng);
    assert_eq!(records.len(), 40);

    for record in records.iter().rev() {
        let outcome = engine.attempt_roll(record.direction.opposite(), Some(record.cell));
        assert!(outcome.applied, "reverse replay of {record:?} was declined");
    }
    assert_eq!(engine.board(), &seed_board);
}

#[test]
fn test_scramble_clears_counter_and_history() {
    let mut engine = RollEngine::new(BoardConfig::default()).unwrap();
    engine.attempt_roll(Direction::Up, None);

    let mut rng = StdRng::seed_from_u64(3);
    engine.scramble(25, &mut rng);

    assert_eq!(engine.move_count(), 0);
    assert!(engine.history().is_empty());
}

#[test]
fn test_scramble_keeps_board_invariants() {
    let config = BoardConfig::new(4, 4).with_blocked([IVec2::new(0, 0)]);
    let mut engine = RollEngine::new(config).unwrap();

    let mut rng = StdRng::seed_from_u64(99);
    engine.scramble(200, &mut rng);

    let mut occupied = 0;
    let mut blocked = 0;
    let mut empty = 0;
    for (_, cell) in engine.board().cells() {
        match cell {
            Cell::Occupied(_) => occupied += 1,
            Cell::Blocked => blocked += 1,
            Cell::Empty => empty += 1,
        }
    }
    assert_eq!((occupied, blocked, empty), (14, 1, 1));
    assert!(engine.board().get(IVec2::new(0, 0)).unwrap().is_blocked());
}

#[test]
fn test_scramble_with_no_movable_neighbor_stops() {
    // A 1x1 board is a lone empty slot; nothing can ever roll.
    let mut engine = RollEngine::new(BoardConfig::new(1, 1)).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let records = engine.scramble(10, &mut rng);
    assert!(records.is_empty());
}

#[test]
fn test_scramble_default_applies_moves() {
    let mut engine = RollEngine::new(BoardConfig::default()).unwrap();
    let records = engine.scramble_default(30);
    assert_eq!(records.len(), 30);
    assert_eq!(
        engine.board().cells().filter(|(_, c)| c.is_empty()).count(),
        1
    );
}
