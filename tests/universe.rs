//! Behaviour of the universe through the public API only

use game_of_life_universe::game_of_life::patterns::{BLINKER, GLIDER};
use game_of_life_universe::{Cell, Universe, UniverseError, UniverseOption};

fn alive(universe: &Universe) -> Vec<(u32, u32)> {
    universe.living_cells()
}

#[test]
fn dead_universe_never_changes() {
    let mut universe = Universe::new(UniverseOption::Dead, 30, 20).unwrap();
    for _ in 0..50 {
        universe.tick();
    }
    assert!(universe.as_bytes().iter().all(|&byte| byte == 0));
}

#[test]
fn zero_dimensions_are_rejected() {
    assert!(matches!(
        Universe::new(UniverseOption::TwoSeven, 0, 5),
        Err(UniverseError::InvalidDimensions { width: 0, height: 5 })
    ));
}

#[test]
fn two_seven_runs_are_reproducible() {
    let mut a = Universe::new(UniverseOption::TwoSeven, 40, 30).unwrap();
    let mut b = Universe::new(UniverseOption::TwoSeven, 40, 30).unwrap();
    for _ in 0..20 {
        a.tick();
        b.tick();
    }
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn blinker_returns_after_two_ticks() {
    let mut universe = Universe::new(UniverseOption::Dead, 7, 7).unwrap();
    universe.stamp(&BLINKER, 3, 3);
    let start = alive(&universe);
    assert_eq!(start, vec![(3, 2), (3, 3), (3, 4)]);

    universe.tick();
    assert_eq!(alive(&universe), vec![(2, 3), (3, 3), (4, 3)]);
    universe.tick();
    assert_eq!(alive(&universe), start);
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_ticks() {
    let mut universe = Universe::new(UniverseOption::Dead, 20, 20).unwrap();
    universe.toggle_glider(5, 5);
    assert_eq!(universe.living_count(), GLIDER.living_count());

    for step in 1..=3u32 {
        for _ in 0..4 {
            universe.tick();
        }
        let mut expected = Universe::new(UniverseOption::Dead, 20, 20).unwrap();
        expected.toggle_glider(5 + step, 5 + step);
        assert_eq!(universe, expected, "after {} periods", step);
    }
}

#[test]
fn byte_view_tracks_every_mutation() {
    let mut universe = Universe::new(UniverseOption::Dead, 6, 6).unwrap();

    universe.toggle_cell(2, 3);
    assert_eq!(universe.as_bytes()[2 * 6 + 3], Cell::Alive as u8);

    universe.toggle_glider(0, 0);
    for (i, &byte) in universe.as_bytes().iter().enumerate() {
        assert_eq!(byte, universe.cells()[i] as u8);
    }

    universe.tick();
    let bytes = universe.as_bytes();
    assert_eq!(bytes.len(), 36);
    for row in 0..6 {
        for column in 0..6 {
            assert_eq!(bytes[(row * 6 + column) as usize], universe.get(row, column) as u8);
        }
    }
}
