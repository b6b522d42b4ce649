//! Conway's Game of Life rules

use super::{Cell, Universe};

/// Game of Life rules engine (B3/S23)
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next state of a cell from its current state and live neighbor count
    pub fn next_state(cell: Cell, live_neighbors: u8) -> Cell {
        match (cell, live_neighbors) {
            // Underpopulation
            (Cell::Alive, x) if x < 2 => Cell::Dead,
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            // Overpopulation
            (Cell::Alive, x) if x > 3 => Cell::Dead,
            // Reproduction
            (Cell::Dead, 3) => Cell::Alive,
            (otherwise, _) => otherwise,
        }
    }

    /// Advance the universe by several generations
    pub fn evolve_generations(universe: &mut Universe, generations: usize) {
        for _ in 0..generations {
            universe.tick();
        }
    }
}
