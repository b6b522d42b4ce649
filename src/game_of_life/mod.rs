//! Game of Life core functionality

pub mod cell;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use cell::Cell;
pub use error::UniverseError;
pub use grid::{Universe, UniverseOption};
pub use patterns::{Pattern, GLIDER};
pub use rules::GameOfLifeRules;
