//! Single cell state

use bytemuck::NoUninit;

/// A single square of the universe.
///
/// Stored as one byte (`Dead = 0`, `Alive = 1`) so a slice of cells can be
/// handed to a renderer as raw bytes without conversion.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, NoUninit)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    /// Flip the cell between `Dead` and `Alive`
    pub fn toggle(&mut self) {
        *self = match *self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        };
    }

    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}
