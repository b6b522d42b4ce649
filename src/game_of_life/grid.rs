//! Universe representation: a toroidal grid of cells

use super::error::{Result, UniverseError};
use super::patterns::{Pattern, GLIDER};
use super::rules::GameOfLifeRules;
use super::Cell;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Initial layout of a freshly created universe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UniverseOption {
    /// Every cell dead
    #[default]
    #[serde(alias = "empty")]
    Dead,
    /// Each cell alive with probability 0.5
    Random,
    /// Cell `i` alive when `i` is divisible by 2 or 7
    TwoSeven,
}

impl UniverseOption {
    pub fn as_str(self) -> &'static str {
        match self {
            UniverseOption::Dead => "dead",
            UniverseOption::Random => "random",
            UniverseOption::TwoSeven => "two_seven",
        }
    }
}

impl fmt::Display for UniverseOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UniverseOption {
    type Err = UniverseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "dead" | "empty" => Ok(UniverseOption::Dead),
            "random" => Ok(UniverseOption::Random),
            "two_seven" | "twoseven" => Ok(UniverseOption::TwoSeven),
            _ => Err(UniverseError::UnknownOption(s.to_string())),
        }
    }
}

/// The Game of Life universe.
///
/// Cells are stored row-major (`index = row * width + column`) and both axes
/// wrap around, so the top edge touches the bottom edge and the left edge
/// touches the right edge. Out-of-range coordinates passed to the mutators are
/// wrapped the same way as neighbor lookups.
#[derive(Debug, Clone)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    /// Next-generation buffer reused by `tick`
    scratch: Vec<Cell>,
    option: UniverseOption,
}

impl Universe {
    /// Create a universe of `width x height` cells laid out according to `option`
    pub fn new(option: UniverseOption, width: u32, height: u32) -> Result<Self> {
        Self::with_rng(option, width, height, &mut rand::thread_rng())
    }

    /// Same as [`Universe::new`], drawing `Random` cells from the given generator
    pub fn with_rng<R: Rng>(
        option: UniverseOption,
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Self> {
        let size = Self::checked_size(width, height)?;

        let mut cells = Self::allocate(size, width, height)?;
        match option {
            UniverseOption::Dead => cells.resize(size, Cell::Dead),
            UniverseOption::Random => cells.extend((0..size).map(|_| Cell::from(rng.gen_bool(0.5)))),
            UniverseOption::TwoSeven => {
                cells.extend((0..size).map(|i| Cell::from(i % 2 == 0 || i % 7 == 0)))
            }
        }

        let mut scratch = Self::allocate(size, width, height)?;
        scratch.resize(size, Cell::Dead);

        debug!(%option, width, height, "created universe");

        Ok(Self {
            width,
            height,
            cells,
            scratch,
            option,
        })
    }

    fn checked_size(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(UniverseError::InvalidDimensions { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(UniverseError::TooLarge { width, height })
    }

    fn allocate(size: usize, width: u32, height: u32) -> Result<Vec<Cell>> {
        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(size)
            .map_err(|_| UniverseError::TooLarge { width, height })?;
        Ok(buffer)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Variant the universe was created with
    pub fn option(&self) -> UniverseOption {
        self.option
    }

    /// Linear index of an in-range cell
    #[inline]
    pub fn index(&self, row: u32, column: u32) -> usize {
        row as usize * self.width as usize + column as usize
    }

    /// Wrap signed coordinates onto the torus
    #[inline]
    fn wrap(&self, row: i64, column: i64) -> (u32, u32) {
        (
            row.rem_euclid(self.height as i64) as u32,
            column.rem_euclid(self.width as i64) as u32,
        )
    }

    /// State of the cell at the (wrapped) coordinates
    pub fn get(&self, row: u32, column: u32) -> Cell {
        self.cells[self.index(row % self.height, column % self.width)]
    }

    /// Count live cells among the 8 toroidal neighbors of a cell.
    ///
    /// On universes narrower or shorter than 3 cells some neighbor positions
    /// wrap onto the same cell and are counted once per position.
    pub fn live_neighbor_count(&self, row: u32, column: u32) -> u8 {
        let row = row % self.height;
        let column = column % self.width;

        let north = if row == 0 { self.height - 1 } else { row - 1 };
        let south = if row == self.height - 1 { 0 } else { row + 1 };
        let west = if column == 0 { self.width - 1 } else { column - 1 };
        let east = if column == self.width - 1 { 0 } else { column + 1 };

        [
            (north, west),
            (north, column),
            (north, east),
            (row, west),
            (row, east),
            (south, west),
            (south, column),
            (south, east),
        ]
        .iter()
        .map(|&(r, c)| self.cells[self.index(r, c)] as u8)
        .sum()
    }

    /// Advance the universe by one generation.
    ///
    /// Every next state is computed from the current generation into the
    /// scratch buffer, which is then swapped in as a whole.
    pub fn tick(&mut self) {
        for row in 0..self.height {
            for column in 0..self.width {
                let idx = self.index(row, column);
                let live_neighbors = self.live_neighbor_count(row, column);
                self.scratch[idx] = GameOfLifeRules::next_state(self.cells[idx], live_neighbors);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.scratch);
        trace!(width = self.width, height = self.height, "tick");
    }

    /// Flip a single cell
    pub fn toggle_cell(&mut self, row: u32, column: u32) {
        let idx = self.index(row % self.height, column % self.width);
        self.cells[idx].toggle();
    }

    /// Stamp a glider whose center is at `(row, column)`
    pub fn toggle_glider(&mut self, row: u32, column: u32) {
        self.stamp(&GLIDER, row, column);
    }

    /// Set the footprint of `pattern` around `(row, column)`, overwriting existing cells
    pub fn stamp(&mut self, pattern: &Pattern, row: u32, column: u32) {
        for (row_offset, column_offset, cell) in pattern.offsets() {
            let (r, c) = self.wrap(row as i64 + row_offset, column as i64 + column_offset);
            let idx = self.index(r, c);
            self.cells[idx] = cell;
        }
    }

    /// Borrowed view of every cell in row-major order
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell buffer as raw bytes (`0 = Dead`, `1 = Alive`), without copying.
    ///
    /// The borrow ends before any mutating call, so callers re-fetch it after
    /// each `tick` or toggle.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }

    /// Address of the cell buffer for hosts that read linear memory directly.
    ///
    /// Valid for `width * height` bytes until the next mutating call. Must not be written through.
    pub fn as_ptr(&self) -> *const u8 {
        self.as_bytes().as_ptr()
    }

    /// Count alive cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of all alive cells in row-major order
    pub fn living_cells(&self) -> Vec<(u32, u32)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(i, _)| ((i / self.width as usize) as u32, (i % self.width as usize) as u32))
            .collect()
    }

    /// Text rendering, one line per row
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Universe {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height && self.cells == other.cells
    }
}

impl Eq for Universe {}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                let symbol = if cell.is_alive() { '◼' } else { '◻' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
