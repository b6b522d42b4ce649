//! Input events consumed by the driver loop

use crate::game_of_life::{Pattern, UniverseOption};
use anyhow::{Context, Result};
use itertools::Itertools;

/// Something the host wants done to the simulation, applied at the start of the next frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverEvent {
    /// Flip a single cell
    ToggleCell { row: u32, column: u32 },
    /// Stamp a glider centered on the cell
    ToggleGlider { row: u32, column: u32 },
    /// Stamp a built-in pattern centered on the cell
    Stamp { pattern: &'static Pattern, row: u32, column: u32 },
    /// Recreate the universe with the given layout, same dimensions
    Select(UniverseOption),
    /// Clear the universe and pause
    Reset,
    SetTicksPerFrame(u32),
    Play,
    Pause,
    /// Advance one generation while paused
    Step,
}

/// Parse a `ROW,COL` pair
pub fn parse_coordinates(input: &str) -> Result<(u32, u32)> {
    let (row, column) = input
        .split(',')
        .map(str::trim)
        .collect_tuple()
        .with_context(|| format!("Expected ROW,COL but got '{}'", input))?;

    let row = row
        .parse()
        .with_context(|| format!("Invalid row '{}'", row))?;
    let column = column
        .parse()
        .with_context(|| format!("Invalid column '{}'", column))?;

    Ok((row, column))
}

/// Parse a `NAME@ROW,COL` pattern placement
pub fn parse_placement(input: &str) -> Result<(&'static Pattern, u32, u32)> {
    let (name, coordinates) = input
        .split_once('@')
        .with_context(|| format!("Expected NAME@ROW,COL but got '{}'", input))?;

    let pattern = Pattern::by_name(name.trim())
        .with_context(|| format!("Unknown pattern '{}'", name.trim()))?;
    let (row, column) = parse_coordinates(coordinates)?;

    Ok((pattern, row, column))
}
