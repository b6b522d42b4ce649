//! Display and output formatting utilities

use crate::driver::FrameReport;
use crate::game_of_life::Universe;
use anyhow::Result;
use itertools::Itertools;
use serde::Serialize;

/// Serializable view of a universe at one point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub generation: u64,
    pub width: u32,
    pub height: u32,
    pub living: usize,
    /// One byte per cell, row-major
    pub cells: &'a [u8],
}

impl<'a> Snapshot<'a> {
    pub fn new(universe: &'a Universe, generation: u64) -> Self {
        Self {
            generation,
            width: universe.width(),
            height: universe.height(),
            living: universe.living_count(),
            cells: universe.as_bytes(),
        }
    }
}

/// Format universes for terminal output
pub struct UniverseFormatter;

impl UniverseFormatter {
    /// Render one frame with a status header
    pub fn format_frame(universe: &Universe, report: &FrameReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Generation {} (+{}) | Living: {}{}\n",
            report.generation,
            report.ticks,
            universe.living_count(),
            if report.paused { " | paused" } else { "" }
        ));
        output.push_str(&universe.render());

        output
    }

    /// Format a universe with row and column numbers
    pub fn format_with_coords(universe: &Universe) -> String {
        let mut output = String::new();

        output.push_str("   ");
        output.push_str(&(0..universe.width()).map(|x| format!("{:2}", x % 10)).join(""));
        output.push('\n');

        for (y, line) in universe.cells().chunks(universe.width() as usize).enumerate() {
            output.push_str(&format!("{:2} ", y));
            for cell in line {
                output.push_str(if cell.is_alive() { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// JSON snapshot of a universe
    pub fn snapshot_json(universe: &Universe, generation: u64) -> Result<String> {
        Ok(serde_json::to_string(&Snapshot::new(universe, generation))?)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::UniverseOption;

    fn blinker() -> Universe {
        let mut universe = Universe::new(UniverseOption::Dead, 3, 3).unwrap();
        for column in 0..3 {
            universe.toggle_cell(1, column);
        }
        universe
    }

    #[test]
    fn test_format_frame() {
        let universe = blinker();
        let report = FrameReport {
            generation: 7,
            ticks: 1,
            paused: false,
            fps: None,
        };

        let frame = UniverseFormatter::format_frame(&universe, &report);
        assert!(frame.starts_with("Generation 7 (+1) | Living: 3\n"));
        assert!(frame.ends_with("◻◻◻\n◼◼◼\n◻◻◻\n"));
    }

    #[test]
    fn test_format_with_coords() {
        let with_coords = UniverseFormatter::format_with_coords(&blinker());
        assert!(with_coords.contains(" 0 1 2"));
        assert!(with_coords.contains(" 1 ██████"));
        assert_eq!(with_coords.lines().count(), 4);
    }

    #[test]
    fn test_snapshot_json() {
        let json = UniverseFormatter::snapshot_json(&blinker(), 3).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generation"], 3);
        assert_eq!(value["width"], 3);
        assert_eq!(value["living"], 3);
        assert_eq!(value["cells"].as_array().unwrap().len(), 9);
        assert_eq!(value["cells"][4], 1);
        assert_eq!(value["cells"][0], 0);
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Yellow);
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
