//! Fixed patterns that can be stamped onto a universe

use super::Cell;

/// A rectangular pattern with a reference cell at its center.
///
/// Rows use `#` for alive and `.` for dead cells. Stamping a pattern sets
/// every cell of its footprint, dead ones included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    rows: &'static [&'static str],
}

/// The canonical glider, travelling one cell down and right every 4 generations
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    rows: &[
        "..#",
        "#.#",
        ".##",
    ],
};

/// Period-2 oscillator
pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    rows: &["###"],
};

/// 2x2 still life
pub const BLOCK: Pattern = Pattern {
    name: "block",
    rows: &[
        "##",
        "##",
    ],
};

pub const PATTERNS: &[Pattern] = &[GLIDER, BLINKER, BLOCK];

impl Pattern {
    /// Look up a built-in pattern by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.rows.iter().map(|row| row.len()).max().unwrap_or(0)
    }

    /// Position of the reference cell inside the pattern
    pub fn anchor(&self) -> (usize, usize) {
        (self.height() / 2, self.width() / 2)
    }

    /// Cells of the footprint as `(row offset, column offset, state)` relative to the anchor
    pub fn offsets(&self) -> impl Iterator<Item = (i64, i64, Cell)> + '_ {
        let (anchor_row, anchor_col) = self.anchor();
        self.rows.iter().enumerate().flat_map(move |(r, line)| {
            line.bytes().enumerate().map(move |(c, byte)| {
                (
                    r as i64 - anchor_row as i64,
                    c as i64 - anchor_col as i64,
                    Cell::from(byte == b'#'),
                )
            })
        })
    }

    /// Number of alive cells in the pattern
    pub fn living_count(&self) -> usize {
        self.offsets().filter(|(_, _, cell)| cell.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_shape() {
        assert_eq!(GLIDER.width(), 3);
        assert_eq!(GLIDER.height(), 3);
        assert_eq!(GLIDER.anchor(), (1, 1));
        assert_eq!(GLIDER.living_count(), 5);

        let alive: Vec<(i64, i64)> = GLIDER
            .offsets()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect();
        assert_eq!(alive, vec![(-1, 1), (0, -1), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_footprint_includes_dead_cells() {
        assert_eq!(GLIDER.offsets().count(), 9);
        assert!(GLIDER
            .offsets()
            .any(|(r, c, cell)| r == 0 && c == 0 && cell == Cell::Dead));
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Pattern::by_name("Glider"), Some(&GLIDER));
        assert_eq!(Pattern::by_name("blinker"), Some(&BLINKER));
        assert!(Pattern::by_name("spaceship").is_none());
        assert_eq!(BLINKER.anchor(), (0, 1));
    }
}
