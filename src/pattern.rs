use crate::error::UniverseError;

/// A fixed multi-cell pattern that can be stamped onto the universe.
///
/// Live cells are stored as `(row, col)` offsets relative to an anchor at
/// the pattern's top-left corner. Stamping applies each offset with
/// toroidal wrap, so a pattern placed near an edge continues on the
/// opposite side.
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub width: u32,
    pub height: u32,
    /// Relative `(row, col)` coordinates of alive cells
    pub cells: Vec<(u32, u32)>,
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(u32, u32)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().map_or(0, |m| m + 1);
        let width = cells.iter().map(|(_, col)| *col).max().map_or(0, |m| m + 1);
        Self {
            name,
            description,
            width,
            height,
            cells,
        }
    }

    /// Parse a pattern from its plaintext form: `O` for a live cell, `.`
    /// for a dead one, `\n` separating rows. Any other character is
    /// rejected with its position.
    pub fn from_plaintext(name: &'static str, text: &str) -> Result<Self, UniverseError> {
        let mut row = 0u32;
        let mut col = 0u32;
        let mut cells = Vec::new();

        for ch in text.chars() {
            match ch {
                'O' => {
                    cells.push((row, col));
                    col += 1;
                }
                '.' => col += 1,
                '\n' => {
                    row += 1;
                    col = 0;
                }
                _ => {
                    return Err(UniverseError::PatternParse {
                        line: row as usize + 1,
                        column: col as usize + 1,
                        found: ch,
                    });
                }
            }
        }

        Ok(Self::new(name, "plaintext import", cells))
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, translates by (+1, +1) every 4 ticks
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(1, 0), (1, 1), (1, 2)],
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new("Block", "Still life", vec![(0, 0), (0, 1), (1, 0), (1, 1)])
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
        )
    }

    /// Lightweight Spaceship (LWSS) - translates horizontally
    pub fn lwss() -> Pattern {
        Pattern::new(
            "LWSS",
            "Lightweight Spaceship (period 4)",
            vec![
                (0, 1),
                (0, 4),
                (1, 0),
                (2, 0),
                (2, 4),
                (3, 0),
                (3, 1),
                (3, 2),
                (3, 3),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), blinker(), block(), toad(), beacon(), lwss()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glider_offsets_are_pinned() {
        let glider = presets::glider();
        assert_eq!(glider.cells, vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]);
        assert_eq!((glider.width, glider.height), (3, 3));
    }

    #[test]
    fn test_dimensions_from_offsets() {
        let pattern = Pattern::new("test", "", vec![(0, 0), (2, 4)]);
        assert_eq!(pattern.height, 3);
        assert_eq!(pattern.width, 5);

        let empty = Pattern::new("empty", "", vec![]);
        assert_eq!((empty.width, empty.height), (0, 0));
    }

    #[test]
    fn test_plaintext_blinker() {
        let pattern = Pattern::from_plaintext("blinker", "...\nOOO\n...").unwrap();
        assert_eq!(pattern.cells, vec![(1, 0), (1, 1), (1, 2)]);
        assert_eq!(pattern.height, 2);
        assert_eq!(pattern.width, 3);
    }

    #[test]
    fn test_plaintext_rejects_unknown_character() {
        let err = Pattern::from_plaintext("bad", ".O.\n.x.").unwrap_err();
        assert_eq!(
            err,
            UniverseError::PatternParse {
                line: 2,
                column: 2,
                found: 'x',
            }
        );
    }

    #[test]
    fn test_presets_are_nonempty() {
        for pattern in presets::all_patterns() {
            assert!(!pattern.cells.is_empty(), "{} has no cells", pattern.name);
        }
    }
}
