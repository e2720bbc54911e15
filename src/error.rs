use thiserror::Error;

/// Errors arising from caller contract violations.
///
/// Stepping and bulk mutation are total over any valid universe; `Result`
/// only appears where the caller hands in coordinates or pattern text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UniverseError {
    /// A coordinate is outside the bounds of the universe.
    #[error("cell ({row}, {col}) out of bounds: [0, {height}) x [0, {width})")]
    CoordOutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },

    /// Plaintext pattern input contained a character outside the `.O` grammar.
    #[error("invalid pattern character {found:?} at line {line}, column {column}")]
    PatternParse {
        line: usize,
        column: usize,
        found: char,
    },
}
