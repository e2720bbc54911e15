//! Toroidal-grid Conway's Game of Life simulation engine.
//!
//! The crate is the engine only: it owns the cell buffer, advances
//! generations, and applies mutations. Rendering, timing, and input belong
//! to an external driver that reads [`Universe::cells`] (or the raw
//! [`Universe::as_bytes`] view) every frame and calls [`Universe::tick`]
//! in between.
//!
//! ```
//! use toroidal_life::Universe;
//!
//! let mut universe = Universe::new(64, 64);
//! universe.add_spaceship(10, 10);
//! universe.tick();
//! let frame = universe.cells();
//! assert_eq!(frame.len(), 64 * 64);
//! ```

mod cell;
mod error;
mod pattern;
mod universe;

pub use cell::Cell;
pub use error::UniverseError;
pub use pattern::{Pattern, presets};
pub use universe::Universe;
