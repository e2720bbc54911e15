use std::fmt;
use std::mem;

use rand::Rng;
use rayon::prelude::*;

use crate::cell::Cell;
use crate::error::UniverseError;
use crate::pattern::{Pattern, presets};

/// Universe owns the toroidal cell grid and advances it one generation at
/// a time under Conway's rules.
///
/// Dimensions are fixed for the lifetime of the instance. The grid wraps
/// at both edges: row 0's northern neighbor is row `height - 1`, column
/// 0's western neighbor is column `width - 1`.
///
/// Stepping is double-buffered. Each tick computes the next generation
/// from a frozen snapshot of the current one into a scratch buffer, then
/// swaps the two, so a cell never observes an already-updated neighbor
/// and no allocation happens per generation.
#[derive(Clone)]
pub struct Universe {
    width: u32,
    height: u32,
    cells: Vec<Cell>,
    scratch: Vec<Cell>,
}

/// Count live cells among the 8 toroidal neighbors of `(row, col)`.
fn count_live_neighbors(cells: &[Cell], width: u32, height: u32, row: u32, col: u32) -> u8 {
    let w = width as i32;
    let h = height as i32;

    let mut count = 0;
    for delta_row in -1i32..=1 {
        for delta_col in -1i32..=1 {
            if delta_row == 0 && delta_col == 0 {
                continue;
            }
            // Toroidal wrapping
            let neighbor_row = ((row as i32 + delta_row) % h + h) % h;
            let neighbor_col = ((col as i32 + delta_col) % w + w) % w;
            let idx = neighbor_row as usize * width as usize + neighbor_col as usize;
            if cells[idx].is_alive() {
                count += 1;
            }
        }
    }
    count
}

impl Universe {
    /// Grid dimensions used by [`Universe::default`].
    pub const DEFAULT_WIDTH: u32 = 64;
    pub const DEFAULT_HEIGHT: u32 = 64;

    /// Create a new universe with all cells initially dead
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            scratch: vec![Cell::Dead; len],
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Read-only view of the cell buffer, row-major, length
    /// `width * height`. Borrows the engine's own storage; no copy.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The cell buffer as raw bytes, one byte per cell (`0` dead, `1`
    /// alive), the form an external renderer overlays directly.
    pub fn as_bytes(&self) -> &[u8] {
        // Safety: Cell is #[repr(u8)], so a slice of cells has the same
        // memory layout as a slice of bytes of the same length.
        unsafe { std::slice::from_raw_parts(self.cells.as_ptr() as *const u8, self.cells.len()) }
    }

    /// Convert 2D coordinates to the row-major buffer index
    const fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    /// Advance the grid by exactly one generation.
    ///
    /// The next state is computed entirely from the previous generation;
    /// partial updates are never observable.
    pub fn tick(&mut self) {
        for row in 0..self.height {
            for col in 0..self.width {
                let idx = self.index(row, col);
                let neighbors =
                    count_live_neighbors(&self.cells, self.width, self.height, row, col);
                self.scratch[idx] = self.cells[idx].evolve(neighbors);
            }
        }
        mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// One generation with rows computed in parallel.
    ///
    /// Observably identical to [`Universe::tick`]; worthwhile for grids
    /// in the hundreds of cells per side and up.
    pub fn tick_parallel(&mut self) {
        if self.cells.is_empty() {
            return;
        }

        let width = self.width;
        let height = self.height;
        let cells = &self.cells;
        self.scratch
            .par_chunks_mut(width as usize)
            .enumerate()
            .for_each(|(row, next_row)| {
                let row = row as u32;
                for (col, next) in next_row.iter_mut().enumerate() {
                    let col = col as u32;
                    let idx = row as usize * width as usize + col as usize;
                    let neighbors = count_live_neighbors(cells, width, height, row, col);
                    *next = cells[idx].evolve(neighbors);
                }
            });
        mem::swap(&mut self.cells, &mut self.scratch);
    }

    /// Flip a single cell between dead and alive.
    ///
    /// Unlike neighbor lookups and pattern stamping, this does not wrap:
    /// an out-of-range coordinate is a caller error and is rejected.
    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), UniverseError> {
        if row >= self.height || col >= self.width {
            return Err(UniverseError::CoordOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Set every cell to dead
    pub fn all_dead(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomise every cell independently with the supplied generator,
    /// alive with probability 1/2.
    pub fn randomise_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random::<bool>() {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Randomise every cell from the process RNG. Seeded reproducibility
    /// goes through [`Universe::randomise_with`] instead.
    pub fn randomise(&mut self) {
        self.randomise_with(&mut rand::rng());
    }

    /// Stamp a pattern with its top-left anchor at `(row, col)`.
    ///
    /// Every live cell of the pattern is applied with toroidal wrap and
    /// overwrites whatever was at the touched position.
    pub fn place_pattern(&mut self, pattern: &Pattern, row: u32, col: u32) {
        if self.cells.is_empty() {
            return;
        }
        for &(delta_row, delta_col) in &pattern.cells {
            let wrapped_row = (row % self.height + delta_row) % self.height;
            let wrapped_col = (col % self.width + delta_col) % self.width;
            let idx = self.index(wrapped_row, wrapped_col);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Stamp the glider anchored at `(row, col)`, wrapped at the edges
    pub fn add_spaceship(&mut self, row: u32, col: u32) {
        self.place_pattern(&presets::glider(), row, col);
    }

    /// Force the listed `(row, col)` cells alive, with toroidal wrap.
    /// Mainly useful for setting up known states in tests.
    pub fn set_cells(&mut self, coords: &[(u32, u32)]) {
        if self.cells.is_empty() {
            return;
        }
        for &(row, col) in coords {
            let idx = self.index(row % self.height, col % self.width);
            self.cells[idx] = Cell::Alive;
        }
    }

    /// Count of currently live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

impl Default for Universe {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cells.is_empty() {
            return Ok(());
        }
        for line in self.cells.chunks(self.width as usize) {
            for &cell in line {
                let symbol = if cell.is_alive() { '◼' } else { '◻' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
