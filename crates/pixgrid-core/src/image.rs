//! Fixed-size color image.
//!
//! The grid extent is part of the type, so two images can only be combined
//! when their dimensions agree. Every point access re-checks the incoming
//! [`Coordinate`] against that extent.

use std::fmt;

use crate::color::Color;
use crate::coordinate::Coordinate;
use crate::error::ImageError;

/// Row count of [`StandardImage`].
pub const IMAGE_NUM_ROWS: usize = 10;

/// Column count of [`StandardImage`].
pub const IMAGE_NUM_COLS: usize = 18;

/// Delimiter printed between cells of a rendered row.
const CELL_SEPARATOR: &str = "--";

/// The 10 x 18 image used throughout the demonstration.
pub type StandardImage = Image<IMAGE_NUM_ROWS, IMAGE_NUM_COLS>;

/// A `ROWS` x `COLS` grid of [`Color`] cells, stored inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image<const ROWS: usize, const COLS: usize> {
    cells: [[Color; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Image<ROWS, COLS> {
    /// An all-black image.
    pub const fn new() -> Self {
        Self::filled(Color::BLACK)
    }

    /// An image with every cell set to `color`.
    pub const fn filled(color: Color) -> Self {
        Self {
            cells: [[color; COLS]; ROWS],
        }
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn cols(&self) -> usize {
        COLS
    }

    /// Overwrite every cell with a copy of `color`.
    pub fn initialize_to(&mut self, color: &Color) {
        for row in &mut self.cells {
            row.fill(*color);
        }
    }

    /// Add `rhs` into `self` cell by cell.
    ///
    /// Returns `true` if any cell clamped.
    pub fn add_image_to(&mut self, rhs: &Self) -> bool {
        let mut clipped = false;
        for (dst_row, src_row) in self.cells.iter_mut().zip(&rhs.cells) {
            for (dst, src) in dst_row.iter_mut().zip(src_row) {
                clipped |= dst.add_color(src);
            }
        }
        if clipped {
            tracing::debug!("add_image_to: at least one cell clamped");
        }
        clipped
    }

    /// Replace `self` with the cell-wise sum of `images`.
    ///
    /// Each cell starts from black and accumulates the images in order,
    /// clamping after every step rather than once on the final sum. An
    /// empty slice yields an all-black image. Returns `true` if any step
    /// of any cell clamped.
    pub fn add_images(&mut self, images: &[Self]) -> bool {
        let mut clipped = false;
        for r in 0..ROWS {
            for c in 0..COLS {
                let mut sum = Color::BLACK;
                for image in images {
                    clipped |= sum.add_color(&image.cells[r][c]);
                }
                self.cells[r][c] = sum;
            }
        }
        if clipped {
            tracing::debug!(count = images.len(), "add_images: at least one cell clamped");
        }
        clipped
    }

    /// Whether `coord` addresses a cell of this image.
    pub fn contains(&self, coord: &Coordinate) -> bool {
        Self::cell_index(coord).is_some()
    }

    /// Write `color` at `coord`.
    ///
    /// Returns `false` and leaves the image untouched when `coord` lies
    /// outside the grid.
    #[must_use]
    pub fn set_color_at_location(&mut self, coord: &Coordinate, color: &Color) -> bool {
        match Self::cell_index(coord) {
            Some((r, c)) => {
                self.cells[r][c] = *color;
                true
            }
            None => {
                tracing::debug!(%coord, rows = ROWS, cols = COLS, "rejected write outside grid");
                false
            }
        }
    }

    /// Read the color at `coord`.
    pub fn get_color_at_location(&self, coord: &Coordinate) -> Result<Color, ImageError> {
        match Self::cell_index(coord) {
            Some((r, c)) => Ok(self.cells[r][c]),
            None => {
                tracing::debug!(%coord, rows = ROWS, cols = COLS, "rejected read outside grid");
                Err(ImageError::OutOfBounds {
                    row: coord.row(),
                    col: coord.col(),
                    rows: ROWS,
                    cols: COLS,
                })
            }
        }
    }

    /// Text rendering: one line per row, cells joined by `--`.
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Map `coord` to array indices when `0 <= row < ROWS` and `0 <= col < COLS`.
    fn cell_index(coord: &Coordinate) -> Option<(usize, usize)> {
        let r = usize::try_from(coord.row()).ok().filter(|&r| r < ROWS)?;
        let c = usize::try_from(coord.col()).ok().filter(|&c| c < COLS)?;
        Some((r, c))
    }
}

impl<const ROWS: usize, const COLS: usize> Default for Image<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> fmt::Display for Image<ROWS, COLS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    f.write_str(CELL_SEPARATOR)?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
