//! Row/column pixel addresses.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value held by both fields of a coordinate that has not been set.
pub const INVALID_ROW_COL: i32 = -99999;

/// A `(row, col)` pair addressing a cell of an [`Image`](crate::Image).
///
/// Any pair is legal here; whether it addresses a real cell is decided by
/// the image it is handed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    row: i32,
    col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    pub fn set_row_col(&mut self, row: i32, col: i32) {
        self.row = row;
        self.col = col;
    }

    pub fn set_row(&mut self, row: i32) {
        self.row = row;
    }

    pub fn set_col(&mut self, col: i32) {
        self.col = col;
    }

    pub const fn row(&self) -> i32 {
        self.row
    }

    pub const fn col(&self) -> i32 {
        self.col
    }

    /// Accumulate `other` into `self` in place. Saturates at the `i32` limits.
    pub fn add_row_col_to(&mut self, other: &Self) {
        self.row = self.row.saturating_add(other.row);
        self.col = self.col.saturating_add(other.col);
    }
}

impl Default for Coordinate {
    /// The unset sentinel, `[INVALID_ROW_COL, INVALID_ROW_COL]`.
    fn default() -> Self {
        Self::new(INVALID_ROW_COL, INVALID_ROW_COL)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
