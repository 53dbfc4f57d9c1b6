//! Board coordinates.

use std::fmt;
use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A (column, row) position on the board, or a direction vector between positions.
///
/// Column 0 is the A file and row 0 is rank 1. Values outside `0..8` are allowed while
/// walking rays; callers check [`Coordinate::is_on_board`] before indexing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coordinate {
    column: i8,
    row: i8,
}

impl Coordinate {
    #[inline]
    #[must_use]
    pub const fn new(column: i8, row: i8) -> Self {
        Coordinate { column, row }
    }

    #[inline]
    #[must_use]
    pub const fn column(self) -> i8 {
        self.column
    }

    #[inline]
    #[must_use]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.column >= 0 && self.column < 8 && self.row >= 0 && self.row < 8
    }

    /// Move this coordinate in place by `direction`. Wraps at the `i8` bounds.
    #[inline]
    pub fn translate(&mut self, direction: Coordinate) {
        *self = *self + direction;
    }

    /// Display id such as `"E4"`.
    #[must_use]
    pub fn id(self) -> String {
        self.to_string()
    }

    /// Every on-board coordinate, A1 first, row by row.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..8).flat_map(|row| (0..8).map(move |column| Coordinate::new(column, row)))
    }
}

impl Add for Coordinate {
    type Output = Coordinate;

    /// Wraps at the `i8` bounds; the result is then off-board, never a panic.
    fn add(self, direction: Coordinate) -> Coordinate {
        Coordinate::new(
            self.column.wrapping_add(direction.column),
            self.row.wrapping_add(direction.row),
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", (self.column as u8 + b'A') as char, self.row + 1)
        } else {
            write!(f, "({}, {})", self.column, self.row)
        }
    }
}
