//! Axis-aligned cell rectangles and the translations between record-relative
//! and absolute coordinate spaces.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::coord::Coord;

/// Rectangular block of cells. `row`/`col` anchor the top-left corner
/// (0-based); `width`/`height` count cells.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rect {
    pub row: u32,
    pub col: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    #[inline]
    pub const fn new(row: u32, col: u32, width: u32, height: u32) -> Self {
        Self {
            row,
            col,
            width,
            height,
        }
    }

    /// Inclusive-corner constructor. `None` when `start` is not the top-left.
    pub fn from_bounds(start: Coord, end: Coord) -> Option<Self> {
        if start.row > end.row || start.col > end.col {
            return None;
        }
        Some(Self {
            row: start.row,
            col: start.col,
            width: end.col - start.col + 1,
            height: end.row - start.row + 1,
        })
    }

    #[inline]
    pub const fn top_left(&self) -> Coord {
        Coord::new(self.row, self.col)
    }

    /// Inclusive bottom-right corner.
    #[inline]
    pub const fn bottom_right(&self) -> Coord {
        Coord::new(
            self.row + self.height.saturating_sub(1),
            self.col + self.width.saturating_sub(1),
        )
    }

    /// Shift the rectangle by `origin`, keeping its extent. Turns a
    /// record-relative rectangle into an absolute one.
    #[inline]
    pub const fn translate(&self, origin: Coord) -> Self {
        Self {
            row: self.row + origin.row,
            col: self.col + origin.col,
            width: self.width,
            height: self.height,
        }
    }

    /// Express this rectangle relative to `origin`, keeping its extent.
    /// `None` when the rectangle lies above or left of `origin`.
    pub fn relative_to(&self, origin: Coord) -> Option<Self> {
        Some(Self {
            row: self.row.checked_sub(origin.row)?,
            col: self.col.checked_sub(origin.col)?,
            width: self.width,
            height: self.height,
        })
    }

    /// Same extent re-anchored at `origin`.
    #[inline]
    pub const fn with_origin(&self, origin: Coord) -> Self {
        Self {
            row: origin.row,
            col: origin.col,
            width: self.width,
            height: self.height,
        }
    }

    pub fn contains(&self, at: Coord) -> bool {
        at.row >= self.row
            && at.col >= self.col
            && at.row - self.row < self.height
            && at.col - self.col < self.width
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.width == 1 && self.height == 1 {
            write!(f, "{}", self.top_left())
        } else {
            write!(f, "{}:{}", self.top_left(), self.bottom_right())
        }
    }
}
