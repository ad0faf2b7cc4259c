//! Board shapes.
//!
//! Every shape lives in the same `N x N` square (`N = 3 * arm - 2`) and is
//! described by a single predicate: is `(row, col)` part of the playable
//! region? The engine knows nothing else about shapes.
//!
//! Layout for `arm = 3` (`#` = playable):
//!
//! ```text
//!   English        European       Triangle
//!   . . # # # . .  . . # # # . .  # . . . . . .
//!   . . # # # . .  . # # # # # .  # # . . . . .
//!   # # # # # # #  # # # # # # #  # # # . . . .
//!   # # # # # # #  # # # # # # #  # # # # . . .
//!   # # # # # # #  # # # # # # #  # # # # # . .
//!   . . # # # . .  . # # # # # .  # # # # # # .
//!   . . # # # . .  . . # # # . .  # # # # # # #
//! ```

use clap::ValueEnum;

use crate::constants::board_size;

/// Decides which cells of the square grid belong to a board shape.
///
/// Implementations must be pure and total: defined for every integer pair,
/// `false` for anything outside `[0, N)`.
pub trait GeometryProvider {
    /// Whether `(row, col)` is part of the board for this `arm_thickness`.
    fn is_playable(&self, row: isize, col: isize, arm_thickness: usize) -> bool;

    /// Human readable shape name.
    fn name(&self) -> &'static str;
}

/// Corner block bounds: rows/cols below `lo` or above `hi` are corner territory.
#[inline]
fn arm_bounds(arm_thickness: usize) -> (isize, isize, isize) {
    let n = side(arm_thickness);
    let a = isize::try_from(arm_thickness).unwrap_or(isize::MAX);
    (n, a - 1, a.saturating_mul(2) - 2)
}

/// Grid side as `isize`, saturating for arm thicknesses no engine accepts.
#[inline]
fn side(arm_thickness: usize) -> isize {
    isize::try_from(board_size(arm_thickness)).unwrap_or(isize::MAX)
}

/// English board: a plus sign with square corners cut away.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cross;

impl GeometryProvider for Cross {
    fn is_playable(&self, row: isize, col: isize, arm_thickness: usize) -> bool {
        let (n, lo, hi) = arm_bounds(arm_thickness);
        if row < 0 || col < 0 || row >= n || col >= n {
            return false;
        }
        let outer_row = row < lo || row > hi;
        let outer_col = col < lo || col > hi;
        !(outer_row && outer_col)
    }

    fn name(&self) -> &'static str {
        "English"
    }
}

/// European board: the corners are cut diagonally, leaving an octagon.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Octagon;

impl GeometryProvider for Octagon {
    fn is_playable(&self, row: isize, col: isize, arm_thickness: usize) -> bool {
        let (n, lo, hi) = arm_bounds(arm_thickness);
        if row < 0 || col < 0 || row >= n || col >= n {
            return false;
        }
        let top = row < lo;
        let bottom = row > hi;
        let left = col < lo;
        let right = col > hi;
        match (top, bottom, left, right) {
            (true, _, true, _) => row.saturating_add(col) >= lo,
            (true, _, _, true) => col - row <= hi,
            (_, true, true, _) => row - col <= hi,
            // Mirror image of the top-left rule.
            (_, true, _, true) => {
                row.saturating_add(col) <= (n - 1).saturating_mul(2) - lo
            }
            _ => true,
        }
    }

    fn name(&self) -> &'static str {
        "European"
    }
}

/// Triangular board: the lower-left half of the square, diagonal included.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Triangle;

impl GeometryProvider for Triangle {
    fn is_playable(&self, row: isize, col: isize, arm_thickness: usize) -> bool {
        row < side(arm_thickness) && col >= 0 && col <= row
    }

    fn name(&self) -> &'static str {
        "Triangle"
    }
}

/// Shape selector, dispatching to the matching provider.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Shape {
    #[default]
    English,
    European,
    Triangle,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::English, Shape::European, Shape::Triangle];
}

impl GeometryProvider for Shape {
    fn is_playable(&self, row: isize, col: isize, arm_thickness: usize) -> bool {
        match self {
            Shape::English => Cross.is_playable(row, col, arm_thickness),
            Shape::European => Octagon.is_playable(row, col, arm_thickness),
            Shape::Triangle => Triangle.is_playable(row, col, arm_thickness),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Shape::English => Cross.name(),
            Shape::European => Octagon.name(),
            Shape::Triangle => Triangle.name(),
        }
    }
}

impl<G: GeometryProvider + ?Sized> GeometryProvider for Box<G> {
    fn is_playable(&self, row: isize, col: isize, arm_thickness: usize) -> bool {
        (**self).is_playable(row, col, arm_thickness)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
