//! Constants for board dimensions, default settings, and rendering glyphs.
//!
//! The board is a square grid of side `3 * arm_thickness - 2`, stored as a
//! flat array addressed by `row * size + col`. Which cells of that square are
//! playable depends on the board shape (see [`crate::geometry`]).

// =============================================================================
// Board Geometry
// =============================================================================

/// Arm thickness used when none is given. Gives the classic 7x7 boards
/// (33 holes English, 37 holes European).
pub const DEFAULT_ARM_THICKNESS: usize = 3;

/// Side length of the square grid for the given arm thickness.
/// Zero for an arm thickness of zero, saturates at `usize::MAX`.
#[inline]
pub const fn board_size(arm_thickness: usize) -> usize {
    arm_thickness.saturating_mul(3).saturating_sub(2)
}

// =============================================================================
// Jump Offsets
// =============================================================================

/// Row/column offsets of the four orthogonal jumps.
/// Order: North, South, West, East
pub const JUMPS: [(isize, isize); 4] = [
    (-2, 0), // North (up two rows)
    (2, 0),  // South (down two rows)
    (0, -2), // West (left two columns)
    (0, 2),  // East (right two columns)
];

// =============================================================================
// Slot Glyphs (text view)
// =============================================================================

/// A slot holding a marble.
pub const GLYPH_MARBLE: char = 'O';

/// An empty playable slot.
pub const GLYPH_EMPTY: char = '_';

/// A cell outside the playable region.
pub const GLYPH_INVALID: char = ' ';
