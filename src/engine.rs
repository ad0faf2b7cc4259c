//! Peg solitaire board state and move execution.
//!
//! This module provides the shape-independent game logic:
//! - Board construction from a [`GeometryProvider`] and a start hole
//! - Jump legality (orthogonal, two cells, over a marble into a hole)
//! - Move execution with an incrementally maintained score
//! - Game-over detection by scanning every marble's four jumps
//!
//! The board is a flat array of [`SlotState`] addressed by
//! `row * size + col`. Cells outside the shape are [`SlotState::Invalid`]
//! and stay that way; only `Marble` and `Empty` ever swap.

use crate::constants::{JUMPS, board_size};
use crate::error::SolitaireError;
use crate::geometry::GeometryProvider;

/// A cell on the board as `(row, col)`, 0-indexed.
pub type Position = (usize, usize);

/// Content of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SlotState {
    Marble,
    Empty,
    /// Not part of the board shape. Never a move endpoint.
    Invalid,
}

/// Read-only view of a board, enough to draw it.
pub trait BoardState {
    /// Side length of the square grid.
    fn board_size(&self) -> usize;

    /// Content of the cell at `(row, col)`.
    fn slot_at(&self, row: usize, col: usize) -> Result<SlotState, SolitaireError>;

    /// Number of marbles left on the board.
    fn score(&self) -> usize;
}

/// Reject arm thicknesses that are zero, even, or too large for the grid
/// (`size * size` cells) to be addressed.
fn check_arm_thickness(arm_thickness: usize) -> Result<(), SolitaireError> {
    let cells = arm_thickness
        .checked_mul(3)
        .and_then(|t| t.checked_sub(2))
        .and_then(|n| n.checked_mul(n))
        .filter(|&cells| isize::try_from(cells).is_ok());
    if arm_thickness % 2 == 0 || cells.is_none() {
        return Err(SolitaireError::InvalidArmThickness(arm_thickness));
    }
    Ok(())
}

/// A peg solitaire game on one board.
///
/// The engine owns the board exclusively. [`Engine::apply_move`] is the only
/// way to change it, and a rejected move leaves it untouched.
#[derive(Clone, Debug)]
pub struct Engine<G> {
    geometry: G,
    arm_thickness: usize,
    /// Side length of the grid (`3 * arm_thickness - 2`)
    size: usize,
    /// Row-major cell states, `size * size` entries
    cells: Vec<SlotState>,
    /// Cached count of `Marble` cells
    marbles: usize,
}

impl<G: GeometryProvider> Engine<G> {
    /// Create a board with every playable cell holding a marble except
    /// `(empty_row, empty_col)`.
    ///
    /// Fails with [`SolitaireError::InvalidArmThickness`] if `arm_thickness`
    /// is zero or even, and with [`SolitaireError::InvalidStartPosition`] if
    /// the start cell is not part of the shape.
    pub fn new(
        geometry: G,
        arm_thickness: usize,
        empty_row: usize,
        empty_col: usize,
    ) -> Result<Self, SolitaireError> {
        check_arm_thickness(arm_thickness)?;
        let size = board_size(arm_thickness);
        if !in_region(&geometry, arm_thickness, size, (empty_row, empty_col)) {
            return Err(SolitaireError::InvalidStartPosition {
                row: empty_row,
                col: empty_col,
            });
        }

        let mut cells = Vec::with_capacity(size * size);
        let mut marbles = 0;
        for row in 0..size {
            for col in 0..size {
                let slot = if !in_region(&geometry, arm_thickness, size, (row, col)) {
                    SlotState::Invalid
                } else if (row, col) == (empty_row, empty_col) {
                    SlotState::Empty
                } else {
                    marbles += 1;
                    SlotState::Marble
                };
                cells.push(slot);
            }
        }

        Ok(Self {
            geometry,
            arm_thickness,
            size,
            cells,
            marbles,
        })
    }

    /// Create a board whose start hole is the centre cell.
    pub fn centered(geometry: G, arm_thickness: usize) -> Result<Self, SolitaireError> {
        check_arm_thickness(arm_thickness)?;
        let centre = (board_size(arm_thickness) - 1) / 2;
        Self::new(geometry, arm_thickness, centre, centre)
    }

    /// Create a board whose start hole is picked uniformly among the
    /// playable cells.
    pub fn with_random_start(
        geometry: G,
        arm_thickness: usize,
        rng: &mut fastrand::Rng,
    ) -> Result<Self, SolitaireError> {
        check_arm_thickness(arm_thickness)?;
        let size = board_size(arm_thickness);
        let candidates: Vec<Position> = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .filter(|&pos| in_region(&geometry, arm_thickness, size, pos))
            .collect();
        if candidates.is_empty() {
            return Err(SolitaireError::InvalidStartPosition { row: 0, col: 0 });
        }
        let (row, col) = candidates[rng.usize(..candidates.len())];
        Self::new(geometry, arm_thickness, row, col)
    }

    /// Side length of the square grid, `3 * arm_thickness - 2`.
    pub fn board_size(&self) -> usize {
        self.size
    }

    /// Arm thickness the board was built with.
    pub fn arm_thickness(&self) -> usize {
        self.arm_thickness
    }

    /// Content of the cell at `(row, col)`.
    ///
    /// Fails with [`SolitaireError::OutOfBounds`] if either coordinate is not
    /// below [`Engine::board_size`].
    pub fn slot_at(&self, row: usize, col: usize) -> Result<SlotState, SolitaireError> {
        if row >= self.size || col >= self.size {
            return Err(SolitaireError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        Ok(self.slot((row, col)))
    }

    /// Number of marbles on the board.
    pub fn score(&self) -> usize {
        self.marbles
    }

    /// Check whether jumping the marble at `from` into `to` is legal.
    ///
    /// Both cells must be on the board, `from` must hold a marble, `to` must
    /// be empty, the two must be exactly two cells apart in a row or column,
    /// and the cell between them must hold a marble.
    pub fn is_legal_move(&self, from: Position, to: Position) -> bool {
        self.jumped_over(from, to).is_some()
    }

    /// Jump the marble at `from` into `to`, removing the marble in between.
    ///
    /// Returns the cell whose marble was removed. Fails with
    /// [`SolitaireError::IllegalMove`] without touching the board if
    /// [`Engine::is_legal_move`] is false for the same cells.
    pub fn apply_move(
        &mut self,
        from: Position,
        to: Position,
    ) -> Result<Position, SolitaireError> {
        let mid = self
            .jumped_over(from, to)
            .ok_or(SolitaireError::IllegalMove { from, to })?;

        self.set(from, SlotState::Empty);
        self.set(mid, SlotState::Empty);
        self.set(to, SlotState::Marble);
        self.marbles -= 1;
        Ok(mid)
    }

    /// True when no marble is left or no marble has a legal jump.
    ///
    /// Does not distinguish a solved board from a stuck one; callers inspect
    /// [`Engine::score`] for that.
    pub fn is_game_over(&self) -> bool {
        self.marbles == 0 || !self.has_legal_move()
    }

    /// Scan every marble and stop at the first legal jump.
    fn has_legal_move(&self) -> bool {
        (0..self.size)
            .flat_map(|row| (0..self.size).map(move |col| (row, col)))
            .filter(|&pos| self.in_region(pos) && self.slot(pos) == SlotState::Marble)
            .any(|from| {
                JUMPS.iter().any(|&(dr, dc)| {
                    offset(from, dr, dc).is_some_and(|to| self.is_legal_move(from, to))
                })
            })
    }

    /// The cell jumped over by a legal `from -> to` move, `None` if illegal.
    fn jumped_over(&self, from: Position, to: Position) -> Option<Position> {
        if !self.in_region(from) || !self.in_region(to) {
            return None;
        }
        if self.slot(from) != SlotState::Marble || self.slot(to) != SlotState::Empty {
            return None;
        }
        let dr = from.0.abs_diff(to.0);
        let dc = from.1.abs_diff(to.1);
        if !matches!((dr, dc), (2, 0) | (0, 2)) {
            return None;
        }
        let mid = ((from.0 + to.0) / 2, (from.1 + to.1) / 2);
        (self.slot(mid) == SlotState::Marble).then_some(mid)
    }

    #[inline]
    fn in_region(&self, pos: Position) -> bool {
        in_region(&self.geometry, self.arm_thickness, self.size, pos)
    }

    #[inline]
    fn idx(&self, (row, col): Position) -> usize {
        row * self.size + col
    }

    #[inline]
    fn slot(&self, pos: Position) -> SlotState {
        self.cells[self.idx(pos)]
    }

    #[inline]
    fn set(&mut self, pos: Position, slot: SlotState) {
        let i = self.idx(pos);
        self.cells[i] = slot;
    }
}

impl<G: GeometryProvider> BoardState for Engine<G> {
    fn board_size(&self) -> usize {
        Engine::board_size(self)
    }

    fn slot_at(&self, row: usize, col: usize) -> Result<SlotState, SolitaireError> {
        Engine::slot_at(self, row, col)
    }

    fn score(&self) -> usize {
        Engine::score(self)
    }
}

/// Bounds check plus the shape predicate.
fn in_region<G: GeometryProvider>(
    geometry: &G,
    arm_thickness: usize,
    size: usize,
    (row, col): Position,
) -> bool {
    if row >= size || col >= size {
        return false;
    }
    match (isize::try_from(row), isize::try_from(col)) {
        (Ok(r), Ok(c)) => geometry.is_playable(r, c, arm_thickness),
        _ => false,
    }
}

/// `pos` shifted by `(dr, dc)`, `None` if it would leave the first quadrant.
#[inline]
fn offset((row, col): Position, dr: isize, dc: isize) -> Option<Position> {
    Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Cross, Octagon, Triangle};

    fn english() -> Engine<Cross> {
        Engine::centered(Cross, 3).unwrap()
    }

    #[test]
    fn test_arm_thickness_validation() {
        for arm in [0, 2, 4, 6, 100] {
            assert_eq!(
                Engine::centered(Cross, arm).unwrap_err(),
                SolitaireError::InvalidArmThickness(arm)
            );
        }
        assert_eq!(
            Engine::new(Octagon, 2, 1, 1).unwrap_err(),
            SolitaireError::InvalidArmThickness(2)
        );
    }

    #[test]
    fn test_oversized_arm_thickness() {
        for arm in [usize::MAX, usize::MAX / 3 + 2, (1 << 33) | 1] {
            assert_eq!(
                check_arm_thickness(arm).unwrap_err(),
                SolitaireError::InvalidArmThickness(arm)
            );
        }
        assert!(check_arm_thickness(1001).is_ok());
    }

    #[test]
    fn test_start_position_validation() {
        let err = Engine::new(Cross, 3, 0, 0).unwrap_err();
        assert_eq!(err, SolitaireError::InvalidStartPosition { row: 0, col: 0 });

        let err = Engine::new(Cross, 3, 7, 3).unwrap_err();
        assert_eq!(err, SolitaireError::InvalidStartPosition { row: 7, col: 3 });

        // (1,1) is a corner on the English board but playable on the European one
        assert!(Engine::new(Cross, 3, 1, 1).is_err());
        assert!(Engine::new(Octagon, 3, 1, 1).is_ok());
    }

    #[test]
    fn test_initial_board() {
        let e = english();
        assert_eq!(e.board_size(), 7);
        assert_eq!(e.slot_at(0, 0).unwrap(), SlotState::Invalid);
        assert_eq!(e.slot_at(0, 6).unwrap(), SlotState::Invalid);
        assert_eq!(e.slot_at(3, 3).unwrap(), SlotState::Empty);
        assert_eq!(e.slot_at(2, 0).unwrap(), SlotState::Marble);
        assert_eq!(e.slot_at(2, 6).unwrap(), SlotState::Marble);
        assert_eq!(e.score(), 32);
    }

    #[test]
    fn test_slot_at_out_of_bounds() {
        let e = english();
        assert_eq!(
            e.slot_at(7, 0).unwrap_err(),
            SolitaireError::OutOfBounds {
                row: 7,
                col: 0,
                size: 7
            }
        );
        assert!(e.slot_at(0, 7).is_err());
        assert!(e.slot_at(6, 6).is_ok());
    }

    #[test]
    fn test_is_legal_move() {
        let e = english();
        assert!(!e.is_legal_move((0, 0), (0, 0)));
        assert!(!e.is_legal_move((0, 0), (3, 2)));
        assert!(!e.is_legal_move((2, 1), (4, 1)));
        assert!(e.is_legal_move((5, 3), (3, 3)));
        assert!(e.is_legal_move((1, 3), (3, 3)));
        assert!(e.is_legal_move((3, 1), (3, 3)));
        assert!(e.is_legal_move((3, 5), (3, 3)));
        // Distance and direction
        assert!(!e.is_legal_move((0, 3), (3, 3)));
        assert!(!e.is_legal_move((2, 3), (3, 3)));
        assert!(!e.is_legal_move((1, 1), (3, 3)));
        assert!(!e.is_legal_move((5, 5), (3, 3)));
        // Off the board entirely
        assert!(!e.is_legal_move((3, 9), (3, 7)));
        assert!(!e.is_legal_move((usize::MAX, 3), (3, 3)));
    }

    #[test]
    fn test_apply_move() {
        let mut e = english();
        let jumped = e.apply_move((1, 3), (3, 3)).unwrap();
        assert_eq!(jumped, (2, 3));
        assert_eq!(e.slot_at(1, 3).unwrap(), SlotState::Empty);
        assert_eq!(e.slot_at(2, 3).unwrap(), SlotState::Empty);
        assert_eq!(e.slot_at(3, 3).unwrap(), SlotState::Marble);
        assert_eq!(e.score(), 31);

        e.apply_move((2, 1), (2, 3)).unwrap();
        assert_eq!(e.slot_at(2, 1).unwrap(), SlotState::Empty);
        assert_eq!(e.slot_at(2, 2).unwrap(), SlotState::Empty);
        assert_eq!(e.slot_at(2, 3).unwrap(), SlotState::Marble);
        assert_eq!(e.score(), 30);
    }

    #[test]
    fn test_illegal_move_leaves_board_unchanged() {
        let mut e = english();
        let before = e.cells.clone();
        let err = e.apply_move((0, 3), (3, 3)).unwrap_err();
        assert_eq!(
            err,
            SolitaireError::IllegalMove {
                from: (0, 3),
                to: (3, 3)
            }
        );
        assert_eq!(e.cells, before);
        assert_eq!(e.score(), 32);
    }

    #[test]
    fn test_reverse_jump_is_illegal() {
        let mut e = english();
        e.apply_move((1, 3), (3, 3)).unwrap();
        assert!(!e.is_legal_move((3, 3), (1, 3)));
    }

    #[test]
    fn test_single_cell_board_is_over() {
        let e = Engine::centered(Cross, 1).unwrap();
        assert_eq!(e.board_size(), 1);
        assert_eq!(e.score(), 0);
        assert!(e.is_game_over());
    }

    #[test]
    fn test_not_over_at_start() {
        assert!(!english().is_game_over());
        assert!(!Engine::centered(Octagon, 3).unwrap().is_game_over());
    }

    #[test]
    fn test_triangle_board() {
        let e = Engine::new(Triangle, 3, 0, 0).unwrap();
        assert_eq!(e.score(), 27);
        assert_eq!(e.slot_at(0, 1).unwrap(), SlotState::Invalid);
        assert!(e.is_legal_move((2, 0), (0, 0)));
        assert!(!e.is_legal_move((0, 2), (0, 0)));
    }

    #[test]
    fn test_random_start_is_playable() {
        let mut rng = fastrand::Rng::with_seed(7);
        for _ in 0..50 {
            let e = Engine::with_random_start(Octagon, 3, &mut rng).unwrap();
            assert_eq!(e.score(), 36);
            let empties: Vec<Position> = (0..7)
                .flat_map(|r| (0..7).map(move |c| (r, c)))
                .filter(|&(r, c)| e.slot_at(r, c).unwrap() == SlotState::Empty)
                .collect();
            assert_eq!(empties.len(), 1);
        }
        assert!(Engine::with_random_start(Octagon, 4, &mut rng).is_err());
    }

    #[test]
    fn test_offset() {
        assert_eq!(offset((0, 0), -2, 0), None);
        assert_eq!(offset((3, 3), -2, 0), Some((1, 3)));
        assert_eq!(offset((3, 3), 0, 2), Some((3, 5)));
    }
}
