//! Plain-text board rendering.
//!
//! One line per row, one glyph per slot (`O` marble, `_` empty, space for
//! cells outside the shape), slots separated by a single space. Trailing
//! off-board cells are dropped so no line ends in whitespace:
//!
//! ```text
//!     O O O
//!     O O O
//! O O O O O O O
//! O O O _ O O O
//! O O O O O O O
//!     O O O
//!     O O O
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::constants::{GLYPH_EMPTY, GLYPH_INVALID, GLYPH_MARBLE};
use crate::engine::{BoardState, SlotState};

fn glyph(slot: SlotState) -> char {
    match slot {
        SlotState::Marble => GLYPH_MARBLE,
        SlotState::Empty => GLYPH_EMPTY,
        SlotState::Invalid => GLYPH_INVALID,
    }
}

/// Text view over any board. Only reads the board through [`BoardState`].
pub struct TextView<'a, B: ?Sized> {
    board: &'a B,
}

impl<'a, B: BoardState + ?Sized> TextView<'a, B> {
    pub fn new(board: &'a B) -> Self {
        Self { board }
    }

    /// Write the board (no trailing newline) to `out`.
    pub fn render_board<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }

    /// Write `message` verbatim to `out`.
    pub fn render_message<W: Write + ?Sized>(&self, out: &mut W, message: &str) -> io::Result<()> {
        out.write_all(message.as_bytes())
    }
}

impl<B: BoardState + ?Sized> fmt::Display for TextView<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.board_size();
        for row in 0..size {
            if row > 0 {
                writeln!(f)?;
            }
            let mut slots = Vec::with_capacity(size);
            for col in 0..size {
                let slot = self.board.slot_at(row, col).map_err(|_| fmt::Error)?;
                slots.push(slot);
            }
            while slots.last() == Some(&SlotState::Invalid) {
                slots.pop();
            }
            for (i, &slot) in slots.iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", glyph(slot))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;
    use crate::geometry::{Cross, Octagon, Triangle};

    #[test]
    fn test_english_board() {
        let e = Engine::centered(Cross, 3).unwrap();
        let expected = "    O O O\n    O O O\nO O O O O O O\nO O O _ O O O\nO O O O O O O\n    O O O\n    O O O";
        assert_eq!(TextView::new(&e).to_string(), expected);
    }

    #[test]
    fn test_european_board() {
        let e = Engine::centered(Octagon, 3).unwrap();
        let expected = "    O O O\n  O O O O O\nO O O O O O O\nO O O _ O O O\nO O O O O O O\n  O O O O O\n    O O O";
        assert_eq!(TextView::new(&e).to_string(), expected);
    }

    #[test]
    fn test_triangle_board() {
        let e = Engine::new(Triangle, 1, 0, 0).unwrap();
        assert_eq!(TextView::new(&e).to_string(), "_");

        let e = Engine::new(Triangle, 3, 0, 0).unwrap();
        let text = TextView::new(&e).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "_");
        assert_eq!(lines[1], "O O");
        assert_eq!(lines[6], "O O O O O O O");
    }

    #[test]
    fn test_no_trailing_whitespace() {
        let e = Engine::centered(Cross, 5).unwrap();
        for line in TextView::new(&e).to_string().lines() {
            assert_eq!(line, line.trim_end());
        }
    }

    #[test]
    fn test_render_to_writer() {
        let mut e = Engine::centered(Cross, 3).unwrap();
        e.apply_move((1, 3), (3, 3)).unwrap();
        let view = TextView::new(&e);
        let mut out = Vec::new();
        view.render_board(&mut out).unwrap();
        view.render_message(&mut out, "\nScore: 31\n").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("    O O O\n    O _ O\n"));
        assert!(text.ends_with("Score: 31\n"));
    }
}
