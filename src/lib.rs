//! Marble-Solitaire: a peg solitaire board engine.
//!
//! The engine keeps a square grid of slots, validates and applies jump
//! moves, tracks the number of marbles left, and detects when no jump
//! remains. Board shapes are plugged in through a single predicate.
//!
//! ## Modules
//!
//! - [`constants`] - Defaults, jump offsets, and rendering glyphs
//! - [`geometry`] - Board shapes (English cross, European octagon, triangle)
//! - [`engine`] - Board state, move legality, and game-over detection
//! - [`error`] - Error types
//! - [`view`] - Plain-text board rendering
//! - [`controller`] - Line-oriented interactive play
//!
//! ## Example
//!
//! ```
//! use marble_solitaire::engine::{Engine, SlotState};
//! use marble_solitaire::geometry::Cross;
//!
//! // English board with the centre hole empty
//! let mut game = Engine::centered(Cross, 3).unwrap();
//! assert_eq!(game.score(), 32);
//!
//! // Jump down into the centre
//! game.apply_move((1, 3), (3, 3)).unwrap();
//! assert_eq!(game.slot_at(2, 3).unwrap(), SlotState::Empty);
//! assert_eq!(game.score(), 31);
//! ```

pub mod constants;
pub mod controller;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod view;
