//! Line-oriented interactive play.
//!
//! The controller renders the board and score, asks for four numbers (from
//! row, from column, to row, to column), and applies the move. Input is read
//! as whitespace-separated tokens, so a whole move may sit on one line or be
//! spread over several.
//!
//! ## Input
//!
//! - Coordinates are 1-indexed, as shown to the player, and converted to the
//!   engine's 0-indexed cells here.
//! - `q` or `Q` in place of any number quits the game.
//! - Anything else (`0`, negatives, words) is rejected and that value is
//!   asked for again.
//!
//! ## Example
//!
//! ```no_run
//! use marble_solitaire::controller::Controller;
//! use marble_solitaire::engine::Engine;
//! use marble_solitaire::geometry::Cross;
//!
//! # fn main() -> anyhow::Result<()> {
//! let engine = Engine::centered(Cross, 3)?;
//! let stdin = std::io::stdin();
//! let mut controller = Controller::new(engine, stdin.lock(), std::io::stdout());
//! controller.play_game()?;
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use crate::engine::{Engine, Position};
use crate::error::ControllerError;
use crate::geometry::GeometryProvider;
use crate::view::TextView;

/// Prompts for the four numbers of a move, in the order they are read.
const PROMPTS: [&str; 4] = [
    "Enter the row number of the position from where a marble is to be moved, beginning at 1:",
    "Enter the column number of the position from where a marble is to be moved, beginning at 1:",
    "Enter the row number of the position to where a marble is to be moved, beginning at 1:",
    "Enter the column number of the position to where a marble is to be moved, beginning at 1:",
];

const INVALID_INPUT: &str =
    "Invalid input! Enter a positive integer or the letter 'q' or 'Q' to quit";

const INVALID_MOVE: &str = "Invalid move. Play again.";

/// How a session ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// No legal jump was left.
    GameOver { score: usize },
    /// The player typed `q`.
    Quit { score: usize },
}

/// A single value read from the player.
enum Input {
    /// 1-indexed coordinate
    Value(usize),
    Quit,
}

/// Interactive session state.
pub struct Controller<G, R, W> {
    engine: Engine<G>,
    input: R,
    output: W,
    /// Tokens read but not consumed yet
    pending: VecDeque<String>,
    /// Echo applied and rejected moves to stderr
    verbose: bool,
}

impl<G: GeometryProvider, R: BufRead, W: Write> Controller<G, R, W> {
    pub fn new(engine: Engine<G>, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
            pending: VecDeque::new(),
            verbose: false,
        }
    }

    /// Enable move diagnostics on stderr.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn engine(&self) -> &Engine<G> {
        &self.engine
    }

    /// Give back the engine and the output writer.
    pub fn into_parts(self) -> (Engine<G>, W) {
        (self.engine, self.output)
    }

    /// Run the prompt/move loop until the game is over or the player quits.
    ///
    /// Fails with [`ControllerError::InputExhausted`] if the input ends first,
    /// and with [`ControllerError::Io`] if reading or writing fails.
    pub fn play_game(&mut self) -> Result<Outcome, ControllerError> {
        while !self.engine.is_game_over() {
            self.render_state()?;

            let mut coords = [0usize; 4];
            for (slot, prompt) in coords.iter_mut().zip(PROMPTS) {
                writeln!(self.output, "{prompt}")?;
                match self.read_value()? {
                    Input::Value(v) => *slot = v - 1,
                    Input::Quit => return self.finish_quit(),
                }
            }

            let from: Position = (coords[0], coords[1]);
            let to: Position = (coords[2], coords[3]);
            match self.engine.apply_move(from, to) {
                Ok(jumped) => {
                    if self.verbose {
                        eprintln!(
                            "move {:?} -> {:?} removed {:?}, score {}",
                            from,
                            to,
                            jumped,
                            self.engine.score()
                        );
                    }
                }
                Err(e) => {
                    if self.verbose {
                        eprintln!("rejected: {e}");
                    }
                    writeln!(self.output, "{INVALID_MOVE}")?;
                }
            }
        }

        writeln!(self.output, "Game over!")?;
        writeln!(self.output, "Final state of game:")?;
        self.render_state()?;
        self.output.flush()?;
        Ok(Outcome::GameOver {
            score: self.engine.score(),
        })
    }

    fn finish_quit(&mut self) -> Result<Outcome, ControllerError> {
        writeln!(self.output, "Game quit!")?;
        writeln!(self.output, "State of game when quit:")?;
        self.render_state()?;
        self.output.flush()?;
        Ok(Outcome::Quit {
            score: self.engine.score(),
        })
    }

    /// Board followed by the score line.
    fn render_state(&mut self) -> Result<(), ControllerError> {
        let view = TextView::new(&self.engine);
        view.render_board(&mut self.output)?;
        let score = format!("\nScore: {}\n", self.engine.score());
        view.render_message(&mut self.output, &score)?;
        Ok(())
    }

    /// Read tokens until one is a positive integer or a quit request.
    fn read_value(&mut self) -> Result<Input, ControllerError> {
        loop {
            let token = self.next_token()?.ok_or(ControllerError::InputExhausted)?;
            if token.eq_ignore_ascii_case("q") {
                return Ok(Input::Quit);
            }
            match token.parse::<usize>() {
                Ok(v) if v >= 1 => return Ok(Input::Value(v)),
                _ => writeln!(self.output, "{INVALID_INPUT}")?,
            }
        }
    }

    /// Next whitespace-separated token, `None` at end of input.
    fn next_token(&mut self) -> Result<Option<String>, ControllerError> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
