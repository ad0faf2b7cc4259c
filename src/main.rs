//! Marble-Solitaire: peg solitaire in the terminal.
//!
//! ## Usage
//!
//! - `marble-solitaire` - Show the starting boards
//! - `marble-solitaire play` - Play on the English board
//! - `marble-solitaire play --shape european --arm 5` - Play a larger European board
//! - `marble-solitaire demo` - Show the starting boards

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use marble_solitaire::constants::DEFAULT_ARM_THICKNESS;
use marble_solitaire::controller::{Controller, Outcome};
use marble_solitaire::engine::Engine;
use marble_solitaire::geometry::{GeometryProvider, Shape};
use marble_solitaire::view::TextView;

/// Marble-Solitaire: peg solitaire on English, European and triangular boards
#[derive(Parser)]
#[command(name = "marble-solitaire")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game interactively on stdin/stdout
    Play {
        /// Board shape
        #[arg(long, value_enum, default_value_t = Shape::English)]
        shape: Shape,

        /// Arm thickness (positive and odd)
        #[arg(long, default_value_t = DEFAULT_ARM_THICKNESS)]
        arm: usize,

        /// Row of the starting hole, beginning at 1 (default: centre)
        #[arg(long, requires = "col", conflicts_with = "random_start")]
        row: Option<usize>,

        /// Column of the starting hole, beginning at 1 (default: centre)
        #[arg(long, requires = "row", conflicts_with = "random_start")]
        col: Option<usize>,

        /// Put the starting hole on a random playable cell
        #[arg(long)]
        random_start: bool,

        /// Seed for --random-start
        #[arg(long, requires = "random_start")]
        seed: Option<u64>,

        /// Print every move to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Print the starting board of every shape
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            shape,
            arm,
            row,
            col,
            random_start,
            seed,
            verbose,
        }) => {
            let engine = match (row, col) {
                (Some(r), Some(c)) => {
                    if r == 0 || c == 0 {
                        bail!("--row and --col begin at 1");
                    }
                    Engine::new(shape, arm, r - 1, c - 1)
                }
                _ if random_start => {
                    let mut rng = match seed {
                        Some(s) => fastrand::Rng::with_seed(s),
                        None => fastrand::Rng::new(),
                    };
                    Engine::with_random_start(shape, arm, &mut rng)
                }
                _ => Engine::centered(shape, arm),
            }
            .with_context(|| format!("cannot set up {} board", shape.name()))?;

            if verbose {
                eprintln!(
                    "{} board, arm thickness {}, size {}",
                    shape.name(),
                    engine.arm_thickness(),
                    engine.board_size()
                );
            }
            play(engine, verbose)
        }
        Some(Commands::Demo) | None => {
            run_demo();
            Ok(())
        }
    }
}

fn play(engine: Engine<Shape>, verbose: bool) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut controller =
        Controller::new(engine, stdin.lock(), stdout.lock()).with_verbose(verbose);
    let outcome = controller.play_game().context("interactive session failed")?;
    if verbose {
        match outcome {
            Outcome::GameOver { score } => eprintln!("finished with {score} marble(s)"),
            Outcome::Quit { score } => eprintln!("quit with {score} marble(s)"),
        }
    }
    Ok(())
}

fn run_demo() {
    println!("Marble-Solitaire: peg solitaire boards\n");

    for shape in Shape::ALL {
        // Every shape accepts the default arm thickness and its centre cell
        let Ok(engine) = Engine::centered(shape, DEFAULT_ARM_THICKNESS) else {
            continue;
        };
        println!("=== {} ===", shape.name());
        println!("{}", TextView::new(&engine));
        println!("Score: {}\n", engine.score());
    }
}
