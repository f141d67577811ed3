//! Command-line interface for generating, tracing, solving and checking mazes

use crate::algorithm::generator::{Maze, MazeGenerator};
use crate::algorithm::tracer::{Trace, trace};
use crate::analysis::structure::{MazeReport, reachable_count, solution};
use crate::io::commands::{format_commands, parse_commands, read_commands};
use crate::io::configuration::{
    Configuration, DEFAULT_CHECK_ROUNDS, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};
use crate::io::error::{MazeError, Result};
use crate::io::progress::CheckProgress;
use crate::spatial::grid::Direction;
use clap::{Parser, Subcommand};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "arrowmaze")]
#[command(
    author,
    version,
    about = "Generate perfect mazes and trace arrow commands through them"
)]
/// Command-line arguments for the maze tool
pub struct Cli {
    /// Maze width in cells
    #[arg(short = 'w', long, global = true, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Maze height in cells
    #[arg(short = 'H', long, global = true, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Random seed for reproducible mazes (OS entropy when omitted)
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Operations offered by the command-line tool
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the wall segments of a new maze
    Generate,

    /// Trace a command script through a new maze
    Trace {
        /// Commands such as `RRDL`, `up down`, or `→↓`
        #[arg(value_name = "COMMANDS", required_unless_present = "file")]
        commands: Option<String>,

        /// Read the commands from a file instead
        #[arg(short, long, conflicts_with = "commands")]
        file: Option<PathBuf>,
    },

    /// Print the commands that solve a new maze
    Solve,

    /// Generate many mazes and verify each is perfect
    Check {
        /// Number of mazes to generate
        #[arg(short, long, default_value_t = DEFAULT_CHECK_ROUNDS)]
        rounds: usize,
    },
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Executes one parsed command line, writing results as text lines
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the selected command
    ///
    /// # Errors
    ///
    /// Returns an error if the maze size is invalid, the commands cannot be
    /// read or parsed, a checked maze is not perfect, or output fails
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        let config = Configuration::new(self.cli.width, self.cli.height)?;

        match &self.cli.command {
            Command::Generate => {
                let maze = self.generator().generate_with(config);
                write_maze(out, &maze)?;
            }
            Command::Trace { commands, file } => {
                let commands = load_commands(commands.as_deref(), file.as_deref())?;
                let maze = self.generator().generate_with(config);
                let traced = trace(&maze, &commands);
                write_maze(out, &maze)?;
                write_trace(out, &traced)?;
            }
            Command::Solve => {
                let maze = self.generator().generate_with(config);
                write_maze(out, &maze)?;
                let route = solution(&maze).unwrap_or_default();
                writeln!(out, "solution {}", format_commands(&route))?;
            }
            Command::Check { rounds } => self.check(config, *rounds, out)?,
        }

        Ok(())
    }

    fn generator(&self) -> MazeGenerator {
        MazeGenerator::new(self.cli.seed)
    }

    fn check(&self, config: Configuration, rounds: usize, out: &mut impl Write) -> Result<()> {
        let base_seed = self
            .cli
            .seed
            .unwrap_or_else(|| rand::rng().random::<u64>());
        let progress = CheckProgress::new(
            rounds,
            config.width(),
            config.height(),
            self.cli.should_show_progress(),
        );

        let mut dead_end_total = 0;
        let mut solution_total = 0;

        for round in 0..rounds {
            let seed = base_seed.wrapping_add(round as u64);
            let maze = MazeGenerator::from_rng(StdRng::seed_from_u64(seed)).generate_with(config);
            let report = MazeReport::from_maze(&maze);
            if !report.perfect {
                progress.finish();
                return Err(MazeError::NotPerfect {
                    seed,
                    passages: report.passages,
                    reachable: reachable_count(&maze),
                    cells: report.cells,
                });
            }
            dead_end_total += report.dead_ends;
            solution_total += report.solution_length.unwrap_or(0);
            progress.advance();
        }
        let checked = progress.position();
        progress.finish();

        let divisor = rounds.max(1) as f64;
        writeln!(
            out,
            "checked {checked} mazes {}x{} from seed {base_seed}: all perfect",
            config.width(),
            config.height()
        )?;
        writeln!(out, "mean dead ends {:.2}", dead_end_total as f64 / divisor)?;
        writeln!(
            out,
            "mean solution length {:.2}",
            solution_total as f64 / divisor
        )?;
        Ok(())
    }
}

fn load_commands(inline: Option<&str>, file: Option<&Path>) -> Result<Vec<Direction>> {
    match (inline, file) {
        (_, Some(path)) => read_commands(path),
        (Some(text), None) => parse_commands(text),
        (None, None) => Ok(Vec::new()),
    }
}

/// Write a maze header followed by one `wall` line per segment
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_maze(out: &mut impl Write, maze: &Maze) -> Result<()> {
    writeln!(out, "maze {}x{}", maze.width(), maze.height())?;
    for segment in maze.segments() {
        writeln!(out, "wall {segment}")?;
    }
    Ok(())
}

/// Write one `step` line per trace segment, then the drop count and outcome
///
/// # Errors
///
/// Returns an error if writing to `out` fails
pub fn write_trace(out: &mut impl Write, trace: &Trace) -> Result<()> {
    for segment in trace.segments() {
        writeln!(out, "step {segment}")?;
    }
    writeln!(out, "dropped {}", trace.dropped())?;
    writeln!(out, "solved {}", trace.is_solved())?;
    Ok(())
}
