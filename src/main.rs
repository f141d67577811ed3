//! CLI entry point for maze generation and arrow-command tracing

use arrowmaze::io::cli::{Cli, Runner};
use clap::Parser;

fn main() -> arrowmaze::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let runner = Runner::new(cli);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out)
}
