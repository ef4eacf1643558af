//! CLI entry point for the blueprint planner

use blueprint_planner::io::cli::{Cli, CommandRunner};
use blueprint_planner::io::logging;
use clap::Parser;

fn main() -> blueprint_planner::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);
    let runner = CommandRunner::new(cli);
    runner.run(&mut std::io::stdout().lock())
}
