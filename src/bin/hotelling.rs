//! Hotelling election game solver.
//!
//! Subcommands: iterative, exhaustive, check

use clap::Parser;

fn main() -> anyhow::Result<()> {
    hotelling::log();
    hotelling::cli::Command::parse().run()
}
