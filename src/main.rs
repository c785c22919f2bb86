//! CLI entry point for the spanning-tree sky pattern generator

use clap::Parser;
use skypattern::io::cli::{Cli, PatternJob};
use skypattern::io::logging::init_subscriber;

fn main() -> skypattern::Result<()> {
    init_subscriber()?;

    let cli = Cli::parse();
    let job = PatternJob::new(cli);
    job.run()
}
