//! CLI entry point for the two-tone pattern renderer

use clap::Parser;
use duotile::io::cli::{Cli, FileProcessor};

fn main() -> duotile::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let mut processor = FileProcessor::new(cli);
    processor.process()
}
