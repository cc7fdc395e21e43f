//! CLI entry point for the Truchet mosaic renderer

use clap::Parser;
use truchet_mosaic::io::cli::{Cli, FileProcessor};

fn main() -> truchet_mosaic::Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let processor = FileProcessor::new(cli);
    processor.process()
}
