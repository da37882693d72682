//! CLI entry point for photomosaic composition

use clap::Parser;
use photomosaic::io::cli::{Cli, MosaicProcessor};

fn main() -> photomosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = MosaicProcessor::new(cli);
    processor.process()
}
