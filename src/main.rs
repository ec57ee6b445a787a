//! CLI entry point for geocell quantization and neighbourhood expansion

use clap::Parser;
use geobox::io::cli::{Cli, GeocellProcessor};

fn main() -> geobox::Result<()> {
    let cli = Cli::parse();
    let processor = GeocellProcessor::new(cli);
    processor.process()
}
