use clap::Parser;
use flight_corpus_processor::cli::{run, Cli};
use flight_corpus_processor::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
