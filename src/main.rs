mod cli;
mod error;
mod fmt;
mod generator;
mod models;
mod reports;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli::report::run(cli.seed, cli.records, cli.year) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
