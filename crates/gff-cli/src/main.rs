//! GFF Costing - batch cost calculator for the GFF fat-spread emulsion
//!
//! Costs a recipe from ingredient percentages, packaging rates and batch
//! size, and writes text or Excel reports.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    gff_app::logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
