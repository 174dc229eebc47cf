//! tokscan - Count LLM tokens across source trees and estimate API cost
//!
//! tokscan walks a file or directory, tokenizes matching text files with
//! the cl100k_base encoding, and reports per-file and aggregate token
//! counts with a cost estimate.

use clap::Parser;

mod cli;
mod core;
mod scan;

fn main() {
    let cli = cli::Cli::parse();

    if let Err(err) = cli::run(cli) {
        eprintln!("Error: {:#}", err);
        let code = match err.downcast_ref::<scan::ScanError>() {
            Some(scan::ScanError::RootNotFound(_)) => 2,
            None => 1,
        };
        std::process::exit(code);
    }
}
