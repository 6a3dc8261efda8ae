//! Brasserie storefront CLI.

use std::process;

use clap::Parser;

mod cli;

fn main() {
    let _env = dotenvy::dotenv();

    let cli = cli::Cli::parse();

    if let Err(error) = cli.run() {
        eprintln!("{error}");
        process::exit(1);
    }
}
