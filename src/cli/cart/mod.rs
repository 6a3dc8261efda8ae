use clap::{Args, Subcommand};

use brasserie::config::StorageConfig;

mod add;
mod count;
mod summary;

#[derive(Debug, Args)]
pub(crate) struct CartCommand {
    #[command(subcommand)]
    command: CartSubcommand,
}

#[derive(Debug, Subcommand)]
enum CartSubcommand {
    /// Add one unit of a dish to the cart
    Add(add::AddItemArgs),
    /// Refresh the cart badge from the stored cart
    Count,
    /// Print an itemised summary with the grand total
    Summary,
}

pub(crate) fn run(command: CartCommand, storage: &StorageConfig) -> Result<(), String> {
    match command.command {
        CartSubcommand::Add(args) => add::run(args, storage),
        CartSubcommand::Count => count::run(storage),
        CartSubcommand::Summary => summary::run(storage),
    }
}
