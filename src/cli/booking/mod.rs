use clap::{Args, Subcommand};

use brasserie::config::StorageConfig;

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct BookingCommand {
    #[command(subcommand)]
    command: BookingSubcommand,
}

#[derive(Debug, Subcommand)]
enum BookingSubcommand {
    /// Submit a table booking
    Create(create::CreateBookingArgs),
    /// List the stored bookings
    List,
}

pub(crate) fn run(command: BookingCommand, storage: &StorageConfig) -> Result<(), String> {
    match command.command {
        BookingSubcommand::Create(args) => create::run(args, storage),
        BookingSubcommand::List => list::run(storage),
    }
}
