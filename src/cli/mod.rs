use clap::{Parser, Subcommand};

use brasserie::config::{LoggingConfig, StorageConfig};

mod booking;
mod cart;

#[derive(Debug, Parser)]
#[command(name = "brasserie", about = "Brasserie storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    storage: StorageConfig,

    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Cart(cart::CartCommand),
    Booking(booking::BookingCommand),
}

impl Cli {
    pub(crate) fn run(self) -> Result<(), String> {
        self.logging.init();

        match self.command {
            Commands::Cart(command) => cart::run(command, &self.storage),
            Commands::Booking(command) => booking::run(command, &self.storage),
        }
    }
}
