use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::wizard::FormData;

/// Salon Booking - book a salon appointment from the terminal
#[derive(Parser)]
#[command(name = "salon-booking")]
#[command(about = "A four-step salon appointment booking wizard")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the interactive booking wizard
    Tui {
        /// Catalog file offering services, stylists and time slots
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Where to write logs while the wizard owns the terminal
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
    /// Book an appointment without the interactive wizard
    Book(BookingArgs),
    /// Check a booking form JSON file step by step
    Validate {
        /// Path to the form file
        form: PathBuf,
    },
    /// Print the services, stylists and time slots on offer
    Catalog {
        /// Catalog file to print instead of the built-in one
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Write the built-in catalog to a file for editing
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

/// Form values for a headless booking.
///
/// Every value defaults to empty so the wizard, not the argument parser,
/// decides what is missing.
#[derive(Args, Debug, Clone, Default)]
pub struct BookingArgs {
    #[arg(long, default_value = "")]
    pub service: String,
    /// Stylist as "Name - Role"
    #[arg(long, default_value = "")]
    pub stylist: String,
    #[arg(long, default_value = "")]
    pub name: String,
    #[arg(long, default_value = "")]
    pub email: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub date: String,
    #[arg(long, default_value = "")]
    pub time: String,
    /// Optional notes for the stylist
    #[arg(long, default_value = "")]
    pub notes: String,
}

impl From<BookingArgs> for FormData {
    fn from(args: BookingArgs) -> Self {
        Self {
            service: args.service,
            stylist: args.stylist,
            name: args.name,
            email: args.email,
            phone: args.phone,
            date: args.date,
            time: args.time,
            notes: args.notes,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
