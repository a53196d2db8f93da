//! Salon Booking - Main entry point
//!
//! Interactive four-step booking wizard plus headless commands that drive
//! the same wizard from the command line.

use anyhow::{Context, Result};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::fs::OpenOptions;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use salon_booking::app::App;
use salon_booking::cli::{BookingArgs, Cli, Commands};
use salon_booking::config::BookingConfig;
use salon_booking::error::BookingError;
use salon_booking::headless;
use salon_booking::notify::LogNotifier;
use salon_booking::wizard::{FormData, projection::split_stylist};

const DEFAULT_FILTER: &str = "salon_booking=info";
const DEFAULT_LOG_FILE: &str = "salon-booking.log";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Log to stderr for the headless commands
fn setup_stderr_logging() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter())
        .init();
}

/// Log to a file while the TUI owns the terminal
fn setup_file_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {:?}", path))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(file)
                .with_ansi(false),
        )
        .with(env_filter())
        .init();
    Ok(())
}

fn cleanup_terminal() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), LeaveAlternateScreen);
}

fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Restore the terminal before anything gets printed
        cleanup_terminal();
        error!("Application panicked: {}", panic_info);
        default_hook(panic_info);
    }));
}

/// Main application entry point
fn main() -> Result<ExitCode> {
    let cli = Cli::parse_args();

    match cli.command {
        None => run_tui(None, None),
        Some(Commands::Tui { config, log_file }) => run_tui(config, log_file),
        Some(Commands::Book(args)) => {
            setup_stderr_logging();
            run_book(args)
        }
        Some(Commands::Validate { form }) => {
            setup_stderr_logging();
            run_validate(&form)
        }
        Some(Commands::Catalog { config }) => {
            setup_stderr_logging();
            run_catalog(config.as_deref())
        }
        Some(Commands::InitConfig { path }) => {
            setup_stderr_logging();
            run_init_config(&path)
        }
    }
}

/// Run the interactive wizard
fn run_tui(config: Option<PathBuf>, log_file: Option<PathBuf>) -> Result<ExitCode> {
    let log_path = log_file.unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_FILE));
    setup_file_logging(&log_path)?;
    setup_panic_handler();
    info!("Salon booking TUI starting up");

    let catalog = BookingConfig::load_or_default(config.as_deref())?;

    enable_raw_mode().map_err(|e| BookingError::terminal(format!("Failed to enable raw mode: {e}")))?;
    crossterm::execute!(stdout(), EnterAlternateScreen)
        .map_err(|e| BookingError::terminal(format!("Failed to enter alternate screen: {e}")))?;

    let result = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(BookingError::from)
        .and_then(|mut terminal| App::new(catalog).run(&mut terminal));

    // Always attempt cleanup, even if the app failed
    cleanup_terminal();

    result?;
    info!("Salon booking TUI exited");
    Ok(ExitCode::SUCCESS)
}

/// Drive the wizard with command line values
fn run_book(args: BookingArgs) -> Result<ExitCode> {
    let form = FormData::from(args);
    debug!(empty = form.is_empty(), "booking from command line");

    match headless::book(&form, LogNotifier) {
        Ok(booking) => {
            println!("Booking Summary");
            for item in &booking.summary {
                println!("  {:<8} {}", format!("{}:", item.label), item.value);
            }
            println!();
            println!("✓ {}", booking.notification.title);
            println!("  {}", booking.notification.body);
            Ok(ExitCode::SUCCESS)
        }
        Err(BookingError::StepIncomplete { step, errors }) => {
            warn!(step = step.position(), failing = errors.len(), "booking incomplete");
            eprintln!("✗ {step} is incomplete:");
            for (field, message) in errors.iter() {
                eprintln!("  {}: {}", field.label(), message);
            }
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e.into()),
    }
}

/// Report per-step validation of a form file
fn run_validate(path: &Path) -> Result<ExitCode> {
    info!("Validating booking form: {:?}", path);
    let form = headless::load_form(path).with_context(|| format!("Failed to load form from {:?}", path))?;

    let mut all_valid = true;
    for check in headless::validate_form(&form) {
        if check.is_valid() {
            println!("✓ {}", check.step);
        } else {
            all_valid = false;
            println!("✗ {}", check.step);
            for (field, message) in check.errors.iter() {
                println!("    {}: {}", field.label(), message);
            }
        }
    }

    for field in headless::skipped_optional(&form) {
        println!("  ({} left empty)", field.label());
    }

    Ok(if all_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

/// Print the catalog
fn run_catalog(config: Option<&Path>) -> Result<ExitCode> {
    let catalog = BookingConfig::load_or_default(config)?;

    println!("Services:");
    for service in &catalog.services {
        println!("  - {service}");
    }
    println!("Stylists:");
    for stylist in &catalog.stylists {
        match split_stylist(stylist) {
            (name, Some(role)) if !role.is_empty() => println!("  - {name} ({role})"),
            (name, _) => println!("  - {name}"),
        }
    }
    println!("Time slots:");
    println!("  {}", catalog.time_slots.join(", "));
    Ok(ExitCode::SUCCESS)
}

/// Write the default catalog
fn run_init_config(path: &Path) -> Result<ExitCode> {
    BookingConfig::default().save_to_file(path)?;
    info!("Default catalog written to {:?}", path);
    println!("✓ Catalog written to {}", path.display());
    Ok(ExitCode::SUCCESS)
}
