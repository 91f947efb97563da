//! # RushMore Console Library
//!
//! The interactive order console: menu, order flow, order log views.
//!
//! ## Module Organization
//! ```text
//! rushmore_console/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── cli.rs          ◄─── Command line flags
//! ├── config.rs       ◄─── ConsoleConfig (defaults, env, flags)
//! ├── error.rs        ◄─── AppError and exit codes
//! ├── prompt.rs       ◄─── Prompter trait, stdin and scripted prompters
//! ├── shell.rs        ◄─── Menu loop
//! └── commands/
//!     ├── mod.rs      ◄─── Menu command parsing
//!     ├── order.rs    ◄─── Take one order
//!     ├── orders.rs   ◄─── View all orders
//!     └── stats.rs    ◄─── Order statistics
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod prompt;
pub mod shell;

use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use rushmore_core::Catalog;
use rushmore_store::{FileBackend, OrderStore};

use cli::Cli;
use config::ConsoleConfig;
use error::{AppError, AppResult};
use prompt::StdinPrompter;
use shell::Shell;

/// Runs the console until the cashier quits.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Console Startup                                   │
/// │                                                                         │
/// │  1. Load Configuration ───────────────────────────────────────────────► │
/// │     • Defaults, then RUSHMORE_* env vars, then command line flags       │
/// │                                                                         │
/// │  2. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: configured filter ("warn"), RUST_LOG overrides           │
/// │                                                                         │
/// │  3. Build Catalog and Store ──────────────────────────────────────────► │
/// │     • Standard eight-pizza menu                                         │
/// │     • File-backed order store (the file is created on first order)      │
/// │                                                                         │
/// │  4. Run Menu Loop ────────────────────────────────────────────────────► │
/// │     • stdin / stdout prompter                                           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> AppResult<()> {
    let config = ConsoleConfig::from_env()?.with_cli(&cli)?;

    init_tracing(&config.log_filter)?;

    info!(
        shop = %config.shop_name,
        orders_file = %config.orders_file.display(),
        "Starting order console"
    );

    let catalog = Catalog::standard();
    let store = OrderStore::new(FileBackend::new(&config.orders_file));

    let stdin = io::stdin();
    let prompter = StdinPrompter::new(stdin.lock(), io::stdout());

    let mut shell = Shell::new(&catalog, &config, store, prompter);
    shell.run()?;

    info!("Order console stopped");
    Ok(())
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG` set: used as is
/// - otherwise: `default_filter` (from configuration)
///
/// Logs go to stderr so they never interleave with prompts.
fn init_tracing(default_filter: &str) -> AppResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))
}
