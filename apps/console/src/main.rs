//! RushMore Pizza order console.
//!
//! This is the binary entry point. All logic lives in `lib.rs`.

use std::process::ExitCode;

use clap::Parser;
use rushmore_console::cli::Cli;
use rushmore_console::error::exit_code;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match rushmore_console::run(cli) {
        Ok(()) => ExitCode::from(exit_code::SUCCESS as u8),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
