//! # Console Error Type
//!
//! Unified error type for console commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Command (order / view / stats)                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Store Error? ──── StoreError::Io(..) ─────────┐                       │
//! │         │                                       │                       │
//! │         ▼                                       ▼                       │
//! │  Session Error? ── CoreError::... ──────── AppError { code, message }  │
//! │         │                                       │                       │
//! │         ▼                                       ├── Io: leave the loop │
//! │  Success                                        └── other: log, print, │
//! │                                                     back to the menu    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Only a broken terminal (stdin/stdout failing) ends the menu loop. Every
//! other error is shown to the cashier and the menu comes back.

use std::fmt;
use std::io;

use rushmore_core::CoreError;
use rushmore_store::StoreError;

use crate::config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const STORAGE_ERROR: i32 = 3;
    pub const IO_ERROR: i32 = 4;
}

/// Error reported by a console command.
#[derive(Debug)]
pub struct AppError {
    /// Machine-readable category
    pub code: ErrorCode,

    /// Human-readable message for the cashier
    pub message: String,
}

/// Error categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Bad configuration or command line value
    Config,

    /// The order file could not be read or written
    Storage,

    /// Order session misuse (a bug, never bad input)
    Session,

    /// Terminal input/output failed
    Io,

    /// Logging could not be initialized
    Logging,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Storage => "STORAGE_ERROR",
            ErrorCode::Session => "SESSION_ERROR",
            ErrorCode::Io => "IO_ERROR",
            ErrorCode::Logging => "LOGGING_ERROR",
        }
    }
}

impl AppError {
    /// Creates a new console error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a logging setup error.
    pub fn logging(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Logging, message)
    }

    /// True if the terminal itself failed and the loop cannot go on.
    pub fn is_fatal(&self) -> bool {
        self.code == ErrorCode::Io
    }

    /// Exit status for `main`.
    pub fn exit_code(&self) -> i32 {
        match self.code {
            ErrorCode::Config => exit_code::CONFIG_ERROR,
            ErrorCode::Storage => exit_code::STORAGE_ERROR,
            ErrorCode::Io => exit_code::IO_ERROR,
            ErrorCode::Session | ErrorCode::Logging => exit_code::GENERAL_ERROR,
        }
    }
}

/// Converts store errors to console errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match &err {
            StoreError::Io { path, source } => {
                tracing::error!(path = ?path, error = %source, "Order file I/O failed");
                AppError::new(
                    ErrorCode::Storage,
                    format!("Could not access the order file {}: {}", path.display(), source),
                )
            }
            StoreError::Corrupt(_) => {
                AppError::new(ErrorCode::Storage, "The order file is corrupt")
            }
            StoreError::Serialize(e) => {
                tracing::error!(error = %e, "Order encoding failed");
                AppError::new(ErrorCode::Storage, "Could not encode the order")
            }
        }
    }
}

/// Converts core errors to console errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::PizzaNotFound(_) => AppError::new(
                ErrorCode::Session,
                "We do not have this type of pizza for now.",
            ),
            CoreError::InvalidSessionState { expected, actual } => {
                tracing::error!(expected, actual, "Order session misused");
                AppError::new(
                    ErrorCode::Session,
                    format!("Order session is {actual}, expected {expected}"),
                )
            }
            CoreError::Validation(e) => AppError::new(ErrorCode::Session, e.to_string()),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::Config, err.to_string())
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::new(ErrorCode::Io, format!("Terminal I/O failed: {err}"))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {}

/// Result type for console commands.
pub type AppResult<T> = Result<T, AppError>;
