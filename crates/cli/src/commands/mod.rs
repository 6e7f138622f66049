//! Subcommand implementations.

pub mod analytics;
pub mod orders;
pub mod print;

use std::io::{self, Write};

use orderflow_core::PrintError;
use orderflow_dashboard::{ConfigError, DataError};
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Print(#[from] PrintError),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Write `value` to stdout as pretty-printed JSON.
fn emit_json<T: Serialize>(value: &T) -> Result<(), CommandError> {
    let json = serde_json::to_string_pretty(value)?;
    emit_text(&json)
}

/// Write `text` to stdout followed by a newline.
fn emit_text(text: &str) -> Result<(), CommandError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{text}")?;
    Ok(())
}
