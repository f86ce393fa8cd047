//! Error types for the command line interface.

use thiserror::Error;

use super::*;

/// Error type alias used throughout the CLI.
pub type Result<T> = core::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
  /// Failure inside the bibshelf library.
  #[error(transparent)]
  Library(#[from] BibshelfError),

  /// An interactive prompt could not be shown or read.
  #[error(transparent)]
  Dialog(#[from] dialoguer::Error),

  /// Writing command output failed.
  #[error(transparent)]
  Io(#[from] std::io::Error),
}
