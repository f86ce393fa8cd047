//! Error types for the bibshelf library.
//!
//! Only hard failures live here. A feed lookup that finds no entry and a library
//! file that does not exist yet are ordinary outcomes and never become errors.
//!
//! # Examples
//!
//! ```
//! use bibshelf::{
//!   error::BibshelfError,
//!   library::{Add, Library},
//!   paper::Paper,
//!   prelude::*,
//! };
//!
//! # fn example(library: &mut Library) -> Result<(), BibshelfError> {
//! match Add::paper(Paper::new("1512.05435")).execute(library) {
//!   Err(BibshelfError::DuplicatePaper(id)) => println!("{id} is already on the shelf"),
//!   Err(e) => return Err(e),
//!   Ok(_) => println!("Added!"),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// Error type alias used for the [`bibshelf`](crate) crate.
pub type Result<T> = core::result::Result<T, BibshelfError>;

/// Errors that can occur when working with the bibshelf library.
#[derive(Error, Debug)]
pub enum BibshelfError {
  /// The paper identifier was empty or blank.
  #[error("Invalid identifier format")]
  InvalidIdentifier,

  /// A year that is neither empty nor four digits.
  #[error("Invalid year {0:?}, expected four digits")]
  InvalidYear(String),

  /// A network request failed, or the server answered with a non-success status.
  #[error(transparent)]
  Network(#[from] reqwest::Error),

  /// The arXiv API answered with an error entry instead of a paper.
  ///
  /// The string carries the summary text arXiv attached to the error.
  #[error("API error: {0}")]
  ApiError(String),

  /// The feed document could not be deserialized.
  #[error(transparent)]
  Xml(#[from] quick_xml::DeError),

  /// The library file is not a valid JSON array of papers.
  #[error(transparent)]
  Json(#[from] serde_json::Error),

  /// A file system operation failed.
  #[error(transparent)]
  Path(#[from] std::io::Error),

  /// The configuration file could not be parsed.
  #[error(transparent)]
  TomlDe(#[from] toml::de::Error),

  /// The configuration could not be rendered as TOML.
  #[error(transparent)]
  TomlSer(#[from] toml::ser::Error),

  /// Tried to add a paper whose identifier is already in the library.
  #[error("Tried to add paper \"{0}\" that was already in the library.")]
  DuplicatePaper(String),

  /// No paper with the given identifier exists in the library.
  #[error("No paper with identifier \"{0}\" in the library.")]
  PaperNotInLibrary(String),

  /// Configuration problem, such as an undeterminable home directory.
  #[error("{0}")]
  Config(String),
}

impl From<tempfile::PersistError> for BibshelfError {
  fn from(e: tempfile::PersistError) -> Self { Self::Path(e.error) }
}
