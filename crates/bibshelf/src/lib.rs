//! Personal paper shelf: arXiv metadata retrieval, keyword tagging and JSON storage.
//!
//! `bibshelf` keeps a small library of academic paper references, providing:
//!
//! - Metadata retrieval from the arXiv Atom API
//! - Keyword tagging with case-insensitive filtering
//! - BibTeX export
//! - Flat-file JSON persistence, rewritten in full after every change
//!
//! # Getting Started
//!
//! ```no_run
//! use bibshelf::{
//!   library::{Add, Library, Query},
//!   paper::Paper,
//!   prelude::*,
//!   retriever::Retriever,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!   // Open (or start) a library file
//!   let mut library = Library::open("bibliography.json")?;
//!
//!   // Fetch a paper from arXiv
//!   let mut paper = Paper::new("1512.05435");
//!   paper.fetch_metadata(&Retriever::new()).await?;
//!   paper.add_keyword("machine learning");
//!
//!   // Add it; the library file is rewritten immediately
//!   Add::paper(paper).execute(&mut library)?;
//!
//!   // Filter by keyword, ignoring case
//!   let papers = Query::by_keyword("Machine Learning").execute(&mut library)?;
//!   println!("{}", papers[0].to_bibtex());
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`paper`]: The paper record, its display accessors and BibTeX rendering
//! - [`retriever`]: arXiv feed lookup and parsing
//! - [`store`]: JSON load/save with newline normalization
//! - [`library`]: The owned paper collection and its instructions
//! - [`config`]: TOML configuration and default locations
//! - [`prelude`]: Common traits and types for ergonomic imports

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  borrow::Cow,
  fmt::Display,
  path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info, trace, warn};
#[cfg(test)]
use {tempfile::tempdir, tracing_test::traced_test};

pub mod config;
pub mod error;
pub mod library;
pub mod paper;
pub mod retriever;
pub mod store;

use crate::{config::*, error::*, paper::Paper, retriever::Retriever};

/// Common traits and types for ergonomic imports.
///
/// ```no_run
/// use bibshelf::{
///   library::{Library, Remove},
///   prelude::*,
/// };
///
/// fn example() -> Result<(), BibshelfError> {
///   let mut library = Library::open("bibliography.json")?;
///   Remove::by_identifier("1512.05435").execute(&mut library)?;
///   Ok(())
/// }
/// ```
pub mod prelude {
  pub use crate::{error::BibshelfError, library::LibraryInstruction};
}
