//! Subcommands of the CLI.

use super::*;

pub mod add;
pub mod edit;
pub mod export;
pub mod init;
pub mod keywords;
pub mod list;
pub mod remove;
pub mod search;
pub mod show;
pub mod tag;

pub use add::{add, AddArgs};
pub use edit::{edit, EditArgs};
pub use export::{export, ExportArgs};
pub use init::{init, InitArgs};
pub use keywords::keywords;
pub use list::{list, ListArgs};
pub use remove::{remove, RemoveArgs};
pub use search::{search, SearchArgs};
pub use show::{show, ShowArgs};
pub use tag::{tag, untag, TagArgs};

/// Available commands for the CLI
#[derive(Subcommand, Clone)]
pub enum Commands {
  /// Write a configuration file pointing at a library
  Init(InitArgs),

  /// Fetch a paper from arXiv and add it to the library
  Add(AddArgs),

  /// List papers, optionally only those with a keyword
  List(ListArgs),

  /// List keywords with the number of papers carrying each
  Keywords,

  /// Find papers whose title, abstract or authors contain some text
  Search(SearchArgs),

  /// Show the details of one paper
  Show(ShowArgs),

  /// Change the stored fields of a paper
  Edit(EditArgs),

  /// Add keywords to a paper
  Tag(TagArgs),

  /// Remove keywords from a paper
  Untag(TagArgs),

  /// Remove a paper from the library after confirmation
  Remove(RemoveArgs),

  /// Print or write BibTeX entries
  Export(ExportArgs),
}

/// Reads an identifier argument the way `add` does, so `arXiv:` prefixes and abstract URLs
/// name the stored paper.
fn parse_identifier(input: &str) -> Result<String> {
  sanitize_identifier(input).ok_or_else(|| BibshelfError::InvalidIdentifier.into())
}
