//! Editing papers already in the library.
//!
//! An [`Edit`] collects any number of [`Change`]s for one paper and applies them in order,
//! then saves once. Nothing changes in memory unless the save succeeds, and an invalid year
//! rejects the whole edit.
//!
//! ```no_run
//! # use bibshelf::{library::{Edit, Library}, prelude::*};
//! # fn example() -> Result<(), BibshelfError> {
//! let mut library = Library::open("bibliography.json")?;
//! let paper = Edit::paper("1512.05435")
//!   .title("Deep Residual Learning for Image Recognition")
//!   .authors_from_str("Kaiming He, Xiangyu Zhang")
//!   .add_keyword("vision")
//!   .remove_keyword("todo")
//!   .execute(&mut library)?;
//! # Ok(())
//! # }
//! ```

use super::*;

/// A single modification of a paper.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
  /// Replace the title
  Title(String),
  /// Replace the author list
  Authors(Vec<String>),
  /// Replace all keywords; duplicates and blanks are dropped
  Keywords(Vec<String>),
  /// Add one keyword if not present
  AddKeyword(String),
  /// Remove one keyword if present
  RemoveKeyword(String),
  /// Replace the journal reference
  Journal(String),
  /// Replace the DOI
  Doi(String),
  /// Replace the year; empty or four digits
  Year(String),
  /// Replace the abstract
  Abstract(String),
}

impl Change {
  /// Rejects values the paper cannot hold.
  fn validate(&self) -> Result<()> {
    match self {
      Change::Year(year) if !is_valid_year(year) => Err(BibshelfError::InvalidYear(year.clone())),
      _ => Ok(()),
    }
  }

  /// Applies the change to `paper`.
  fn apply(&self, paper: &mut Paper) {
    match self {
      Change::Title(title) => paper.title = title.clone(),
      Change::Authors(authors) => paper.authors = authors.clone(),
      Change::Keywords(keywords) => {
        paper.keywords.clear();
        for keyword in keywords {
          paper.add_keyword(keyword.trim());
        }
      },
      Change::AddKeyword(keyword) => paper.add_keyword(keyword.clone()),
      Change::RemoveKeyword(keyword) => paper.remove_keyword(keyword),
      Change::Journal(journal) => paper.journal = journal.clone(),
      Change::Doi(doi) => paper.doi = doi.clone(),
      Change::Year(year) => paper.year = year.clone(),
      Change::Abstract(abstract_text) => paper.abstract_text = abstract_text.clone(),
    }
  }
}

/// Instruction modifying one paper identified by its identifier.
#[derive(Debug, Clone)]
pub struct Edit {
  /// Which paper to modify
  identifier: String,
  /// Changes, applied in order
  changes:    Vec<Change>,
}

impl Edit {
  /// Starts an edit of the paper with `identifier`.
  pub fn paper(identifier: impl Into<String>) -> Self {
    Self { identifier: identifier.into(), changes: Vec::new() }
  }

  /// Queues an arbitrary change.
  pub fn change(mut self, change: Change) -> Self {
    self.changes.push(change);
    self
  }

  /// Replaces the title.
  pub fn title(self, title: impl Into<String>) -> Self { self.change(Change::Title(title.into())) }

  /// Replaces the author list.
  pub fn authors(self, authors: Vec<String>) -> Self { self.change(Change::Authors(authors)) }

  /// Replaces the author list from a comma separated string.
  pub fn authors_from_str(self, authors: &str) -> Self {
    self.authors(store::split_authors(authors))
  }

  /// Replaces all keywords.
  pub fn keywords(self, keywords: Vec<String>) -> Self { self.change(Change::Keywords(keywords)) }

  /// Replaces all keywords from a comma separated string.
  pub fn keywords_from_str(self, keywords: &str) -> Self {
    self.keywords(keywords.split(',').map(String::from).collect())
  }

  /// Adds a keyword.
  pub fn add_keyword(self, keyword: impl Into<String>) -> Self {
    self.change(Change::AddKeyword(keyword.into()))
  }

  /// Removes a keyword.
  pub fn remove_keyword(self, keyword: impl Into<String>) -> Self {
    self.change(Change::RemoveKeyword(keyword.into()))
  }

  /// Replaces the journal reference.
  pub fn journal(self, journal: impl Into<String>) -> Self {
    self.change(Change::Journal(journal.into()))
  }

  /// Replaces the DOI.
  pub fn doi(self, doi: impl Into<String>) -> Self { self.change(Change::Doi(doi.into())) }

  /// Replaces the year.
  pub fn year(self, year: impl Into<String>) -> Self { self.change(Change::Year(year.into())) }

  /// Replaces the abstract.
  pub fn abstract_text(self, abstract_text: impl Into<String>) -> Self {
    self.change(Change::Abstract(abstract_text.into()))
  }
}

impl LibraryInstruction for Edit {
  type Output = Paper;

  fn execute(&self, library: &mut Library) -> Result<Self::Output> {
    let index = library
      .position(&self.identifier)
      .ok_or_else(|| BibshelfError::PaperNotInLibrary(self.identifier.clone()))?;
    self.changes.iter().try_for_each(Change::validate)?;

    let mut paper = library.papers[index].clone();
    for change in &self.changes {
      trace!("Applying {change:?} to {}", self.identifier);
      change.apply(&mut paper);
    }

    let mut papers = library.papers.clone();
    papers[index] = paper.clone();
    library.commit(papers)?;
    debug!("Edited paper {}", self.identifier);
    Ok(paper)
  }
}

/// Whether `year` is empty or exactly four ASCII digits.
fn is_valid_year(year: &str) -> bool {
  year.is_empty() || (year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()))
}
