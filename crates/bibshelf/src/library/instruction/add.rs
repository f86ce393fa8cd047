//! Adding papers to the library.

use super::*;

/// Instruction appending a paper to the library.
///
/// The identifier is trimmed first. Blank identifiers and identifiers already present are
/// rejected before anything changes, and a failed write leaves the library untouched.
///
/// ```no_run
/// # use bibshelf::{library::{Add, Library}, paper::Paper, prelude::*};
/// # fn example() -> Result<(), BibshelfError> {
/// let mut library = Library::open("bibliography.json")?;
/// Add::paper(Paper::new("1512.05435")).execute(&mut library)?;
/// # Ok(())
/// # }
/// ```
pub struct Add {
  /// The paper to insert
  paper: Paper,
}

impl Add {
  /// Creates an instruction adding `paper`.
  pub fn paper(paper: Paper) -> Self { Self { paper } }
}

impl LibraryInstruction for Add {
  type Output = Paper;

  fn execute(&self, library: &mut Library) -> Result<Self::Output> {
    let identifier = self.paper.identifier.trim();
    if identifier.is_empty() {
      return Err(BibshelfError::InvalidIdentifier);
    }
    if library.contains(identifier) {
      return Err(BibshelfError::DuplicatePaper(identifier.to_string()));
    }

    let paper = Paper { identifier: identifier.to_string(), ..self.paper.clone() };
    let mut papers = library.papers.clone();
    papers.push(paper.clone());
    library.commit(papers)?;
    info!("Added paper {}", paper.identifier);
    Ok(paper)
  }
}
