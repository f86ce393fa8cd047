//! Removing papers from the library.
//!
//! ```no_run
//! # use bibshelf::{library::{Library, Remove}, prelude::*};
//! # fn example() -> Result<(), BibshelfError> {
//! let mut library = Library::open("bibliography.json")?;
//!
//! // See what would go first
//! let doomed = Remove::by_identifier("1512.05435").dry_run().execute(&mut library)?;
//! println!("Would remove {} papers", doomed.len());
//!
//! Remove::by_identifier("1512.05435").execute(&mut library)?;
//! # Ok(())
//! # }
//! ```

use super::*;

/// Options for [`Remove`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveOptions {
  /// Report the papers that would be removed without touching the library.
  pub dry_run: bool,
}

/// Instruction removing a paper from the library.
///
/// Returns the removed papers, which is empty when nothing matched. The library file is
/// only rewritten when something was actually removed, and the papers stay in memory if
/// that write fails.
#[derive(Debug, Clone)]
pub struct Remove {
  /// Which paper to remove
  identifier: String,
  /// Behaviour switches
  options:    RemoveOptions,
}

impl Remove {
  /// Removes the paper with `identifier`.
  pub fn by_identifier(identifier: impl Into<String>) -> Self {
    Self { identifier: identifier.into(), options: RemoveOptions::default() }
  }

  /// Only report what would be removed.
  pub fn dry_run(mut self) -> Self {
    self.options.dry_run = true;
    self
  }
}

impl LibraryInstruction for Remove {
  type Output = Vec<Paper>;

  fn execute(&self, library: &mut Library) -> Result<Self::Output> {
    if self.options.dry_run {
      return Ok(library.get(&self.identifier).cloned().into_iter().collect());
    }

    let (removed, kept): (Vec<Paper>, Vec<Paper>) =
      library.papers.iter().cloned().partition(|paper| paper.identifier == self.identifier);

    if removed.is_empty() {
      debug!("No paper {} to remove", self.identifier);
      return Ok(removed);
    }

    library.commit(kept)?;
    info!("Removed paper {}", self.identifier);
    Ok(removed)
  }
}
