//! Composable operations on a [`Library`].

use super::*;

pub mod add;
pub mod edit;
pub mod query;
pub mod remove;

/// An operation that can be executed against a [`Library`].
///
/// Instructions that change the collection persist it before returning, so a successful
/// `execute` always leaves the library file in sync with memory.
pub trait LibraryInstruction {
  /// What the instruction yields on success.
  type Output;

  /// Runs the instruction.
  fn execute(&self, library: &mut Library) -> Result<Self::Output>;
}
