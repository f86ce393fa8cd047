//! Module for removing papers from the library.

use super::*;

/// Arguments for [`Commands::Remove`]
#[derive(Args, Clone)]
pub struct RemoveArgs {
  /// Identifier or abstract URL of the paper
  pub identifier: String,
}

/// Function for the [`Commands::Remove`] in the CLI.
///
/// Asks for confirmation, naming the paper's title, before anything is removed.
pub fn remove<I: UserInteraction>(
  interaction: &I,
  library: &mut Library,
  args: RemoveArgs,
) -> Result<()> {
  let identifier = parse_identifier(&args.identifier)?;

  let candidates = Remove::by_identifier(identifier.as_str()).dry_run().execute(library)?;
  let Some(paper) = candidates.first() else {
    return Err(BibshelfError::PaperNotInLibrary(identifier).into());
  };

  if !interaction.confirm(&format!("Are you sure you want to delete:\n\n{}\n", paper.title))? {
    interaction.reply(ResponseContent::Info("Nothing removed"))?;
    return Ok(());
  }

  Remove::by_identifier(identifier.as_str()).execute(library)?;
  interaction.reply(ResponseContent::Success(&format!("Removed paper {identifier}")))
}
