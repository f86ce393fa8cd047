//! Module for showing a single paper.

use super::*;

/// Arguments for [`Commands::Show`]
#[derive(Args, Clone)]
pub struct ShowArgs {
  /// Identifier or abstract URL of the paper
  pub identifier: String,
}

/// Function for the [`Commands::Show`] in the CLI.
pub fn show<I: UserInteraction>(
  interaction: &I,
  library: &mut Library,
  args: ShowArgs,
) -> Result<()> {
  let identifier = parse_identifier(&args.identifier)?;
  let papers = Query::by_identifier(&identifier).execute(library)?;
  match papers.first() {
    Some(paper) => interaction.reply(ResponseContent::Paper(paper)),
    None => Err(BibshelfError::PaperNotInLibrary(identifier).into()),
  }
}
