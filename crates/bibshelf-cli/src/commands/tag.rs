//! Module for adding and removing keywords.

use super::*;

/// Arguments for [`Commands::Tag`] and [`Commands::Untag`]
#[derive(Args, Clone)]
pub struct TagArgs {
  /// Identifier or abstract URL of the paper
  pub identifier: String,

  /// Keywords to add or remove
  #[arg(required = true)]
  pub keywords: Vec<String>,
}

/// Function for the [`Commands::Tag`] in the CLI.
///
/// Blank keywords and keywords the paper already has are skipped.
pub fn tag<I: UserInteraction>(
  interaction: &I,
  library: &mut Library,
  args: TagArgs,
) -> Result<()> {
  let TagArgs { identifier, keywords } = args;
  let identifier = parse_identifier(&identifier)?;
  let edit = keywords
    .iter()
    .fold(Edit::paper(identifier.as_str()), |edit, keyword| edit.add_keyword(keyword.trim()));
  let paper = edit.execute(library)?;
  interaction.reply(ResponseContent::Success(&format!(
    "Keywords of {identifier}: {}",
    paper.keywords.join(", ")
  )))
}

/// Function for the [`Commands::Untag`] in the CLI.
pub fn untag<I: UserInteraction>(
  interaction: &I,
  library: &mut Library,
  args: TagArgs,
) -> Result<()> {
  let TagArgs { identifier, keywords } = args;
  let identifier = parse_identifier(&identifier)?;
  let edit = keywords
    .iter()
    .fold(Edit::paper(identifier.as_str()), |edit, keyword| edit.remove_keyword(keyword.trim()));
  let paper = edit.execute(library)?;
  interaction.reply(ResponseContent::Success(&format!(
    "Keywords of {identifier}: {}",
    paper.keywords.join(", ")
  )))
}
