//! Module for searching papers by text.

use super::*;

/// Arguments for [`Commands::Search`]
#[derive(Args, Clone)]
pub struct SearchArgs {
  /// Text to look for in titles, abstracts and author names, ignoring case
  pub query: String,
}

/// Function for the [`Commands::Search`] in the CLI.
pub fn search<I: UserInteraction>(
  interaction: &I,
  library: &mut Library,
  args: SearchArgs,
) -> Result<()> {
  let papers = Query::text(&args.query).execute(library)?;
  interaction.reply(ResponseContent::Papers(&papers))
}
