//! Module for listing papers.

use super::*;

/// Arguments for [`Commands::List`]
#[derive(Args, Clone)]
pub struct ListArgs {
  /// Only list papers carrying this keyword, ignoring case
  #[arg(long, short)]
  pub keyword: Option<String>,
}

/// Function for the [`Commands::List`] in the CLI.
pub fn list<I: UserInteraction>(
  interaction: &I,
  library: &mut Library,
  args: ListArgs,
) -> Result<()> {
  let query = match args.keyword {
    Some(keyword) => Query::by_keyword(keyword),
    None => Query::all(),
  };
  let papers = query.execute(library)?;
  interaction.reply(ResponseContent::Papers(&papers))
}
