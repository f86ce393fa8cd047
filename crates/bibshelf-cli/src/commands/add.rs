//! Module for adding papers fetched from arXiv.

use super::*;

/// Arguments for [`Commands::Add`]
#[derive(Args, Clone)]
pub struct AddArgs {
  /// arXiv identifier or abstract URL, e.g. "1512.05435"
  pub identifier: String,

  /// Comma separated keywords to tag the paper with
  #[arg(long, short)]
  pub keywords: Option<String>,
}

/// Function for the [`Commands::Add`] in the CLI.
///
/// Blank identifiers are ignored. A paper that is already in the library is reported and left
/// alone. A paper arXiv does not know is still added, with empty metadata.
pub async fn add<I: UserInteraction>(
  interaction: &I,
  library: &mut Library,
  retriever: &Retriever,
  args: AddArgs,
) -> Result<()> {
  let AddArgs { identifier, keywords } = args;

  let Some(identifier) = sanitize_identifier(&identifier) else {
    debug!("Ignoring blank identifier");
    return Ok(());
  };

  if library.contains(&identifier) {
    interaction.reply(ResponseContent::Warning(&format!(
      "A paper with arXiv ID {identifier} is already in your library"
    )))?;
    return Ok(());
  }

  interaction.reply(ResponseContent::Info(&format!("Fetching paper: {identifier}")))?;
  let mut paper = Paper::new(identifier.as_str());
  if !paper.fetch_metadata(retriever).await? {
    let notice = format!("No entry found for the given arXiv ID: {identifier}");
    interaction.reply(ResponseContent::Info(&notice))?;
  }

  for keyword in keywords.iter().flat_map(|k| k.split(',')) {
    paper.add_keyword(keyword.trim());
  }

  match Add::paper(paper).execute(library) {
    Ok(paper) => {
      interaction.reply(ResponseContent::Paper(&paper))?;
      interaction.reply(ResponseContent::Success("Paper added successfully"))
    },
    Err(BibshelfError::DuplicatePaper(id)) => interaction.reply(ResponseContent::Warning(
      &format!("A paper with arXiv ID {id} is already in your library"),
    )),
    Err(e) => Err(e.into()),
  }
}
