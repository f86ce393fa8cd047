//! Module for editing the stored fields of a paper.

use super::*;

/// Arguments for [`Commands::Edit`]
///
/// Only the fields given are changed. Passing an empty string clears a field.
#[derive(Args, Clone)]
pub struct EditArgs {
  /// Identifier or abstract URL of the paper
  pub identifier: String,

  /// New title
  #[arg(long)]
  pub title: Option<String>,

  /// New authors, comma separated
  #[arg(long)]
  pub authors: Option<String>,

  /// New keywords, comma separated, replacing all current ones
  #[arg(long)]
  pub keywords: Option<String>,

  /// New journal reference
  #[arg(long)]
  pub journal: Option<String>,

  /// New DOI
  #[arg(long)]
  pub doi: Option<String>,

  /// New publication year, four digits
  #[arg(long)]
  pub year: Option<String>,

  /// New abstract
  #[arg(long = "abstract")]
  pub abstract_text: Option<String>,
}

/// Function for the [`Commands::Edit`] in the CLI.
pub fn edit<I: UserInteraction>(
  interaction: &I,
  library: &mut Library,
  args: EditArgs,
) -> Result<()> {
  let EditArgs { identifier, title, authors, keywords, journal, doi, year, abstract_text } = args;

  let identifier = parse_identifier(&identifier)?;
  let mut edit = Edit::paper(identifier.as_str());
  if let Some(title) = title {
    edit = edit.title(title);
  }
  if let Some(authors) = authors {
    edit = edit.authors_from_str(&authors);
  }
  if let Some(keywords) = keywords {
    edit = edit.keywords_from_str(&keywords);
  }
  if let Some(journal) = journal {
    edit = edit.journal(journal);
  }
  if let Some(doi) = doi {
    edit = edit.doi(doi);
  }
  if let Some(year) = year {
    edit = edit.year(year);
  }
  if let Some(abstract_text) = abstract_text {
    edit = edit.abstract_text(abstract_text.trim());
  }

  let paper = edit.execute(library)?;
  interaction.reply(ResponseContent::Paper(&paper))?;
  interaction.reply(ResponseContent::Success(&format!("Updated paper {identifier}")))
}
