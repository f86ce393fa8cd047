//! Module for exporting BibTeX.

use super::*;

/// Arguments for [`Commands::Export`]
#[derive(Args, Clone)]
pub struct ExportArgs {
  /// Papers to export; all papers when none are given
  pub identifiers: Vec<String>,

  /// Only export papers carrying this keyword, ignoring case
  #[arg(long, short)]
  pub keyword: Option<String>,

  /// Write the entries to this file instead of printing them
  #[arg(long, short)]
  pub output: Option<PathBuf>,
}

/// Function for the [`Commands::Export`] in the CLI.
///
/// Entries keep library order and are separated by a blank line.
pub fn export<I: UserInteraction>(
  interaction: &I,
  library: &mut Library,
  args: ExportArgs,
) -> Result<()> {
  let ExportArgs { identifiers, keyword, output } = args;
  let identifiers = identifiers
    .iter()
    .map(|identifier| parse_identifier(identifier))
    .collect::<Result<Vec<_>>>()?;

  for identifier in &identifiers {
    if !library.contains(identifier) {
      return Err(BibshelfError::PaperNotInLibrary(identifier.clone()).into());
    }
  }

  let query = match keyword {
    Some(keyword) => Query::by_keyword(keyword),
    None => Query::all(),
  };
  let papers: Vec<Paper> = query
    .execute(library)?
    .into_iter()
    .filter(|paper| identifiers.is_empty() || identifiers.contains(&paper.identifier))
    .collect();

  if papers.is_empty() {
    return interaction.reply(ResponseContent::Warning("No papers to export"));
  }

  let bibtex = papers.iter().map(Paper::to_bibtex).collect::<Vec<_>>().join("\n\n");
  match output {
    Some(path) => {
      std::fs::write(&path, format!("{bibtex}\n"))?;
      interaction.reply(ResponseContent::Success(&format!(
        "Exported {} BibTeX entries to {}",
        papers.len(),
        path.display()
      )))
    },
    None => interaction.reply(ResponseContent::Bibtex(&bibtex)),
  }
}
