//! Terminal prompts and styled output.

use dialoguer::Confirm;

use super::*;

/// Prefix for information messages
pub static INFO_PREFIX: &str = "ℹ ";
/// Prefix for success messages
pub static SUCCESS_PREFIX: &str = "✓ ";
/// Prefix for warning messages
pub static WARNING_PREFIX: &str = "! ";
/// Prefix for error messages
pub static ERROR_PREFIX: &str = "✗ ";
/// Prefix for user prompts
pub static PROMPT_PREFIX: &str = "❯ ";
/// Tree branch for a detail line
pub static ITEM_PREFIX: &str = "├─";
/// Tree branch for the last detail line
pub static LAST_ITEM_PREFIX: &str = "└─";
/// Indentation below the last detail line
pub static CONTINUE_PREFIX: &str = "   ";
/// Marker for list entries
pub static BULLET: &str = "•";

/// Something the CLI wants to show the user.
#[derive(Debug)]
pub enum ResponseContent<'a> {
  /// Full details of one paper
  Paper(&'a Paper),
  /// One line per paper
  Papers(&'a [Paper]),
  /// Keywords with the number of papers carrying them
  Keywords(&'a [(String, usize)]),
  /// BibTeX entries, printed without decoration
  Bibtex(&'a str),
  /// A completed action
  Success(&'a str),
  /// A neutral notice
  Info(&'a str),
  /// Something was skipped
  Warning(&'a str),
  /// A failure
  Error(CliError),
}

/// How commands talk to the user.
pub trait UserInteraction {
  /// Asks a yes/no question.
  fn confirm(&self, message: &str) -> Result<bool>;

  /// Shows `content`.
  fn reply(&self, content: ResponseContent) -> Result<()>;
}

impl UserInteraction for Cli {
  fn confirm(&self, message: &str) -> Result<bool> {
    if self.accept_defaults {
      return Ok(true);
    }
    let prompt = format!("{}{}", style(PROMPT_PREFIX).cyan(), message);
    Ok(Confirm::new().with_prompt(prompt).default(false).interact()?)
  }

  fn reply(&self, content: ResponseContent) -> Result<()> {
    match content {
      ResponseContent::Paper(paper) => print_paper(paper),
      ResponseContent::Papers(papers) =>
        if papers.is_empty() {
          println!("{}No papers found", style(INFO_PREFIX).blue());
        } else {
          for paper in papers {
            println!(
              "{} {} | {}",
              style(BULLET).dim(),
              style(&paper.identifier).yellow(),
              style(&paper.title).white().bold()
            );
          }
        },
      ResponseContent::Keywords(counts) =>
        if counts.is_empty() {
          println!("{}No keywords yet", style(INFO_PREFIX).blue());
        } else {
          for (keyword, count) in counts {
            println!("{} {} ({})", style(BULLET).dim(), style(keyword).cyan(), count);
          }
        },
      ResponseContent::Bibtex(bibtex) => println!("{bibtex}"),
      ResponseContent::Success(message) =>
        println!("{}{}", style(SUCCESS_PREFIX).green(), style(message).green()),
      ResponseContent::Info(message) => println!("{}{}", style(INFO_PREFIX).blue(), message),
      ResponseContent::Warning(message) =>
        println!("{}{}", style(WARNING_PREFIX).yellow(), style(message).yellow()),
      ResponseContent::Error(error) =>
        eprintln!("{}{}", style(ERROR_PREFIX).red(), style(error).red()),
    }
    Ok(())
  }
}

/// Prints one detail line, dimming display placeholders.
fn print_field(prefix: &str, label: &str, value: DisplayValue) {
  let value = if value.is_fallback() { style(value).dim() } else { style(value).white() };
  println!("{} {}: {}", style(prefix).dim(), style(label).cyan(), value);
}

/// Prints the full detail view of a paper.
fn print_paper(paper: &Paper) {
  println!("{}", style(&paper.title).white().bold());
  println!(
    "{} {}: {}",
    style(ITEM_PREFIX).dim(),
    style("ID").cyan(),
    style(&paper.identifier).yellow()
  );
  println!("{} {}: {}", style(ITEM_PREFIX).dim(), style("URL").cyan(), paper.url);
  print_field(ITEM_PREFIX, "Authors", paper.display_authors());
  print_field(ITEM_PREFIX, "Year", paper.display_year());
  print_field(ITEM_PREFIX, "Journal", paper.display_journal());
  print_field(ITEM_PREFIX, "DOI", paper.display_doi());

  let keywords = if paper.keywords.is_empty() {
    style("none".to_string()).dim()
  } else {
    style(paper.keywords.join(", ")).white()
  };
  println!("{} {}: {}", style(ITEM_PREFIX).dim(), style("Keywords").cyan(), keywords);

  println!("{} {}:", style(LAST_ITEM_PREFIX).dim(), style("Abstract").cyan());
  if paper.abstract_text.is_empty() {
    println!("{}{}", CONTINUE_PREFIX, style("No abstract").dim());
  } else {
    println!("{}{}", CONTINUE_PREFIX, paper.abstract_text);
  }
}
