//! Read-only lookups over the library.
//!
//! Results are cloned out of the library in insertion order.
//!
//! ```no_run
//! # use bibshelf::{library::{Library, Query}, prelude::*};
//! # fn example() -> Result<(), BibshelfError> {
//! let mut library = Library::open("bibliography.json")?;
//! let everything = Query::all().execute(&mut library)?;
//! let tagged = Query::by_keyword("Machine Learning").execute(&mut library)?;
//! let residual = Query::text("residual").execute(&mut library)?;
//! # Ok(())
//! # }
//! ```

use super::*;

/// What a [`Query`] matches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryCriteria {
  /// Every paper
  All,
  /// The paper with this exact identifier
  Identifier(String),
  /// Papers carrying this keyword, ignoring case
  Keyword(String),
  /// Papers whose title, abstract or an author contains this text, ignoring case
  Text(String),
}

/// Instruction selecting papers from the library.
#[derive(Debug, Clone)]
pub struct Query {
  /// Selection rule
  criteria: QueryCriteria,
}

impl Query {
  /// Creates a query from explicit criteria.
  pub fn new(criteria: QueryCriteria) -> Self { Self { criteria } }

  /// Every paper.
  pub fn all() -> Self { Self::new(QueryCriteria::All) }

  /// At most one paper, the one with `identifier`.
  pub fn by_identifier(identifier: impl Into<String>) -> Self {
    Self::new(QueryCriteria::Identifier(identifier.into()))
  }

  /// Papers tagged with `keyword`, ignoring case.
  pub fn by_keyword(keyword: impl Into<String>) -> Self {
    Self::new(QueryCriteria::Keyword(keyword.into()))
  }

  /// Papers mentioning `text` in the title, abstract or author names, ignoring case.
  pub fn text(text: impl Into<String>) -> Self { Self::new(QueryCriteria::Text(text.into())) }

  /// Whether `paper` satisfies the criteria.
  fn matches(&self, paper: &Paper) -> bool {
    match &self.criteria {
      QueryCriteria::All => true,
      QueryCriteria::Identifier(identifier) => paper.identifier == *identifier,
      QueryCriteria::Keyword(keyword) => paper.has_keyword_ignore_case(keyword),
      QueryCriteria::Text(text) => {
        let text = text.to_lowercase();
        paper.title.to_lowercase().contains(&text)
          || paper.abstract_text.to_lowercase().contains(&text)
          || paper.authors.iter().any(|author| author.to_lowercase().contains(&text))
      },
    }
  }
}

impl LibraryInstruction for Query {
  type Output = Vec<Paper>;

  fn execute(&self, library: &mut Library) -> Result<Self::Output> {
    let papers: Vec<Paper> =
      library.papers().iter().filter(|paper| self.matches(paper)).cloned().collect();
    trace!("{:?} matched {} papers", self.criteria, papers.len());
    Ok(papers)
  }
}
