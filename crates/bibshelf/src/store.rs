//! JSON persistence for the paper collection.
//!
//! The collection is stored as one JSON array of objects with the keys `arxiv_id`, `title`,
//! `url`, `keywords`, `abs`, `authors`, `journal`, `doi` and `year`, indented with two spaces.
//! Every save rewrites the whole file.
//!
//! Titles and abstracts are normalized on both save and load: the `"\n  "` continuation that
//! arXiv puts in wrapped titles and every newline in an abstract become a single space. The
//! normalization is lossy, so `load(save(papers))` equals `papers` apart from those newlines.
//!
//! The other exception is the display placeholders. A field holding exactly "No DOI
//! available", "No journal reference", "No year available" or the sole author "No authors
//! listed" loads back empty, since older files stored the placeholder text in place of a
//! missing value.
//!
//! # Examples
//!
//! ```no_run
//! use bibshelf::{paper::Paper, store};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let papers = vec![Paper::new("1512.05435").with_title("Deep\n  Residual Learning")];
//! store::save(&papers, "bibliography.json")?;
//!
//! let loaded = store::load("bibliography.json")?;
//! assert_eq!(loaded[0].title, "Deep Residual Learning");
//! # Ok(())
//! # }
//! ```

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;
use crate::paper::{NO_AUTHORS, NO_DOI, NO_JOURNAL, NO_YEAR};

/// Title line continuation collapsed to a single space.
const TITLE_CONTINUATION: &str = "\n  ";

/// Writes `papers` to `path` as a JSON array, replacing any previous content.
///
/// The data is written to a temporary file next to `path` which is then renamed over it, so
/// readers never observe a half-written library. Missing parent directories are created.
pub fn save(papers: &[Paper], path: impl AsRef<Path>) -> Result<()> {
  let path = path.as_ref();
  let dir = match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };
  std::fs::create_dir_all(dir)?;

  let normalized: Vec<Paper> = papers.iter().cloned().map(normalize).collect();

  let mut file = NamedTempFile::new_in(dir)?;
  serde_json::to_writer_pretty(&mut file, &normalized)?;
  file.flush()?;
  file.persist(path)?;

  debug!("Saved {} papers to {}", normalized.len(), path.display());
  Ok(())
}

/// Reads the papers stored at `path`.
///
/// A missing file is an empty collection. Absent fields other than `arxiv_id` default to
/// empty, authors stored as a single comma separated string are split into a list, and
/// placeholder texts written by older tools ("No DOI available" and friends) read back as
/// empty fields. That last rule also applies to a value that was saved as that exact text,
/// so such a field does not survive a round trip.
///
/// # Errors
///
/// - [`BibshelfError::Path`] if the file exists but cannot be read
/// - [`BibshelfError::Json`] if the content is not an array of paper objects
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Paper>> {
  let path = path.as_ref();
  let content = match std::fs::read_to_string(path) {
    Ok(content) => content,
    Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
      debug!("No library at {}, starting empty", path.display());
      return Ok(Vec::new());
    },
    Err(e) => return Err(e.into()),
  };

  let papers: Vec<Paper> = serde_json::from_str(&content)?;
  let papers: Vec<Paper> = papers.into_iter().map(normalize).map(clear_placeholders).collect();
  debug!("Loaded {} papers from {}", papers.len(), path.display());
  Ok(papers)
}

/// Splits a comma separated author string into trimmed, non-empty names.
///
/// ```
/// # use bibshelf::store::split_authors;
/// assert_eq!(split_authors("Alice, Bob ,, "), vec!["Alice", "Bob"]);
/// ```
pub fn split_authors(authors: &str) -> Vec<String> {
  authors.split(',').map(str::trim).filter(|a| !a.is_empty()).map(String::from).collect()
}

/// Collapses wrapped-title continuations into single spaces.
pub fn collapse_title(title: &str) -> String { title.replace(TITLE_CONTINUATION, " ") }

/// Replaces every newline in an abstract with a single space.
pub fn collapse_abstract(abstract_text: &str) -> String { abstract_text.replace('\n', " ") }

/// Author lists as they may appear in a library file.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredAuthors {
  /// The current representation
  List(Vec<String>),
  /// A single comma separated string
  Delimited(String),
}

/// Accepts either a list of names or one comma separated string.
pub(crate) fn deserialize_authors<'de, D>(
  deserializer: D,
) -> core::result::Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>, {
  Ok(match StoredAuthors::deserialize(deserializer)? {
    StoredAuthors::List(authors) => authors,
    StoredAuthors::Delimited(authors) => split_authors(&authors),
  })
}

/// Applies the newline normalization and the keyword invariants.
fn normalize(mut paper: Paper) -> Paper {
  paper.title = collapse_title(&paper.title);
  paper.abstract_text = collapse_abstract(&paper.abstract_text);
  let keywords = std::mem::take(&mut paper.keywords);
  for keyword in keywords {
    paper.add_keyword(keyword);
  }
  paper
}

/// Turns display placeholders persisted by older tools back into empty fields.
fn clear_placeholders(mut paper: Paper) -> Paper {
  if paper.authors.len() == 1 && paper.authors[0] == NO_AUTHORS {
    paper.authors.clear();
  }
  for (field, placeholder) in
    [(&mut paper.journal, NO_JOURNAL), (&mut paper.doi, NO_DOI), (&mut paper.year, NO_YEAR)]
  {
    if *field == placeholder {
      field.clear();
    }
  }
  paper
}
