//! The paper collection and the instructions that operate on it.
//!
//! A [`Library`] owns the ordered list of papers together with the path of its JSON file.
//! It is passed explicitly to every operation; there is no global collection. Reads go
//! through [`Query`], while [`Add`], [`Edit`] and [`Remove`] mutate the collection and
//! rewrite the file in full before returning.
//!
//! # Examples
//!
//! ```no_run
//! use bibshelf::{
//!   library::{Add, Edit, Library, Query, Remove},
//!   paper::Paper,
//!   prelude::*,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut library = Library::open("bibliography.json")?;
//!
//! Add::paper(Paper::new("1512.05435").with_title("Deep Residual Learning")).execute(&mut library)?;
//! Edit::paper("1512.05435").add_keyword("vision").execute(&mut library)?;
//!
//! for (keyword, count) in library.keyword_counts() {
//!   println!("{keyword} ({count})");
//! }
//!
//! let vision = Query::by_keyword("VISION").execute(&mut library)?;
//! assert_eq!(vision.len(), 1);
//!
//! Remove::by_identifier("1512.05435").execute(&mut library)?;
//! # Ok(())
//! # }
//! ```

use std::collections::BTreeMap;

use super::*;

pub mod instruction;

pub use self::instruction::{
  add::Add,
  edit::{Change, Edit},
  query::Query,
  remove::{Remove, RemoveOptions},
  LibraryInstruction,
};

/// An ordered collection of papers backed by a JSON file.
#[derive(Debug, Clone)]
pub struct Library {
  /// Location of the library file
  path:   PathBuf,
  /// Papers in insertion order
  papers: Vec<Paper>,
}

impl Library {
  /// Opens the library stored at `path`.
  ///
  /// A missing file gives an empty library; the file is only created by the first save.
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref().to_path_buf();
    let papers = store::load(&path)?;
    info!("Opened library at {} with {} papers", path.display(), papers.len());
    Ok(Self { path, papers })
  }

  /// Writes the whole collection back to its file.
  pub fn save(&self) -> Result<()> { store::save(&self.papers, &self.path) }

  /// The library file.
  pub fn path(&self) -> &Path { &self.path }

  /// All papers in insertion order.
  pub fn papers(&self) -> &[Paper] { &self.papers }

  /// The paper with `identifier`, if any.
  pub fn get(&self, identifier: &str) -> Option<&Paper> {
    self.papers.iter().find(|paper| paper.identifier == identifier)
  }

  /// Whether a paper with `identifier` is present.
  pub fn contains(&self, identifier: &str) -> bool { self.get(identifier).is_some() }

  /// Number of papers.
  pub fn len(&self) -> usize { self.papers.len() }

  /// Whether the library holds no papers.
  pub fn is_empty(&self) -> bool { self.papers.is_empty() }

  /// Lowercased keywords with the number of papers tagged with each, sorted by keyword.
  ///
  /// Keywords differing only in case are merged, and a paper counts once per merged
  /// keyword.
  pub fn keyword_counts(&self) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for paper in &self.papers {
      let mut seen: Vec<String> = paper.keywords.iter().map(|k| k.to_lowercase()).collect();
      seen.sort();
      seen.dedup();
      for keyword in seen {
        *counts.entry(keyword).or_default() += 1;
      }
    }
    counts.into_iter().collect()
  }

  /// Index of the paper with `identifier`.
  fn position(&self, identifier: &str) -> Option<usize> {
    self.papers.iter().position(|paper| paper.identifier == identifier)
  }

  /// Persists `papers` and only then makes them the in-memory collection.
  ///
  /// On a failed write the library keeps its previous papers, matching the file.
  fn commit(&mut self, papers: Vec<Paper>) -> Result<()> {
    store::save(&papers, &self.path)?;
    self.papers = papers;
    Ok(())
  }
}
