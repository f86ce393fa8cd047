//! The paper record and its human-facing accessors.
//!
//! A [`Paper`] is created either by hand, from an identifier plus whatever fields the user
//! already knows, or from an identifier alone and then populated from arXiv through
//! [`Paper::fetch_metadata`].
//!
//! Stored fields are always kept verbatim. Placeholders such as "No DOI available" are
//! produced only by the `display_*` accessors and never leak into the library file.
//!
//! # Examples
//!
//! ```
//! use bibshelf::paper::Paper;
//!
//! let mut paper = Paper::new("1512.05435")
//!   .with_title("Deep Residual Learning for Image Recognition")
//!   .with_authors(vec!["Kaiming He".into(), "Xiangyu Zhang".into()]);
//!
//! paper.add_keyword("vision");
//! paper.add_keyword("vision");
//! assert_eq!(paper.keywords, vec!["vision"]);
//!
//! assert_eq!(paper.display_doi().to_string(), "No DOI available");
//! ```

use super::*;

/// Shown by [`Paper::display_authors`] when no authors are stored.
pub const NO_AUTHORS: &str = "No authors listed";
/// Shown by [`Paper::display_journal`] when no journal reference is stored.
pub const NO_JOURNAL: &str = "No journal reference";
/// Shown by [`Paper::display_doi`] when no DOI is stored.
pub const NO_DOI: &str = "No DOI available";
/// Shown by [`Paper::display_year`] when no year is stored.
pub const NO_YEAR: &str = "No year available";

/// One paper reference on the shelf.
///
/// Field order matches the key order of the persisted JSON objects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paper {
  /// Unique key of the paper, an arXiv identifier such as `1512.05435`
  #[serde(rename = "arxiv_id")]
  pub identifier:    String,
  /// The paper's full title
  #[serde(default)]
  pub title:         String,
  /// Abstract page of the paper
  #[serde(default)]
  pub url:           String,
  /// Keyword tags, stored as entered and without exact duplicates
  #[serde(default)]
  pub keywords:      Vec<String>,
  /// Abstract or summary text
  #[serde(rename = "abs", default)]
  pub abstract_text: String,
  /// Author names in publication order
  #[serde(default, deserialize_with = "store::deserialize_authors")]
  pub authors:       Vec<String>,
  /// Journal reference, empty when unknown
  #[serde(default)]
  pub journal:       String,
  /// DOI, empty when unknown
  #[serde(default)]
  pub doi:           String,
  /// Four-digit publication year, empty when unknown
  #[serde(default)]
  pub year:          String,
}

/// Metadata extracted from a single feed entry.
///
/// Produced by the [`Retriever`] and applied to a [`Paper`] as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
  /// Entry title, trimmed at both ends
  pub title:         String,
  /// Entry summary, trimmed at both ends
  pub abstract_text: String,
  /// Abstract page URL derived from the identifier
  pub url:           String,
  /// Author names in feed order
  pub authors:       Vec<String>,
  /// `arxiv:journal_ref`, or empty
  pub journal:       String,
  /// `arxiv:doi`, or empty
  pub doi:           String,
  /// First four characters of `published`, or empty
  pub year:          String,
}

/// A field value prepared for display.
///
/// Keeps the stored value and the placeholder apart so callers can style them
/// differently, while [`Display`] renders either one as plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayValue<'a> {
  /// The stored value
  Value(Cow<'a, str>),
  /// The field is empty; carries the placeholder text
  Fallback(&'static str),
}

impl DisplayValue<'_> {
  /// Whether the field was empty.
  pub fn is_fallback(&self) -> bool { matches!(self, DisplayValue::Fallback(_)) }

  /// Borrow the text to show, stored or placeholder.
  pub fn as_str(&self) -> &str {
    match self {
      DisplayValue::Value(value) => value,
      DisplayValue::Fallback(fallback) => fallback,
    }
  }
}

impl Display for DisplayValue<'_> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

impl Paper {
  /// Creates an empty record for `identifier`.
  ///
  /// Every other field starts out empty. Use the `with_*` methods to fill in known values,
  /// or [`Paper::fetch_metadata`] to populate them from arXiv.
  pub fn new(identifier: impl Into<String>) -> Self {
    Self { identifier: identifier.into(), ..Default::default() }
  }

  /// Sets the title.
  pub fn with_title(mut self, title: impl Into<String>) -> Self {
    self.title = title.into();
    self
  }

  /// Sets the abstract page URL.
  pub fn with_url(mut self, url: impl Into<String>) -> Self {
    self.url = url.into();
    self
  }

  /// Sets the abstract text.
  pub fn with_abstract(mut self, abstract_text: impl Into<String>) -> Self {
    self.abstract_text = abstract_text.into();
    self
  }

  /// Sets the author list.
  pub fn with_authors(mut self, authors: Vec<String>) -> Self {
    self.authors = authors;
    self
  }

  /// Adds every keyword through [`Paper::add_keyword`].
  pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>, {
    for keyword in keywords {
      self.add_keyword(keyword);
    }
    self
  }

  /// Sets the journal reference.
  pub fn with_journal(mut self, journal: impl Into<String>) -> Self {
    self.journal = journal.into();
    self
  }

  /// Sets the DOI.
  pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
    self.doi = doi.into();
    self
  }

  /// Sets the publication year.
  pub fn with_year(mut self, year: impl Into<String>) -> Self {
    self.year = year.into();
    self
  }

  /// Looks the paper up on arXiv and overwrites its descriptive fields.
  ///
  /// On a hit, title, abstract, url, authors, journal reference, DOI and year are all
  /// replaced, and keywords are left alone. When the feed has no entry for the identifier
  /// the record is not touched, a warning is logged and `Ok(false)` is returned.
  ///
  /// # Errors
  ///
  /// Network failures, non-success HTTP statuses, unparsable feeds and arXiv error entries
  /// are returned to the caller unchanged.
  ///
  /// # Examples
  ///
  /// ```no_run
  /// # use bibshelf::{paper::Paper, retriever::Retriever};
  /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
  /// let mut paper = Paper::new("1512.05435");
  /// if paper.fetch_metadata(&Retriever::new()).await? {
  ///   println!("Fetched: {}", paper.title);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  pub async fn fetch_metadata(&mut self, retriever: &Retriever) -> Result<bool> {
    match retriever.retrieve(&self.identifier).await? {
      Some(metadata) => {
        self.apply_metadata(metadata);
        Ok(true)
      },
      None => {
        warn!("No entry found for the given arXiv ID: {}", self.identifier);
        Ok(false)
      },
    }
  }

  /// Overwrites every descriptive field with `metadata`. Keywords are kept.
  pub fn apply_metadata(&mut self, metadata: Metadata) {
    let Metadata { title, abstract_text, url, authors, journal, doi, year } = metadata;
    self.title = title;
    self.abstract_text = abstract_text;
    self.url = url;
    self.authors = authors;
    self.journal = journal;
    self.doi = doi;
    self.year = year;
  }

  /// Appends `keyword` unless an identical one is already present.
  ///
  /// The comparison is exact and case-sensitive. Blank keywords are ignored.
  pub fn add_keyword(&mut self, keyword: impl Into<String>) {
    let keyword = keyword.into();
    if keyword.trim().is_empty() || self.keywords.contains(&keyword) {
      return;
    }
    self.keywords.push(keyword);
  }

  /// Removes `keyword` if present.
  pub fn remove_keyword(&mut self, keyword: &str) { self.keywords.retain(|k| k != keyword); }

  /// Whether any keyword equals `keyword` ignoring case.
  pub fn has_keyword_ignore_case(&self, keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    self.keywords.iter().any(|k| k.to_lowercase() == keyword)
  }

  /// Authors joined by `", "`, or [`NO_AUTHORS`].
  pub fn display_authors(&self) -> DisplayValue<'_> {
    if self.authors.is_empty() {
      DisplayValue::Fallback(NO_AUTHORS)
    } else {
      DisplayValue::Value(Cow::Owned(self.authors.join(", ")))
    }
  }

  /// The journal reference, or [`NO_JOURNAL`].
  pub fn display_journal(&self) -> DisplayValue<'_> { or_fallback(&self.journal, NO_JOURNAL) }

  /// The DOI, or [`NO_DOI`].
  pub fn display_doi(&self) -> DisplayValue<'_> { or_fallback(&self.doi, NO_DOI) }

  /// The year, or [`NO_YEAR`].
  pub fn display_year(&self) -> DisplayValue<'_> { or_fallback(&self.year, NO_YEAR) }

  /// Renders the paper as a BibTeX `@article` entry keyed by its identifier.
  ///
  /// Authors are joined with `" and "` and the identifier is echoed in the `note` field.
  ///
  /// ```
  /// # use bibshelf::paper::Paper;
  /// let paper = Paper::new("abc").with_title("T").with_authors(vec!["A".into(), "B".into()]);
  /// assert!(paper.to_bibtex().contains("  author={ A and B },\n"));
  /// ```
  pub fn to_bibtex(&self) -> String {
    format!(
      "@article{{{id},\n  title={{ {title} }},\n  author={{ {authors} }},\n  journal={{ {journal} \
       }},\n  year={{ {year} }},\n  doi={{ {doi} }},\n  url={{ {url} }},\n  \
       note={{arXiv:{id}}}\n}}",
      id = self.identifier,
      title = self.title,
      authors = self.authors.join(" and "),
      journal = self.journal,
      year = self.year,
      doi = self.doi,
      url = self.url,
    )
  }
}

/// Wraps a stored string, substituting `fallback` when it is empty.
fn or_fallback<'a>(value: &'a str, fallback: &'static str) -> DisplayValue<'a> {
  if value.is_empty() {
    DisplayValue::Fallback(fallback)
  } else {
    DisplayValue::Value(Cow::Borrowed(value))
  }
}
