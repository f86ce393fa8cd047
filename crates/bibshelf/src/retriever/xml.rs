//! Atom feed parsing for arXiv query responses.
//!
//! arXiv mixes the Atom, OpenSearch and `arxiv` namespaces in one document. Namespace
//! declarations and element prefixes are stripped first, so `<arxiv:journal_ref>` is read
//! as `journal_ref`, and the result is deserialized with `quick-xml`'s serde support.

use quick_xml::de::from_str;

use super::*;

/// The feed document. Only the entries are of interest.
#[derive(Debug, Deserialize)]
struct Feed {
  /// Matching papers; absent when nothing matched
  #[serde(rename = "entry", default)]
  entries: Vec<Entry>,
}

/// One paper entry of the feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Entry {
  /// Entry id, an abstract URL or an `/api/errors` URL
  #[serde(default)]
  pub id:          String,
  /// Paper title, may wrap over several lines
  #[serde(default)]
  pub title:       String,
  /// Paper abstract
  #[serde(default)]
  pub summary:     String,
  /// Authors in publication order
  #[serde(rename = "author", default)]
  pub authors:     Vec<EntryAuthor>,
  /// First version timestamp, e.g. `2015-12-10T21:01:44Z`
  #[serde(default)]
  pub published:   Option<String>,
  /// `arxiv:journal_ref`
  #[serde(default)]
  pub journal_ref: Option<String>,
  /// `arxiv:doi`
  #[serde(default)]
  pub doi:         Option<String>,
}

/// An `<author>` element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EntryAuthor {
  /// Author's full name
  #[serde(default)]
  pub name: String,
}

impl Entry {
  /// Converts the entry into [`Metadata`] with the given abstract page URL.
  ///
  /// Text fields are trimmed at both ends only, so wrapped titles keep their line breaks.
  /// The year is the first four characters of `published`.
  pub fn into_metadata(self, url: String) -> Metadata {
    let trimmed = |value: Option<String>| value.map(|v| v.trim().to_string()).unwrap_or_default();
    Metadata {
      title: self.title.trim().to_string(),
      abstract_text: self.summary.trim().to_string(),
      url,
      authors: self
        .authors
        .into_iter()
        .map(|author| author.name.trim().to_string())
        .filter(|name| !name.is_empty())
        .collect(),
      journal: trimmed(self.journal_ref),
      doi: trimmed(self.doi),
      year: self.published.map(|p| p.trim().chars().take(4).collect()).unwrap_or_default(),
    }
  }

  /// Whether arXiv used this entry to report a malformed query.
  fn is_api_error(&self) -> bool { self.id.contains("/api/errors") }
}

/// Parses a feed document and returns its first entry.
///
/// # Errors
///
/// - [`BibshelfError::Xml`] if the document cannot be deserialized
/// - [`BibshelfError::ApiError`] if the first entry is an arXiv error report
pub fn parse_feed(data: &[u8]) -> Result<Option<Entry>> {
  let xml = strip_xml_namespaces(&String::from_utf8_lossy(data));
  let feed: Feed = from_str(&xml)?;

  let Some(entry) = feed.entries.into_iter().next() else {
    debug!("Feed contained no entries");
    return Ok(None);
  };

  if entry.is_api_error() {
    return Err(BibshelfError::ApiError(entry.summary.trim().to_string()));
  }
  Ok(Some(entry))
}

/// Removes XML namespace declarations and element prefixes.
///
/// `<arxiv:doi xmlns:arxiv="…">` becomes `<doi>`.
fn strip_xml_namespaces(xml: &str) -> String {
  lazy_static! {
    static ref DECLARATION: Regex = Regex::new(r#"\s+xmlns(?::[\w.-]+)?="[^"]*""#).unwrap();
    static ref PREFIX: Regex = Regex::new(r"<(/?)[A-Za-z_][\w.-]*:").unwrap();
  }
  let result = DECLARATION.replace_all(xml, "");
  PREFIX.replace_all(&result, "<$1").into_owned()
}
