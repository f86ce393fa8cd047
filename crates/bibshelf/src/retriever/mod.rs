//! Paper metadata retrieval from the arXiv Atom API.
//!
//! The [`Retriever`] turns an identifier into a query against the arXiv feed endpoint,
//! parses the first entry of the response and hands back a [`Metadata`] value. The
//! abstract page URL is always built from the identifier through a template, never read
//! from the response.
//!
//! Both URL templates come from [`RetrieverConfig`] and use an `{identifier}` placeholder:
//!
//! ```toml
//! [retriever]
//! endpoint_template = "https://export.arxiv.org/api/query?search_query=id:{identifier}&start=0&max_results=1"
//! abs_url_template = "https://arxiv.org/abs/{identifier}"
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use bibshelf::retriever::Retriever;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let retriever = Retriever::new();
//! match retriever.retrieve("1512.05435").await? {
//!   Some(metadata) => println!("Found: {}", metadata.title),
//!   None => println!("No such paper"),
//! }
//! # Ok(())
//! # }
//! ```

use url::Url;

use super::*;
use crate::paper::Metadata;

pub mod xml;

/// Placeholder substituted by the identifier in both URL templates.
const IDENTIFIER_PLACEHOLDER: &str = "{identifier}";

/// Client for looking papers up on arXiv.
#[derive(Debug, Clone)]
pub struct Retriever {
  /// HTTP client reused for every request
  client: reqwest::Client,
  /// URL templates
  config: RetrieverConfig,
}

impl Default for Retriever {
  fn default() -> Self { Self::new() }
}

impl Retriever {
  /// Creates a retriever pointed at the public arXiv API.
  pub fn new() -> Self { Self::from_config(RetrieverConfig::default()) }

  /// Creates a retriever using the templates in `config`.
  pub fn from_config(config: RetrieverConfig) -> Self {
    Self { client: reqwest::Client::new(), config }
  }

  /// Replaces the query endpoint template.
  pub fn with_endpoint_template(mut self, template: impl Into<String>) -> Self {
    self.config.endpoint_template = template.into();
    self
  }

  /// Replaces the abstract page URL template.
  pub fn with_abs_url_template(mut self, template: impl Into<String>) -> Self {
    self.config.abs_url_template = template.into();
    self
  }

  /// The feed query URL for `identifier`.
  pub fn query_url(&self, identifier: &str) -> String {
    self.config.endpoint_template.replace(IDENTIFIER_PLACEHOLDER, identifier)
  }

  /// The abstract page URL for `identifier`.
  ///
  /// ```
  /// # use bibshelf::retriever::Retriever;
  /// assert_eq!(Retriever::new().abs_url("1512.05435"), "https://arxiv.org/abs/1512.05435");
  /// ```
  pub fn abs_url(&self, identifier: &str) -> String {
    self.config.abs_url_template.replace(IDENTIFIER_PLACEHOLDER, identifier)
  }

  /// Fetches the metadata of `identifier`.
  ///
  /// Returns `Ok(None)` when the feed contains no entry. The request is made once, with
  /// no timeout and no retry.
  ///
  /// # Errors
  ///
  /// - [`BibshelfError::Network`] if the request fails or the status is not a success
  /// - [`BibshelfError::Xml`] if the body is not a feed document
  /// - [`BibshelfError::ApiError`] if arXiv answers with an error entry
  pub async fn retrieve(&self, identifier: &str) -> Result<Option<Metadata>> {
    let url = self.query_url(identifier);
    debug!("Fetching from arXiv via: {url}");

    let response = self.client.get(&url).send().await?.error_for_status()?;
    let data = response.bytes().await?;
    trace!("arXiv response: {}", String::from_utf8_lossy(&data));

    let Some(entry) = xml::parse_feed(&data)? else {
      return Ok(None);
    };
    Ok(Some(entry.into_metadata(self.abs_url(identifier))))
  }
}

/// Normalizes user input into a bare arXiv identifier.
///
/// Surrounding whitespace and an `arXiv:` prefix are removed, and `arxiv.org` abstract or
/// PDF URLs are reduced to the identifier they point at. Any other non-blank input is
/// returned trimmed. Blank input yields `None`.
///
/// ```
/// # use bibshelf::retriever::sanitize_identifier;
/// assert_eq!(sanitize_identifier(" arXiv:1512.05435 ").as_deref(), Some("1512.05435"));
/// assert_eq!(
///   sanitize_identifier("https://arxiv.org/pdf/1512.05435v2.pdf").as_deref(),
///   Some("1512.05435v2")
/// );
/// assert_eq!(sanitize_identifier("   "), None);
/// ```
pub fn sanitize_identifier(input: &str) -> Option<String> {
  lazy_static! {
    static ref ARXIV_PREFIX: Regex = Regex::new(r"(?i)^arxiv:\s*").unwrap();
    static ref ARXIV_PATH: Regex = Regex::new(r"^/(?:abs|pdf)/(.+?)(?:\.pdf)?/?$").unwrap();
  }

  let input = ARXIV_PREFIX.replace(input.trim(), "");
  let input = input.trim();
  if input.is_empty() {
    return None;
  }

  if let Ok(url) = Url::parse(input) {
    if url.host_str().is_some_and(|host| host.ends_with("arxiv.org")) {
      if let Some(id) = ARXIV_PATH.captures(url.path()).and_then(|cap| cap.get(1)) {
        return Some(id.as_str().to_string());
      }
    }
  }

  Some(input.to_string())
}
