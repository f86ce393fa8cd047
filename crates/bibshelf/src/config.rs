//! Configuration for a bibshelf installation.
//!
//! The configuration lives in a small TOML file, by default `~/.bibshelf/config.toml`:
//!
//! ```toml
//! library_path = "/home/me/.local/share/bibshelf/bibliography.json"
//!
//! [retriever]
//! endpoint_template = "https://export.arxiv.org/api/query?search_query=id:{identifier}&start=0&max_results=1"
//! abs_url_template = "https://arxiv.org/abs/{identifier}"
//! ```
//!
//! A missing file is not an error: [`Config::load`] falls back to [`Config::default`].

use super::*;

/// Top level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
  /// The JSON file holding the paper collection
  #[serde(default = "Config::default_library_path")]
  pub library_path: PathBuf,
  /// arXiv lookup settings
  #[serde(default)]
  pub retriever:    RetrieverConfig,
}

/// URL templates used by the [`Retriever`]. `{identifier}` is replaced by the paper id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetrieverConfig {
  /// Feed query endpoint
  #[serde(default = "RetrieverConfig::default_endpoint_template")]
  pub endpoint_template: String,
  /// Canonical abstract page of a paper
  #[serde(default = "RetrieverConfig::default_abs_url_template")]
  pub abs_url_template:  String,
}

impl Default for Config {
  fn default() -> Self {
    Self { library_path: Self::default_library_path(), retriever: RetrieverConfig::default() }
  }
}

impl Default for RetrieverConfig {
  fn default() -> Self {
    Self {
      endpoint_template: Self::default_endpoint_template(),
      abs_url_template:  Self::default_abs_url_template(),
    }
  }
}

impl RetrieverConfig {
  /// The public arXiv query API, asking for at most one result.
  fn default_endpoint_template() -> String {
    "https://export.arxiv.org/api/query?search_query=id:{identifier}&start=0&max_results=1".into()
  }

  /// The public arXiv abstract page.
  fn default_abs_url_template() -> String { "https://arxiv.org/abs/{identifier}".into() }
}

impl Config {
  /// Returns the default location of the configuration file.
  ///
  /// The path is `~/.bibshelf/config.toml`.
  ///
  /// # Errors
  ///
  /// Returns [`BibshelfError::Config`] if the home directory cannot be determined.
  pub fn default_path() -> Result<PathBuf> {
    dirs::home_dir()
      .map(|home| home.join(".bibshelf").join("config.toml"))
      .ok_or_else(|| BibshelfError::Config("Could not determine home directory".into()))
  }

  /// Returns the default location of the library file.
  ///
  /// - On Unix: `~/.local/share/bibshelf/bibliography.json`
  /// - On macOS: `~/Library/Application Support/bibshelf/bibliography.json`
  /// - On Windows: `%APPDATA%\bibshelf\bibliography.json`
  /// - Fallback: `./bibshelf/bibliography.json`
  pub fn default_library_path() -> PathBuf {
    dirs::data_dir()
      .unwrap_or_else(|| PathBuf::from("."))
      .join("bibshelf")
      .join("bibliography.json")
  }

  /// Points the configuration at a different library file.
  pub fn with_library_path(mut self, path: &Path) -> Self {
    self.library_path = path.to_path_buf();
    self
  }

  /// Reads the configuration at `path`, or the defaults if there is no file.
  ///
  /// Keys missing from the file take their default values.
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    if !path.exists() {
      debug!("No config at {}, using defaults", path.display());
      return Ok(Self::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
  }

  /// Writes the configuration to `path`, creating parent directories as needed.
  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, toml::to_string_pretty(self)?)?;
    info!("Wrote config to {}", path.display());
    Ok(())
  }

  /// A [`Retriever`] built from these settings.
  pub fn retriever(&self) -> Retriever { Retriever::from_config(self.retriever.clone()) }
}
