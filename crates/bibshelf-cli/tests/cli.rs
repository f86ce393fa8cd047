//! Integration tests for the bibshelf CLI commands.
//!
//! Every test works on its own temporary library and configuration, seeded from a JSON
//! fixture. Commands that fetch from arXiv are pointed at a local mock server.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use bibshelf::store;
use mockito::{Matcher, Server, ServerGuard};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/abs/1706.03762v5</id>
    <published>2017-06-12T17:57:34Z</published>
    <title>Attention Is All You
  Need</title>
    <summary>The dominant sequence transduction models are based on
recurrent networks.</summary>
    <author>
      <name>Ashish Vaswani</name>
    </author>
    <author>
      <name>Noam Shazeer</name>
    </author>
  </entry>
</feed>
"#;

const EMPTY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: search_query=id:1706.03762</title>
</feed>
"#;

const LIBRARY: &str = r#"[
  {
    "arxiv_id": "1512.05435",
    "title": "Deep Residual Learning for Image Recognition",
    "url": "https://arxiv.org/abs/1512.05435",
    "keywords": ["Vision"],
    "abs": "Deeper neural networks are more difficult to train.",
    "authors": ["Kaiming He", "Xiangyu Zhang"],
    "journal": "",
    "doi": "",
    "year": "2015"
  },
  {
    "arxiv_id": "1406.2661",
    "title": "Generative Adversarial Networks",
    "url": "https://arxiv.org/abs/1406.2661",
    "keywords": ["GAN"],
    "abs": "We propose a new framework.",
    "authors": ["Ian Goodfellow"],
    "journal": "",
    "doi": "",
    "year": "2014"
  }
]"#;

/// A temporary directory holding a seeded library file.
struct Shelf {
  dir: TempDir,
}

impl Shelf {
  fn new() -> Self {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("bibliography.json"), LIBRARY).unwrap();
    Self { dir }
  }

  fn empty() -> Self { Self { dir: tempdir().unwrap() } }

  fn library(&self) -> PathBuf { self.dir.path().join("bibliography.json") }

  fn config(&self) -> PathBuf { self.dir.path().join("config.toml") }

  fn path(&self) -> &Path { self.dir.path() }

  /// A command pointed at this shelf's config and library.
  fn bibshelf(&self) -> Command {
    let mut cmd = Command::cargo_bin("bibshelf").unwrap();
    cmd.arg("--config").arg(self.config()).arg("--path").arg(self.library());
    cmd
  }

  /// Points this shelf's arXiv lookups at `server`.
  fn with_feed_server(self, server: &ServerGuard) -> Self {
    let endpoint =
      format!("{}/api/query?search_query=id:{{identifier}}&start=0&max_results=1", server.url());
    let config = format!("[retriever]\nendpoint_template = \"{endpoint}\"\n");
    std::fs::write(self.config(), config).unwrap();
    self
  }
}

/// Query parameters sent when looking up `identifier`.
fn expected_query(identifier: &str) -> Matcher {
  Matcher::AllOf(vec![
    Matcher::UrlEncoded("search_query".into(), format!("id:{identifier}")),
    Matcher::UrlEncoded("start".into(), "0".into()),
    Matcher::UrlEncoded("max_results".into(), "1".into()),
  ])
}

#[test]
fn test_init_writes_config() {
  let shelf = Shelf::empty();
  let library = shelf.path().join("papers.json");

  Command::cargo_bin("bibshelf")
    .unwrap()
    .arg("init")
    .arg("--library")
    .arg(&library)
    .arg("--config")
    .arg(shelf.config())
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("Created bibshelf configuration"));

  let config = std::fs::read_to_string(shelf.config()).unwrap();
  assert!(config.contains("papers.json"));
  assert!(config.contains("[retriever]"));
}

#[test]
fn test_list_and_filter() {
  let shelf = Shelf::new();

  shelf
    .bibshelf()
    .arg("list")
    .assert()
    .success()
    .stdout(predicate::str::contains("1512.05435 | Deep Residual Learning"))
    .stdout(predicate::str::contains("1406.2661 | Generative Adversarial Networks"));

  shelf
    .bibshelf()
    .arg("list")
    .arg("--keyword")
    .arg("VISION")
    .assert()
    .success()
    .stdout(predicate::str::contains("1512.05435"))
    .stdout(predicate::str::contains("1406.2661").not());

  shelf
    .bibshelf()
    .arg("list")
    .arg("--keyword")
    .arg("audio")
    .assert()
    .success()
    .stdout(predicate::str::contains("No papers found"));
}

#[test]
fn test_keywords() {
  let shelf = Shelf::new();
  shelf
    .bibshelf()
    .arg("keywords")
    .assert()
    .success()
    .stdout(predicate::str::contains("gan (1)"))
    .stdout(predicate::str::contains("vision (1)"));
}

#[test]
fn test_show() {
  let shelf = Shelf::new();
  shelf
    .bibshelf()
    .arg("show")
    .arg("1512.05435")
    .assert()
    .success()
    .stdout(predicate::str::contains("Deep Residual Learning for Image Recognition"))
    .stdout(predicate::str::contains("Kaiming He, Xiangyu Zhang"))
    .stdout(predicate::str::contains("No DOI available"))
    .stdout(predicate::str::contains("No journal reference"))
    .stdout(predicate::str::contains("Deeper neural networks"));

  shelf
    .bibshelf()
    .arg("show")
    .arg("arXiv:1512.05435")
    .assert()
    .success()
    .stdout(predicate::str::contains("Deep Residual Learning for Image Recognition"));

  shelf
    .bibshelf()
    .arg("show")
    .arg("https://arxiv.org/abs/1406.2661")
    .assert()
    .success()
    .stdout(predicate::str::contains("Generative Adversarial Networks"));

  shelf
    .bibshelf()
    .arg("show")
    .arg("0000.00000")
    .assert()
    .failure()
    .stderr(predicate::str::contains("No paper with identifier \"0000.00000\""));
}

#[test]
fn test_tag_and_untag() {
  let shelf = Shelf::new();

  shelf
    .bibshelf()
    .arg("tag")
    .arg("1406.2661")
    .arg("vision")
    .arg("generative")
    .assert()
    .success()
    .stdout(predicate::str::contains("GAN, vision, generative"));

  shelf
    .bibshelf()
    .arg("keywords")
    .assert()
    .success()
    .stdout(predicate::str::contains("vision (2)"));

  shelf.bibshelf().arg("untag").arg("arXiv:1406.2661").arg("GAN").assert().success();

  let saved = std::fs::read_to_string(shelf.library()).unwrap();
  assert!(!saved.contains("\"GAN\""));
}

#[test]
fn test_edit() {
  let shelf = Shelf::new();

  shelf
    .bibshelf()
    .arg("edit")
    .arg("1406.2661")
    .arg("--doi")
    .arg("10.48550/arXiv.1406.2661")
    .arg("--authors")
    .arg("Ian Goodfellow, Yoshua Bengio")
    .assert()
    .success()
    .stdout(predicate::str::contains("Updated paper 1406.2661"));

  shelf
    .bibshelf()
    .arg("show")
    .arg("1406.2661")
    .assert()
    .success()
    .stdout(predicate::str::contains("10.48550/arXiv.1406.2661"))
    .stdout(predicate::str::contains("Ian Goodfellow, Yoshua Bengio"));

  shelf.bibshelf().arg("edit").arg("0000.00000").arg("--year").arg("2020").assert().failure();

  shelf
    .bibshelf()
    .arg("edit")
    .arg("1406.2661")
    .arg("--title")
    .arg("GANs")
    .arg("--year")
    .arg("14")
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid year \"14\""));

  let papers = store::load(shelf.library()).unwrap();
  assert_eq!(papers[1].title, "Generative Adversarial Networks");
  assert_eq!(papers[1].year, "2014");
}

#[test]
fn test_export() {
  let shelf = Shelf::new();

  shelf
    .bibshelf()
    .arg("export")
    .arg("--keyword")
    .arg("vision")
    .assert()
    .success()
    .stdout(predicate::str::contains("@article{1512.05435,"))
    .stdout(predicate::str::contains("  author={ Kaiming He and Xiangyu Zhang },"))
    .stdout(predicate::str::contains("note={arXiv:1512.05435}"))
    .stdout(predicate::str::contains("1406.2661").not());

  let output = shelf.path().join("refs.bib");
  shelf
    .bibshelf()
    .arg("export")
    .arg("--output")
    .arg(&output)
    .assert()
    .success()
    .stdout(predicate::str::contains("Exported 2 BibTeX entries"));

  let bibtex = std::fs::read_to_string(&output).unwrap();
  assert!(bibtex.starts_with("@article{1512.05435,"));
  assert!(bibtex.contains("}\n\n@article{1406.2661,"));
}

#[test]
fn test_remove() {
  let shelf = Shelf::new();

  shelf
    .bibshelf()
    .arg("remove")
    .arg("arXiv:1512.05435")
    .arg("--accept-defaults")
    .assert()
    .success()
    .stdout(predicate::str::contains("Removed paper 1512.05435"));

  shelf
    .bibshelf()
    .arg("list")
    .assert()
    .success()
    .stdout(predicate::str::contains("1512.05435").not())
    .stdout(predicate::str::contains("1406.2661"));

  shelf
    .bibshelf()
    .arg("remove")
    .arg("1512.05435")
    .arg("--accept-defaults")
    .assert()
    .failure();
}

#[test]
fn test_add_without_fetching() {
  let shelf = Shelf::new();

  // Already on the shelf, so nothing is fetched
  shelf
    .bibshelf()
    .arg("add")
    .arg("arXiv:1512.05435")
    .assert()
    .success()
    .stdout(predicate::str::contains("already in your library"));

  let empty = Shelf::empty();
  empty.bibshelf().arg("add").arg("   ").assert().success();
  assert!(!empty.library().exists());
}

#[test]
fn test_search() {
  let shelf = Shelf::new();

  shelf
    .bibshelf()
    .arg("search")
    .arg("GOODFELLOW")
    .assert()
    .success()
    .stdout(predicate::str::contains("1406.2661 | Generative Adversarial Networks"))
    .stdout(predicate::str::contains("1512.05435").not());

  shelf
    .bibshelf()
    .arg("search")
    .arg("difficult to train")
    .assert()
    .success()
    .stdout(predicate::str::contains("1512.05435 | Deep Residual Learning"));

  shelf
    .bibshelf()
    .arg("search")
    .arg("transformer")
    .assert()
    .success()
    .stdout(predicate::str::contains("No papers found"));
}

#[test]
fn test_add_fetches_and_saves() {
  let mut server = Server::new();
  let mock = server
    .mock("GET", "/api/query")
    .match_query(expected_query("1706.03762"))
    .with_status(200)
    .with_header("content-type", "application/atom+xml")
    .with_body(FEED)
    .create();
  let shelf = Shelf::new().with_feed_server(&server);

  shelf
    .bibshelf()
    .arg("add")
    .arg("https://arxiv.org/abs/1706.03762")
    .arg("--keywords")
    .arg("nlp, attention, ")
    .assert()
    .success()
    .stdout(predicate::str::contains("Fetching paper: 1706.03762"))
    .stdout(predicate::str::contains("Attention Is All You"))
    .stdout(predicate::str::contains("Paper added successfully"));
  mock.assert();

  let papers = store::load(shelf.library()).unwrap();
  assert_eq!(papers.len(), 3);
  let paper = &papers[2];
  assert_eq!(paper.identifier, "1706.03762");
  assert_eq!(paper.title, "Attention Is All You Need");
  assert_eq!(paper.url, "https://arxiv.org/abs/1706.03762");
  assert_eq!(paper.authors, vec!["Ashish Vaswani", "Noam Shazeer"]);
  assert_eq!(paper.year, "2017");
  assert_eq!(paper.keywords, vec!["nlp", "attention"]);
  assert_eq!(
    paper.abstract_text,
    "The dominant sequence transduction models are based on recurrent networks."
  );
}

#[test]
fn test_add_unknown_paper_is_kept_empty() {
  let mut server = Server::new();
  let mock = server
    .mock("GET", "/api/query")
    .match_query(expected_query("1706.03762"))
    .with_status(200)
    .with_header("content-type", "application/atom+xml")
    .with_body(EMPTY_FEED)
    .create();
  let shelf = Shelf::empty().with_feed_server(&server);

  shelf
    .bibshelf()
    .arg("add")
    .arg("1706.03762")
    .arg("--keywords")
    .arg("later")
    .assert()
    .success()
    .stdout(predicate::str::contains("No entry found for the given arXiv ID: 1706.03762"))
    .stdout(predicate::str::contains("Paper added successfully"));
  mock.assert();

  let papers = store::load(shelf.library()).unwrap();
  assert_eq!(papers.len(), 1);
  assert_eq!(papers[0].identifier, "1706.03762");
  assert_eq!(papers[0].title, "");
  assert!(papers[0].authors.is_empty());
  assert_eq!(papers[0].keywords, vec!["later"]);
}

#[test]
fn test_add_server_error_fails() {
  let mut server = Server::new();
  let mock = server.mock("GET", "/api/query").match_query(Matcher::Any).with_status(503).create();
  let shelf = Shelf::empty().with_feed_server(&server);

  shelf.bibshelf().arg("add").arg("1706.03762").assert().failure();
  mock.assert();
  assert!(!shelf.library().exists());
}
