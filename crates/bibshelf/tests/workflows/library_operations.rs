use super::*;

#[tokio::test]
async fn test_fetch_tag_filter_export() -> TestResult<()> {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("GET", "/api/query")
    .match_query(expected_query("1512.05435"))
    .with_body(
      r#"<feed xmlns="http://www.w3.org/2005/Atom"><entry>
        <id>http://arxiv.org/abs/1512.05435v1</id>
        <published>2015-12-10T00:00:00Z</published>
        <title>Deep Residual Learning for Image Recognition</title>
        <summary>Deeper neural networks are more difficult to train.</summary>
        <author><name>Kaiming He</name></author>
        <author><name>Xiangyu Zhang</name></author>
      </entry></feed>"#,
    )
    .create_async()
    .await;

  let (mut library, _dir) = create_test_library();
  let mut paper = Paper::new("1512.05435");
  paper.fetch_metadata(&create_test_retriever(&server)).await?;
  paper.add_keyword("Machine Learning");
  Add::paper(paper).execute(&mut library)?;

  Add::paper(Paper::new("1406.2661").with_title("Generative Adversarial Nets"))
    .execute(&mut library)?;
  Edit::paper("1406.2661")
    .add_keyword("GAN")
    .add_keyword("machine learning")
    .execute(&mut library)?;

  let tagged = Query::by_keyword("MACHINE LEARNING").execute(&mut library)?;
  assert_eq!(tagged.len(), 2);
  assert_eq!(library.keyword_counts(), vec![
    ("gan".to_string(), 1),
    ("machine learning".to_string(), 2)
  ]);

  let bibtex = tagged[0].to_bibtex();
  assert!(bibtex.starts_with("@article{1512.05435,\n"));
  assert!(bibtex.contains("  author={ Kaiming He and Xiangyu Zhang },\n"));
  assert!(bibtex.contains("  year={ 2015 },\n"));
  assert!(bibtex.contains("  url={ https://arxiv.org/abs/1512.05435 },\n"));

  let reopened = Library::open(library.path())?;
  assert_eq!(reopened.papers(), library.papers());
  Ok(())
}

#[test]
fn test_remove_then_reopen() -> TestResult<()> {
  let (mut library, _dir) = create_test_library();
  for id in ["a", "b"] {
    Add::paper(Paper::new(id)).execute(&mut library)?;
  }

  let err = Add::paper(Paper::new("a")).execute(&mut library).unwrap_err();
  assert!(matches!(err, BibshelfError::DuplicatePaper(_)));

  Remove::by_identifier("a").execute(&mut library)?;
  let reopened = Library::open(library.path())?;
  assert_eq!(reopened.len(), 1);
  assert!(reopened.contains("b"));
  Ok(())
}

#[test]
fn test_legacy_library_file() -> TestResult<()> {
  let (library, dir) = create_test_library();
  std::fs::write(
    library.path(),
    r#"[
  {
    "arxiv_id": "1512.05435",
    "title": "Deep Residual\n  Learning",
    "url": "https://arxiv.org/abs/1512.05435",
    "keywords": ["vision", "vision"],
    "abs": "line one\nline two",
    "authors": "Kaiming He, Xiangyu Zhang",
    "journal": "No journal reference",
    "doi": "No DOI available",
    "year": "2015"
  }
]"#,
  )?;

  let library = Library::open(dir.path().join("bibliography.json"))?;
  let paper = library.get("1512.05435").unwrap();
  assert_eq!(paper.title, "Deep Residual Learning");
  assert_eq!(paper.abstract_text, "line one line two");
  assert_eq!(paper.authors, vec!["Kaiming He", "Xiangyu Zhang"]);
  assert_eq!(paper.keywords, vec!["vision"]);
  assert!(paper.journal.is_empty());
  assert!(paper.doi.is_empty());
  assert_eq!(paper.display_doi().to_string(), "No DOI available");
  Ok(())
}
