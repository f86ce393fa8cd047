use super::*;

const FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: search_query=id:1512.05435</title>
  <opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">1</opensearch:totalResults>
  <entry>
    <id>http://arxiv.org/abs/1512.05435v1</id>
    <published>2016-03-01T00:00:00Z</published>
    <title>T</title>
    <summary>A</summary>
    <author>
      <name>X</name>
    </author>
    <author>
      <name>Y</name>
    </author>
    <link href="http://arxiv.org/abs/1512.05435v1" rel="alternate" type="text/html"/>
  </entry>
</feed>
"#;

const EMPTY_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title type="html">ArXiv Query: search_query=id:0000.00000</title>
  <opensearch:totalResults xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/">0</opensearch:totalResults>
</feed>
"#;

const ERROR_FEED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <entry>
    <id>http://arxiv.org/api/errors#incorrect_id_format_for_bogus</id>
    <title>Error</title>
    <summary>incorrect id format for bogus</summary>
  </entry>
</feed>
"#;

#[tokio::test]
async fn test_fetch_metadata_populates_paper() -> TestResult<()> {
  let mut server = Server::new_async().await;
  let mock = server
    .mock("GET", "/api/query")
    .match_query(expected_query("1512.05435"))
    .with_status(200)
    .with_header("content-type", "application/atom+xml")
    .with_body(FEED)
    .create_async()
    .await;

  let mut paper = Paper::new("1512.05435").with_keywords(["vision"]);
  assert!(paper.fetch_metadata(&create_test_retriever(&server)).await?);
  mock.assert_async().await;

  assert_eq!(paper.title, "T");
  assert_eq!(paper.abstract_text, "A");
  assert_eq!(paper.url, "https://arxiv.org/abs/1512.05435");
  assert_eq!(paper.authors, vec!["X", "Y"]);
  assert_eq!(paper.year, "2016");
  assert!(paper.journal.is_empty());
  assert!(paper.doi.is_empty());
  assert_eq!(paper.keywords, vec!["vision"]);
  Ok(())
}

#[tokio::test]
async fn test_fetch_metadata_without_entry_leaves_paper() -> TestResult<()> {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("GET", "/api/query")
    .match_query(expected_query("0000.00000"))
    .with_body(EMPTY_FEED)
    .create_async()
    .await;

  let mut paper = Paper::new("0000.00000").with_title("kept");
  let before = paper.clone();
  assert!(!paper.fetch_metadata(&create_test_retriever(&server)).await?);
  assert_eq!(paper, before);
  Ok(())
}

#[tokio::test]
async fn test_fetch_metadata_server_error() {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("GET", "/api/query")
    .match_query(Matcher::Any)
    .with_status(500)
    .create_async()
    .await;

  let mut paper = Paper::new("1512.05435");
  let result = paper.fetch_metadata(&create_test_retriever(&server)).await;
  assert!(matches!(result, Err(BibshelfError::Network(_))));
  assert!(paper.title.is_empty());
}

#[tokio::test]
async fn test_fetch_metadata_api_error() {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("GET", "/api/query")
    .match_query(Matcher::Any)
    .with_body(ERROR_FEED)
    .create_async()
    .await;

  let mut paper = Paper::new("bogus");
  let result = paper.fetch_metadata(&create_test_retriever(&server)).await;
  match result {
    Err(BibshelfError::ApiError(message)) => assert_eq!(message, "incorrect id format for bogus"),
    other => panic!("expected an API error, got {other:?}"),
  }
}

#[tokio::test]
async fn test_fetch_metadata_malformed_body() {
  let mut server = Server::new_async().await;
  let _mock = server
    .mock("GET", "/api/query")
    .match_query(Matcher::Any)
    .with_body("<feed><entry></feed>")
    .create_async()
    .await;

  let mut paper = Paper::new("1512.05435");
  let result = paper.fetch_metadata(&create_test_retriever(&server)).await;
  assert!(matches!(result, Err(BibshelfError::Xml(_))));
}
