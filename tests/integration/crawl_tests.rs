//! Integration tests for the crawler
//!
//! These tests use wiremock to stand in for the gazette portal and run the
//! full per-year chain loop end-to-end: seed, fetch, parse, emit, follow
//! pagination, terminate.

use chrono::{Datelike, NaiveDate, Utc};
use diario_fortaleza::config::Config;
use diario_fortaleza::crawler::run_crawl;
use diario_fortaleza::output::MemorySink;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a config pointed at the mock server, crawling `[start_year, now)`
fn test_config(base_url: &str, start_year: i32) -> Config {
    let mut config = Config::default();
    config.crawler.base_url = format!("{}/", base_url);
    config.crawler.start_year = start_year;
    config
}

/// Wraps rows and a pagination section in the portal's page structure
fn listing_html(rows: &str, pagination: &str) -> String {
    format!(
        r#"<html><body>
        <div class="diarios-oficiais">
          <div class="table-responsive">
            <table><tbody>{}</tbody></table>
          </div>
        </div>
        {}
        </body></html>"#,
        rows, pagination
    )
}

fn row(description: &str, date: &str, href: &str) -> String {
    format!(
        r#"<tr><td>{}</td><td>{}</td><td><a href="{}">Baixar</a></td></tr>"#,
        description, date, href
    )
}

fn pagination_to(cursor: u32) -> String {
    format!(
        r##"<ul class="pagination"><li><a class="page-link" href="#{}">›</a></li></ul>"##,
        cursor
    )
}

#[tokio::test]
async fn test_two_page_chain_crawled_to_completion() {
    let mock_server = MockServer::start().await;
    let year = Utc::now().year() - 1;

    // Page 1: two rows, pagination pointing at cursor 2.
    let page1 = listing_html(
        &[
            row("Diário Oficial Nº 15923", "05 de Março de 2021", "doc?id=1"),
            row("Diário Oficial Nº 15923s", "05 de Março de 2021", "doc?id=2"),
        ]
        .concat(),
        &pagination_to(2),
    );
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("ano-diario", year.to_string()))
        .and(query_param("current", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .mount(&mock_server)
        .await;

    // Page 2: one row, no pagination control: the chain ends here.
    let page2 = listing_html(
        &row("Diário Oficial Nº 15924", "06 de Março de 2021", "doc?id=3"),
        "",
    );
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("ano-diario", year.to_string()))
        .and(query_param("current", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page2))
        .mount(&mock_server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let stats = run_crawl(test_config(&mock_server.uri(), year), sink.clone())
        .await
        .expect("crawl failed");

    assert_eq!(stats.chains_completed, 1);
    assert_eq!(stats.chains_failed, 0);
    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.gazettes_emitted, 3);

    let records = sink.records();
    assert_eq!(records.len(), 3);

    // One chain, so page order is preserved end to end.
    assert!(!records[0].is_extra_edition);
    assert!(records[1].is_extra_edition);
    assert_eq!(
        records[2].date,
        NaiveDate::from_ymd_opt(2021, 3, 6).unwrap()
    );
    for record in &records {
        assert_eq!(record.municipality_id, "2304400");
        assert_eq!(record.file_urls.len(), 1);
        assert!(record.file_urls[0]
            .starts_with("http://apps.fortaleza.ce.gov.br/diariooficial/doc?id="));
    }
}

#[tokio::test]
async fn test_fetch_failure_is_isolated_to_its_chain() {
    let mock_server = MockServer::start().await;
    let current = Utc::now().year();
    let good_year = current - 2;
    let bad_year = current - 1;

    let page = listing_html(
        &row("Diário Oficial Nº 100", "10 de Janeiro de 2019", "doc?id=1"),
        "",
    );
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("ano-diario", good_year.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(page))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("ano-diario", bad_year.to_string()))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let stats = run_crawl(test_config(&mock_server.uri(), good_year), sink.clone())
        .await
        .expect("crawl failed");

    // The failing year dies alone; the good year's records survive.
    assert_eq!(stats.chains_completed, 1);
    assert_eq!(stats.chains_failed, 1);
    assert_eq!(stats.gazettes_emitted, 1);

    let records = sink.records();
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].date,
        NaiveDate::from_ymd_opt(2019, 1, 10).unwrap()
    );
}

#[tokio::test]
async fn test_empty_listing_terminates_cleanly() {
    let mock_server = MockServer::start().await;
    let year = Utc::now().year() - 1;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("ano-diario", year.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_string(listing_html("", "")))
        .mount(&mock_server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let stats = run_crawl(test_config(&mock_server.uri(), year), sink.clone())
        .await
        .expect("crawl failed");

    assert_eq!(stats.chains_completed, 1);
    assert_eq!(stats.pages_fetched, 1);
    assert_eq!(stats.gazettes_emitted, 0);
    assert!(sink.is_empty());
}

#[tokio::test]
async fn test_bad_rows_do_not_stop_the_chain() {
    let mock_server = MockServer::start().await;
    let year = Utc::now().year() - 1;

    // Page 1 has one unparseable row but still advertises a next page.
    let page1 = listing_html(
        &[
            row("Diário Oficial Nº 200", "data inválida", "doc?id=1"),
            row("Diário Oficial Nº 201", "02 de Maio de 2020", "doc?id=2"),
        ]
        .concat(),
        &pagination_to(2),
    );
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("current", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page1))
        .mount(&mock_server)
        .await;

    let page2 = listing_html(
        &row("Diário Oficial Nº 202", "03 de Maio de 2020", "doc?id=3"),
        "",
    );
    Mock::given(method("GET"))
        .and(path("/"))
        .and(query_param("current", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_string(page2))
        .mount(&mock_server)
        .await;

    let sink = Arc::new(MemorySink::new());
    let stats = run_crawl(test_config(&mock_server.uri(), year), sink.clone())
        .await
        .expect("crawl failed");

    assert_eq!(stats.pages_fetched, 2);
    assert_eq!(stats.gazettes_emitted, 2);
    assert_eq!(stats.rows_skipped, 1);
    assert_eq!(sink.len(), 2);
}
