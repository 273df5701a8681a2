//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end, from seeds to the files on disk.

use cyrillic_crawler::config::{load_config, Config, CrawlerConfig, FetcherConfig, OutputConfig};
use cyrillic_crawler::crawler::{run_crawl, Coordinator};
use cyrillic_crawler::storage::{load_records, read_index, verify_index};
use cyrillic_crawler::CrawlPhase;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration writing into `dir`, without pacing
fn create_test_config(seeds: Vec<String>, target_pages: u64, min_words: usize, dir: &Path) -> Config {
    Config {
        crawler: CrawlerConfig {
            seeds,
            target_pages,
            min_words,
            delay_ms: 0,
        },
        fetcher: FetcherConfig::default(),
        output: OutputConfig {
            index_path: dir.join("index.txt").display().to_string(),
            pages_dir: dir.join("pages").display().to_string(),
        },
    }
}

/// Builds a page with `words` Cyrillic words and anchors to `links`
fn page(words: usize, links: &[&str]) -> String {
    let anchors: String = links
        .iter()
        .map(|href| format!("<li><a href=\"{}\">link</a></li>", href))
        .collect();
    format!(
        "<!DOCTYPE html><html><head><title>Тест</title></head><body>\
         <article>{}</article><ul>{}</ul><script>var x = 1;</script></body></html>",
        "слово ".repeat(words),
        anchors
    )
}

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

async fn mount_page(server: &MockServer, route: &str, body: String, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html_response(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_seed_accepted_linked_pages_rejected() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    mount_page(&mock_server, "/", page(1500, &["/short-a", "/short-b"]), 1).await;
    mount_page(&mock_server, "/short-a", page(500, &[]), 1).await;
    mount_page(&mock_server, "/short-b", page(500, &[]), 1).await;

    let config = create_test_config(vec![format!("{}/", base_url)], 2, 1000, dir.path());
    let report = run_crawl(&config).await.expect("Crawl should succeed");

    assert_eq!(report.pages_accepted, 1);
    assert_eq!(report.pages_rejected, 2);
    assert_eq!(report.urls_visited, 3);
    assert!(!report.budget_met());

    let records = load_records(&dir.path().join("index.txt"), &dir.path().join("pages")).unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].record_id, 1);
    assert_eq!(records[0].url, format!("{}/", base_url));
    assert!(records[0].text.starts_with("слово слово"));
    assert!(!records[0].text.contains("var x"));
}

#[tokio::test]
async fn test_http_errors_do_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    mount_page(&mock_server, "/", page(20, &["/missing", "/broken", "/good"]), 1).await;
    mount_page(&mock_server, "/good", page(20, &[]), 1).await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(vec![base_url.clone()], 10, 10, dir.path());
    let report = run_crawl(&config).await.unwrap();

    assert_eq!(report.pages_accepted, 2);
    assert_eq!(report.pages_failed, 2);
    assert_eq!(report.levels_completed, 2);
}

#[tokio::test]
async fn test_budget_limits_index() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    let children = ["/p1", "/p2", "/p3", "/p4", "/p5"];
    mount_page(&mock_server, "/", page(30, &children), 1).await;
    for child in children {
        Mock::given(method("GET"))
            .and(path(child))
            .respond_with(html_response(page(30, &["/"])))
            .mount(&mock_server)
            .await;
    }

    let config = create_test_config(vec![base_url], 3, 10, dir.path());
    let report = run_crawl(&config).await.unwrap();

    assert_eq!(report.pages_accepted, 3);
    assert!(report.budget_met());

    let summary = verify_index(&dir.path().join("index.txt"), &dir.path().join("pages")).unwrap();
    assert!(summary.is_consistent());
    let ids: Vec<u64> = summary.entries.iter().map(|e| e.record_id).collect();
    assert_eq!(ids, vec![1, 2, 3]);

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
}

#[tokio::test]
async fn test_index_truncated_at_start() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    fs::write(dir.path().join("index.txt"), "1\thttps://old.example/\n2\thttps://old.example/2\n").unwrap();

    mount_page(&mock_server, "/", page(50, &[]), 1).await;

    let config = create_test_config(vec![base_url.clone()], 5, 10, dir.path());
    run_crawl(&config).await.unwrap();

    let entries = read_index(&dir.path().join("index.txt")).unwrap();
    assert_eq!(entries.len(), 1);
    assert!(entries[0].url.starts_with(&base_url));
}

#[tokio::test]
async fn test_links_with_fragments_and_documents() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();
    let dir = TempDir::new().unwrap();

    mount_page(
        &mock_server,
        "/",
        page(
            40,
            &["/article#intro", "/article#end", "/report.PDF", "/report.pdf?ok=1", "mailto:a@b.ru"],
        ),
        1,
    )
    .await;
    mount_page(&mock_server, "/article", page(40, &["/#top"]), 1).await;
    mount_page(&mock_server, "/report.pdf", page(40, &[]), 1).await;

    Mock::given(method("GET"))
        .and(path("/report.PDF"))
        .respond_with(html_response(page(40, &[])))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config = create_test_config(vec![format!("{}/#start", base_url)], 10, 10, dir.path());
    let report = run_crawl(&config).await.unwrap();

    assert_eq!(report.pages_accepted, 3);
    assert_eq!(report.urls_visited, 3);
}

#[tokio::test]
async fn test_sends_configured_user_agent() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "Mozilla/5.0"))
        .respond_with(html_response(page(10, &[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = create_test_config(vec![mock_server.uri()], 1, 5, dir.path());
    let mut coordinator = Coordinator::new(&config).unwrap();
    let report = coordinator.run().await.unwrap();

    assert_eq!(report.pages_accepted, 1);
    assert_eq!(coordinator.phase(), CrawlPhase::Done);
}

#[tokio::test]
async fn test_crawl_from_config_file() {
    let mock_server = MockServer::start().await;
    let dir = TempDir::new().unwrap();

    mount_page(&mock_server, "/start", page(12, &[]), 1).await;

    let config_path = dir.path().join("crawler.toml");
    let toml = format!(
        r#"
[crawler]
seeds = ["{}/start"]
target-pages = 1
min-words = 12
delay-ms = 0

[fetcher]
timeout-secs = 5

[output]
index-path = "{}"
pages-dir = "{}"
"#,
        mock_server.uri(),
        dir.path().join("index.txt").display(),
        dir.path().join("out").display()
    );
    fs::write(&config_path, toml).unwrap();

    let config = load_config(&config_path).unwrap();
    let report = run_crawl(&config).await.unwrap();

    assert_eq!(report.pages_accepted, 1);
    assert!(dir.path().join("out").join("page_1.txt").exists());
}

#[test]
fn test_no_seeds_prints_usage_without_crawling() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("crawler.toml");
    fs::write(&config_path, "[crawler]\ntarget-pages = 3\n").unwrap();

    for args in [vec![], vec!["--config", "crawler.toml"]] {
        let output = Command::new(env!("CARGO_BIN_EXE_cyrillic-crawler"))
            .args(&args)
            .current_dir(dir.path())
            .output()
            .expect("Failed to run the crawler binary");

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("Usage:"), "no usage text in: {}", stdout);
    }

    assert!(!dir.path().join("index.txt").exists());
    assert!(!dir.path().join("pages").exists());
}
