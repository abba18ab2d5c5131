use super::*;
use crate::fetch::{FsFetcher, HttpFetcher};
use crate::LoaderConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_parse_skips_blank_and_comment_lines() {
    let paths = parse_manifest("a.txt\n# comment\n\nb/c.txt\n");
    assert_eq!(paths, vec!["a.txt", "b/c.txt"]);
}

#[test]
fn test_parse_trims_and_keeps_order() {
    let paths = parse_manifest("  z.txt  \r\n\t# indented comment\na.txt\r\n   \n");
    assert_eq!(paths, vec!["z.txt", "a.txt"]);
}

#[test]
fn test_parse_empty_manifest() {
    assert!(parse_manifest("").is_empty());
    assert!(parse_manifest("# only comments\n\n#\n").is_empty());
}

#[test]
fn test_hash_inside_path_is_kept() {
    let paths = parse_manifest("notes/#draft.md\n");
    assert_eq!(paths, vec!["notes/#draft.md"]);
}

#[test]
fn test_render_manifest_round_trips() {
    let text = render_manifest(["a.txt", "b/c.txt"]);
    assert_eq!(text, "a.txt\nb/c.txt\n");
    assert_eq!(parse_manifest(&text), vec!["a.txt", "b/c.txt"]);
}

#[tokio::test]
async fn test_load_manifest_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/demo/manifest.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("index.html\n# assets\nstyle.css\n"))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&LoaderConfig::default()).unwrap();
    let location = format!("{}/demo/manifest.txt", server.uri());
    let paths = load_manifest(&fetcher, &location).await.unwrap();

    assert_eq!(paths, vec!["index.html", "style.css"]);
}

#[tokio::test]
async fn test_load_manifest_reports_status_text() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing/manifest.txt"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&LoaderConfig::default()).unwrap();
    let location = format!("{}/missing/manifest.txt", server.uri());
    let err = load_manifest(&fetcher, &location).await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(err.to_string().contains("Not Found"));
    assert!(err.to_string().contains("manifest.txt"));
}

#[tokio::test]
async fn test_load_manifest_from_filesystem() {
    let dir = tempfile::tempdir().unwrap();
    let manifest = dir.path().join("manifest.txt");
    std::fs::write(&manifest, "src/main.rs\n\nCargo.toml\n").unwrap();

    let paths = load_manifest(&FsFetcher, manifest.to_str().unwrap())
        .await
        .unwrap();
    assert_eq!(paths, vec!["src/main.rs", "Cargo.toml"]);
}

#[test]
fn test_scan_directory_lists_sorted_relative_paths() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    std::fs::create_dir_all(root.join("src/tree")).unwrap();
    std::fs::create_dir_all(root.join(".git/objects")).unwrap();
    std::fs::write(root.join("src/tree/mod.rs"), "").unwrap();
    std::fs::write(root.join("src/lib.rs"), "").unwrap();
    std::fs::write(root.join("Cargo.toml"), "").unwrap();
    std::fs::write(root.join("manifest.txt"), "stale\n").unwrap();
    std::fs::write(root.join(".git/objects/pack"), "").unwrap();
    std::fs::write(root.join(".gitignore"), "").unwrap();

    let paths = scan_directory(root, "manifest.txt").unwrap();
    assert_eq!(
        paths,
        vec![".gitignore", "Cargo.toml", "src/lib.rs", "src/tree/mod.rs"]
    );
}
