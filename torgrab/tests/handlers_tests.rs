use std::fs;
use tempfile::tempdir;
use torgrab::handlers::*;

#[test]
fn test_render_links_text_joins_with_newlines() {
    let links = vec!["/a".to_string(), "http://b".to_string()];
    let rendered = render_links(&links, &LinkFormat::Text).unwrap();
    assert_eq!(rendered, "/a\nhttp://b");
}

#[test]
fn test_render_links_text_empty_sequence() {
    let rendered = render_links(&[], &LinkFormat::Text).unwrap();
    assert_eq!(rendered, "");
}

#[test]
fn test_render_links_text_keeps_duplicates_and_order() {
    let links = vec![
        "/same".to_string(),
        "/other".to_string(),
        "/same".to_string(),
    ];
    let rendered = render_links(&links, &LinkFormat::Text).unwrap();
    assert_eq!(rendered, "/same\n/other\n/same");
}

#[test]
fn test_render_links_json_round_trips() {
    let links = vec!["/a".to_string(), "".to_string(), "#top".to_string()];
    let rendered = render_links(&links, &LinkFormat::Json).unwrap();

    let parsed: Vec<String> = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, links);
}

#[test]
fn test_link_format_from_str() {
    assert!(matches!(LinkFormat::from_str("text"), Some(LinkFormat::Text)));
    assert!(matches!(LinkFormat::from_str("json"), Some(LinkFormat::Json)));
    assert!(LinkFormat::from_str("yaml").is_none());
}

#[test]
fn test_resolve_output_path_expands_tilde() {
    let path = resolve_output_path("~/captures/page.html");
    assert!(!path.to_string_lossy().starts_with('~'));
    assert!(path.to_string_lossy().ends_with("captures/page.html"));
}

#[test]
fn test_resolve_output_path_plain_path_untouched() {
    let path = resolve_output_path("out/links.txt");
    assert_eq!(path.to_string_lossy(), "out/links.txt");
}

#[test]
fn test_save_output_writes_bytes_intact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("links.txt");

    save_output(b"/a\nhttp://b", &path).unwrap();

    let written = fs::read(&path).unwrap();
    assert_eq!(written, b"/a\nhttp://b");
}
