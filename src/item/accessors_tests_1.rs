//! Accessor tests: boolean, string, date, rich-text, and hyperlink fields.

use super::fixtures::{get_item, open_store, write_item};
use super::FieldAccessors;
use chrono::Utc;

#[tokio::test]
async fn test_bool_field_truthy_token() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("ShowInNav", "1")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    assert!(item.bool_field("ShowInNav"));
}

#[tokio::test]
async fn test_bool_field_other_values_are_false() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("A", "0"), ("B", "true"), ("C", ""), ("D", "1 ")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    assert!(!item.bool_field("A"));
    assert!(!item.bool_field("B"));
    assert!(!item.bool_field("C"));
    // Only the exact token counts; trailing whitespace does not
    assert!(!item.bool_field("D"));
}

#[tokio::test]
async fn test_bool_field_missing_is_false() {
    let temp = tempfile::tempdir().unwrap();
    write_item(temp.path(), "page", "en", 1, "Page", &[], "").await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    assert!(!item.bool_field("DoesNotExist"));
}

#[tokio::test]
async fn test_string_field_present() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("Title", "Welcome")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    assert_eq!(item.string_field("Title"), "Welcome");
}

#[tokio::test]
async fn test_string_field_missing_and_empty() {
    let temp = tempfile::tempdir().unwrap();
    write_item(temp.path(), "page", "en", 1, "Page", &[("Blank", "")], "").await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    assert_eq!(item.string_field("Missing"), "");
    assert_eq!(item.string_field("Blank"), "");
}

#[tokio::test]
async fn test_date_field_parses_stored_value() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("ReleaseDate", "2024-06-15T12:30:00Z")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let date = item.date_field("ReleaseDate");
    assert_eq!(date.to_rfc3339(), "2024-06-15T12:30:00+00:00");
}

#[tokio::test]
async fn test_date_field_missing_falls_back_to_now() {
    let temp = tempfile::tempdir().unwrap();
    write_item(temp.path(), "page", "en", 1, "Page", &[], "").await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let date = item.date_field("Missing");
    let drift = (Utc::now() - date).num_seconds().abs();
    assert!(drift < 5, "Fallback should be the current time, drift {drift}s");
}

#[tokio::test]
async fn test_date_field_unparseable_falls_back_to_now() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("ReleaseDate", "not a date")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let drift = (Utc::now() - item.date_field("ReleaseDate")).num_seconds().abs();
    assert!(drift < 5);
}

#[tokio::test]
async fn test_rich_text_field() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("Intro", "<p>Hello</p>")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let rich = item.rich_text_field("Intro").unwrap();
    assert_eq!(rich.as_html(), "<p>Hello</p>");
    assert!(item.rich_text_field("Missing").is_none());
}

#[tokio::test]
async fn test_link_field() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[(
            "MoreInfo",
            r#"{"url": "https://example.org", "text": "Example"}"#,
        )],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let link = item.link_field("MoreInfo").unwrap();
    assert_eq!(link.url(), Some("https://example.org"));
    assert_eq!(link.text(), Some("Example"));
    assert!(item.link_field("Missing").is_none());
}

#[tokio::test]
async fn test_link_field_malformed_payload_is_present_but_empty() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("MoreInfo", "plain text")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let link = item.link_field("MoreInfo").unwrap();
    assert!(link.is_empty());
}
