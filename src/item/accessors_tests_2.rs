//! Accessor tests: references, multi-references, media, and language
//! versions.

use super::fixtures::{get_item, open_store, write_config, write_item, write_media_item};
use super::FieldAccessors;
use crate::id::ItemId;
use crate::language::Language;

#[tokio::test]
async fn test_reference_field_present_and_missing() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("Author", "jane-doe")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let reference = item.reference_field("Author").unwrap();
    assert_eq!(reference.target_id(), Some(ItemId::from_slug("jane-doe")));
    assert!(item.reference_field("Missing").is_none());
}

#[tokio::test]
async fn test_reference_target_resolves() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("Author", "jane-doe")],
        "",
    )
    .await;
    write_item(temp.path(), "jane-doe", "en", 1, "Jane Doe", &[], "").await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let target = item.reference_target("Author").unwrap();
    assert_eq!(target.id(), &ItemId::from_slug("jane-doe"));
    assert_eq!(target.name(), "Jane Doe");
}

#[tokio::test]
async fn test_reference_target_absent_target() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("Author", "nobody"), ("Cleared", "")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    // Field exists but its target does not
    assert!(item.reference_target("Author").is_none());
    // Field exists but holds no identity
    assert!(item.reference_target("Cleared").is_none());
    // Field itself is missing
    assert!(item.reference_target("Missing").is_none());
}

#[tokio::test]
async fn test_reference_target_in_unpopulated_language_is_shell() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "da",
        1,
        "Side",
        &[("Author", "jane-doe")],
        "",
    )
    .await;
    write_item(temp.path(), "jane-doe", "en", 1, "Jane Doe", &[], "").await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "da");
    let target = item.reference_target("Author").unwrap();
    assert!(target.is_shell());
    assert_eq!(target.language(), &Language::parse("da").unwrap());
}

#[tokio::test]
async fn test_multilist_field_missing_vs_empty() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("Related", "")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");

    // Field present but empty: an empty list, not "no field"
    let targets = item.multilist_targets("Related").unwrap();
    assert!(targets.is_empty());

    // Field missing entirely
    assert!(item.multilist_targets("Missing").is_none());
    assert!(item.multilist_field("Missing").is_none());
}

#[tokio::test]
async fn test_multilist_targets_ordered() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("Related", "third|first")],
        "",
    )
    .await;
    write_item(temp.path(), "first", "en", 1, "First", &[], "").await;
    write_item(temp.path(), "third", "en", 1, "Third", &[], "").await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let targets = item.multilist_targets("Related").unwrap();
    let names: Vec<&str> = targets.iter().map(|target| target.name()).collect();
    assert_eq!(names, vec!["Third", "First"]);
}

#[tokio::test]
async fn test_multilist_targets_skip_unresolvable() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("Related", "first|gone|third")],
        "",
    )
    .await;
    write_item(temp.path(), "first", "en", 1, "First", &[], "").await;
    write_item(temp.path(), "third", "en", 1, "Third", &[], "").await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let targets = item.multilist_targets("Related").unwrap();
    assert_eq!(targets.len(), 2);
}

#[tokio::test]
async fn test_media_item_field_resolves() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("Hero", r#"{"mediaId": "team-photo", "alt": "Inline alt"}"#)],
        "",
    )
    .await;
    write_media_item(
        temp.path(),
        "team-photo",
        "en",
        "Team Photo",
        "media/team.jpg",
        "image/jpeg",
        "The team",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    let media = item.media_item_field("Hero").unwrap();
    assert_eq!(media.id(), &ItemId::from_slug("team-photo"));
    assert_eq!(media.path(), "media/team.jpg");
    assert_eq!(media.mime_type(), "image/jpeg");
    assert_eq!(media.alt(), "The team");
    assert_eq!(media.size(), 2048);
    assert_eq!(media.extension(), "jpg");
}

#[tokio::test]
async fn test_media_item_field_absent_cases() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[
            ("Empty", ""),
            ("Dangling", r#"{"mediaId": "gone"}"#),
        ],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    assert!(item.media_item_field("Missing").is_none());
    assert!(item.media_item_field("Empty").is_none());
    assert!(item.media_item_field("Dangling").is_none());
}

#[tokio::test]
async fn test_media_resolution_falls_back_across_languages() {
    let temp = tempfile::tempdir().unwrap();
    // Context and referring item are Danish; the media record only exists in
    // English, so resolution falls back to the populated language
    write_config(temp.path(), "da").await;
    write_item(
        temp.path(),
        "page",
        "da",
        1,
        "Side",
        &[("Hero", r#"{"mediaId": "team-photo"}"#)],
        "",
    )
    .await;
    write_media_item(
        temp.path(),
        "team-photo",
        "en",
        "Team Photo",
        "media/team.jpg",
        "image/jpeg",
        "The team",
    )
    .await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "da");
    let media = item.media_item_field("Hero").unwrap();
    assert_eq!(media.path(), "media/team.jpg");
}

#[tokio::test]
async fn test_has_language_version() {
    let temp = tempfile::tempdir().unwrap();
    write_item(temp.path(), "page", "en", 1, "Page", &[], "").await;
    write_item(temp.path(), "page", "da", 1, "Side", &[], "").await;

    let db = open_store(temp.path()).await;
    let item = get_item(&db, "page", "en");
    assert!(item.has_language_version());
    assert!(item.has_language_version_in(&Language::parse("da").unwrap()));
    assert!(!item.has_language_version_in(&Language::parse("sv").unwrap()));
}

#[tokio::test]
async fn test_has_language_version_uses_context_language() {
    let temp = tempfile::tempdir().unwrap();
    write_config(temp.path(), "da-DK").await;
    write_item(temp.path(), "page", "da-DK", 1, "Side", &[], "").await;

    let db = open_store(temp.path()).await;
    // Read the English shell; the context-language check still passes
    let item = get_item(&db, "page", "en");
    assert!(item.is_shell());
    assert!(item.has_language_version());
    assert!(!item.has_language_version_in(&Language::english()));
}

#[tokio::test]
async fn test_accessors_on_shell_use_safe_defaults() {
    let temp = tempfile::tempdir().unwrap();
    write_item(
        temp.path(),
        "page",
        "en",
        1,
        "Page",
        &[("Title", "Welcome"), ("ShowInNav", "1")],
        "",
    )
    .await;

    let db = open_store(temp.path()).await;
    let shell = get_item(&db, "page", "sv");
    assert!(shell.is_shell());
    assert_eq!(shell.string_field("Title"), "");
    assert!(!shell.bool_field("ShowInNav"));
    assert!(shell.multilist_targets("Related").is_none());
}
