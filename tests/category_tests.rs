//! Category selection against datasets on disk.

use std::path::Path;
use std::sync::Arc;

use word_guess::cards::{Category, CategoryCatalog, CategoryStatus, JsonDirSource};
use word_guess::core::{LoadError, Phase, SessionError};
use word_guess::session::GameSession;

fn write_dataset(dir: &Path, name: &str, words: &[&str]) {
    let records: Vec<_> = words
        .iter()
        .enumerate()
        .map(|(i, w)| {
            serde_json::json!({
                "id": format!("{name}-{i}"),
                "word": w,
                "forbiddenWords": ["bir", "iki", "üç", "dört", "beş"],
                "difficulty": "medium",
            })
        })
        .collect();
    std::fs::write(
        dir.join(format!("{name}.json")),
        serde_json::to_vec(&records).unwrap(),
    )
    .unwrap();
}

fn library() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_dataset(dir.path(), "words", &["Elma", "Armut", "Kiraz"]);
    write_dataset(dir.path(), "sinema", &["Yönetmen", "Senaryo"]);
    write_dataset(dir.path(), "yesilcam", &["Hababam"]);
    dir
}

fn session(dir: &Path) -> GameSession {
    GameSession::builder()
        .source(Arc::new(JsonDirSource::new(dir)))
        .seed(5)
        .build()
        .unwrap()
}

#[test]
fn test_default_category_loaded_on_build() {
    let dir = library();
    let s = session(dir.path());

    assert_eq!(s.category(), Some("Klasik"));
    assert_eq!(s.deck().total(), 3);
    let words: Vec<_> = s.deck().remaining().map(|c| c.word.as_str()).collect();
    assert!(words.contains(&"Kiraz"));
}

#[test]
fn test_select_active_category() {
    let dir = library();
    let mut s = session(dir.path());

    assert_eq!(s.select_category("Sinema").unwrap(), 2);
    assert_eq!(s.category(), Some("Sinema"));
    assert_eq!(s.deck().total(), 2);

    s.start_game().unwrap();
    s.start_round().unwrap();
    let word = &s.current_card().unwrap().word;
    assert!(word == "Yönetmen" || word == "Senaryo");
}

#[test]
fn test_premium_category_rejected() {
    let dir = library();
    let mut s = session(dir.path());

    // The dataset exists but the category is locked
    let err = s.select_category("Yeşilçam").unwrap_err();
    assert!(matches!(err, SessionError::CategoryUnavailable(ref t) if t == "Yeşilçam"));
    assert!(matches!(
        s.select_category("Müzik"),
        Err(SessionError::CategoryUnavailable(_))
    ));
    assert_eq!(s.category(), Some("Klasik"));
    assert_eq!(s.deck().total(), 3);
}

#[test]
fn test_unknown_category_rejected() {
    let dir = library();
    let mut s = session(dir.path());

    let err = s.select_category("Mitoloji").unwrap_err();
    assert!(matches!(err, SessionError::UnknownCategory(ref t) if t == "Mitoloji"));
}

#[test]
fn test_failed_load_keeps_previous_deck() {
    let dir = library();
    let mut s = session(dir.path());

    // Listed as active, but no file on disk
    let err = s.select_category("Tarih").unwrap_err();
    assert!(matches!(
        err,
        SessionError::Dataset(LoadError::NotFound(ref name)) if name == "tarih"
    ));
    assert_eq!(s.category(), Some("Klasik"));
    assert_eq!(s.deck().total(), 3);

    std::fs::write(dir.path().join("tarih.json"), "{ not json").unwrap();
    assert!(matches!(
        s.select_category("Tarih"),
        Err(SessionError::Dataset(LoadError::Malformed { .. }))
    ));

    std::fs::write(dir.path().join("tarih.json"), "[]").unwrap();
    assert!(matches!(
        s.select_category("Tarih"),
        Err(SessionError::Dataset(LoadError::Empty(_)))
    ));
    assert_eq!(s.deck().total(), 3);
}

#[test]
fn test_category_locked_during_game() {
    let dir = library();
    let mut s = session(dir.path());
    s.start_game().unwrap();

    let err = s.select_category("Sinema").unwrap_err();
    assert!(matches!(
        err,
        SessionError::InvalidPhase { op: "select_category", phase: Phase::BetweenRounds }
    ));
    assert_eq!(s.category(), Some("Klasik"));

    s.quit_game();
    assert_eq!(s.select_category("Sinema").unwrap(), 2);
}

#[test]
fn test_build_fails_when_default_dataset_missing() {
    let dir = tempfile::tempdir().unwrap();
    let result = GameSession::builder()
        .source(Arc::new(JsonDirSource::new(dir.path())))
        .build();

    assert!(matches!(
        result,
        Err(SessionError::Dataset(LoadError::NotFound(_)))
    ));
}

#[test]
fn test_custom_catalog() {
    let dir = library();
    let catalog = CategoryCatalog::empty()
        .with(Category::active("Film", "sinema"))
        .with(Category::new("Eski Film", "yesilcam", CategoryStatus::Premium));

    let mut s = GameSession::builder()
        .source(Arc::new(JsonDirSource::new(dir.path())))
        .catalog(catalog)
        .seed(9)
        .build()
        .unwrap();

    assert_eq!(s.category(), Some("Film"));
    assert_eq!(s.deck().total(), 2);
    assert!(s.select_category("Klasik").is_err());
}
