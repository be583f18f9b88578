use anyhow::Result;

use super::StateStore;
use crate::domain::models::Language;
use crate::domain::models::Phase;
use crate::domain::models::SessionState;
use crate::domain::models::TrainingMode;

#[test]
fn it_falls_back_to_defaults_when_no_record_exists() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = StateStore::new(dir.path().join("state.json"));

    assert_eq!(store.load(), SessionState::default());

    return Ok(());
}

#[test]
fn it_round_trips_session_state() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = StateStore::new(dir.path().join("state.json"));

    let mut session = SessionState::default();
    session.language = Language::Spanish;
    session.words = vec!["apple".to_string(), "run".to_string()];
    session.start_training(TrainingMode::Reverse);

    store.save(&session)?;
    let restored = store.load();

    assert_eq!(restored, session);
    assert_eq!(restored.phase, Phase::Training);

    return Ok(());
}

#[test]
fn it_falls_back_to_defaults_on_a_malformed_record() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json")?;

    let store = StateStore::new(path);
    assert_eq!(store.load(), SessionState::default());

    return Ok(());
}

#[test]
fn it_resets_by_deleting_the_record() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = StateStore::new(dir.path().join("state.json"));

    store.save(&SessionState::default())?;
    assert!(store.path.exists());

    store.reset()?;
    assert!(!store.path.exists());

    // Resetting twice is fine.
    store.reset()?;

    return Ok(());
}
