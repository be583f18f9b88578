use anyhow::Result;
use serde_json::json;
use serde_json::Map;
use serde_json::Value;

use super::AgentResponse;
use super::Language;
use super::Phase;
use super::SessionState;
use super::TrainingMode;
use super::PROGRESS_KEY;

fn response_with_words(words: Vec<&str>) -> AgentResponse {
    return AgentResponse {
        output: "saved".to_string(),
        words: Some(words.iter().map(|w| return w.to_string()).collect()),
        context: None,
        is_done: false,
    };
}

#[test]
fn it_starts_in_setup_with_defaults() {
    let session = SessionState::default();
    assert_eq!(session.language, Language::Hebrew);
    assert_eq!(session.phase, Phase::Setup);
    assert_eq!(session.training_mode, TrainingMode::None);
    assert!(session.words.is_empty());
    assert!(session.context.is_empty());
    assert!(!session.mode_select_visible());
}

#[test]
fn it_replaces_and_dedupes_agent_word_lists() {
    let mut session = SessionState::default();
    session.words = vec!["old".to_string()];

    session.apply_agent_response(&response_with_words(vec!["apple", "apple", "run"]));

    assert_eq!(session.words, vec!["apple".to_string(), "run".to_string()]);
    assert_eq!(session.phase, Phase::Setup);
    assert!(session.mode_select_visible());
}

#[test]
fn it_keeps_words_when_the_response_carries_none() {
    let mut session = SessionState::default();
    session.words = vec!["apple".to_string()];

    session.apply_agent_response(&AgentResponse {
        output: "a question".to_string(),
        words: None,
        context: None,
        is_done: false,
    });

    assert_eq!(session.words, vec!["apple".to_string()]);
}

#[test]
fn it_replaces_context_from_responses() {
    let mut session = SessionState::default();

    let mut context = Map::new();
    context.insert(PROGRESS_KEY.to_string(), Value::from(2));
    session.apply_agent_response(&AgentResponse {
        output: "next".to_string(),
        words: None,
        context: Some(context),
        is_done: false,
    });

    assert_eq!(session.context.get(PROGRESS_KEY), Some(&Value::from(2)));
}

#[test]
fn it_moves_to_done_on_completion_regardless_of_phase() {
    let done = AgentResponse {
        output: "bye".to_string(),
        words: None,
        context: None,
        is_done: true,
    };

    let mut session = SessionState::default();
    session.start_training(TrainingMode::Forward);
    session.apply_agent_response(&done);
    assert_eq!(session.phase, Phase::Done);

    let mut session = SessionState::default();
    session.apply_agent_response(&done);
    assert_eq!(session.phase, Phase::Done);
}

#[test]
fn it_starts_training_and_resets_the_progress_marker() {
    let mut session = SessionState::default();
    session.words = vec!["apple".to_string()];
    session
        .context
        .insert(PROGRESS_KEY.to_string(), Value::from(4));

    session.start_training(TrainingMode::Reverse);

    assert_eq!(session.phase, Phase::Training);
    assert_eq!(session.training_mode, TrainingMode::Reverse);
    assert_eq!(session.context.get(PROGRESS_KEY), None);
    assert!(!session.mode_select_visible());
}

#[test]
fn it_retains_words_on_train_again() {
    let mut session = SessionState::default();
    session.words = vec!["apple".to_string(), "run".to_string()];
    session.start_training(TrainingMode::Forward);
    session
        .context
        .insert(PROGRESS_KEY.to_string(), Value::from(5));
    session.phase = Phase::Done;

    session.train_again();

    assert_eq!(session.phase, Phase::Setup);
    assert_eq!(session.training_mode, TrainingMode::None);
    assert!(session.context.is_empty());
    assert_eq!(session.words.len(), 2);
    assert!(session.mode_select_visible());
}

#[test]
fn it_clears_words_from_any_phase() {
    let mut session = SessionState::default();
    session.words = vec!["apple".to_string()];
    session.start_training(TrainingMode::Forward);

    session.clear_words();

    assert_eq!(session.phase, Phase::Setup);
    assert!(session.words.is_empty());
    assert!(session.context.is_empty());
    assert_eq!(session.training_mode, TrainingMode::None);
}

#[test]
fn it_never_touches_words_or_phase_on_language_change() {
    let mut session = SessionState::default();
    session.words = vec!["apple".to_string()];
    session.start_training(TrainingMode::Forward);

    session.set_language(Language::French);

    assert_eq!(session.language, Language::French);
    assert_eq!(session.words, vec!["apple".to_string()]);
    assert_eq!(session.phase, Phase::Training);
    assert_eq!(session.training_mode, TrainingMode::Forward);
}

#[test]
fn it_round_trips_through_json() -> Result<()> {
    let mut session = SessionState::default();
    session.language = Language::Ukrainian;
    session.words = vec!["apple".to_string(), "run".to_string()];
    session.start_training(TrainingMode::Forward);

    let payload = serde_json::to_string(&session)?;
    let restored: SessionState = serde_json::from_str(&payload)?;

    assert_eq!(restored, session);

    let value: Value = serde_json::from_str(&payload)?;
    assert_eq!(value.get("trainingMode"), Some(&json!("forward")));
    assert_eq!(value.get("phase"), Some(&json!("training")));

    return Ok(());
}

#[test]
fn it_fills_missing_fields_with_defaults() -> Result<()> {
    let session: SessionState = serde_json::from_str(r#"{"language": "French"}"#)?;
    assert_eq!(session.language, Language::French);
    assert_eq!(session.phase, Phase::Setup);
    assert!(session.words.is_empty());

    return Ok(());
}
