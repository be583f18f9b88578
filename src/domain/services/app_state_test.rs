use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use tempfile::TempDir;

use super::AppState;
use super::StateStore;
use crate::domain::models::Action;
use crate::domain::models::AgentAction;
use crate::domain::models::AgentError;
use crate::domain::models::AgentName;
use crate::domain::models::AgentRequest;
use crate::domain::models::AgentResponse;
use crate::domain::models::Author;
use crate::domain::models::Language;
use crate::domain::models::MessageType;
use crate::domain::models::Phase;
use crate::domain::models::SessionState;
use crate::domain::models::TrainingMode;

fn test_app_state() -> (AppState, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));
    return (AppState::new(store), dir);
}

fn unwrap_request(action: Option<Action>) -> Result<AgentRequest> {
    if action.is_none() {
        bail!("Expected an action");
    }

    match action.unwrap() {
        Action::AgentRequest(request) => return Ok(request),
    }
}

fn words_response(words: Vec<&str>) -> AgentResponse {
    return AgentResponse {
        output: "Great! I've saved 3 words. Please choose a training direction.".to_string(),
        words: Some(words.iter().map(|w| return w.to_string()).collect()),
        context: None,
        is_done: false,
    };
}

#[test]
fn it_ignores_empty_word_submissions() {
    let (mut app_state, _dir) = test_app_state();

    assert!(app_state.submit_words("").is_none());
    assert!(app_state.submit_words("   \n  ").is_none());
    assert!(!app_state.waiting_for_agent);
    assert_eq!(app_state.session.phase, Phase::Setup);
    assert!(app_state.session.words.is_empty());
}

#[test]
fn it_builds_a_set_words_request() -> Result<()> {
    let (mut app_state, _dir) = test_app_state();

    let request = unwrap_request(app_state.submit_words("  apple, run  "))?;

    assert_eq!(request.action, AgentAction::SetWords);
    assert_eq!(request.input, "apple, run");
    assert_eq!(request.language, Language::Hebrew);
    assert!(app_state.waiting_for_agent);

    return Ok(());
}

#[test]
fn it_stays_in_setup_after_words_are_saved() {
    let (mut app_state, _dir) = test_app_state();
    app_state.submit_words("apple, run, beautiful");

    app_state.handle_agent_reply(
        AgentAction::SetWords,
        words_response(vec!["apple", "run", "beautiful"]),
    );

    assert_eq!(app_state.session.phase, Phase::Setup);
    assert_eq!(app_state.session.words.len(), 3);
    assert!(app_state.session.mode_select_visible());
    assert!(!app_state.waiting_for_agent);
    // The confirmation shows on the mode-select view, not in the transcript.
    assert!(app_state.messages.is_empty());
    assert!(app_state.setup_notice.as_ref().unwrap().contains('3'));
}

#[test]
fn it_issues_one_initial_request_on_mode_start() -> Result<()> {
    let (mut app_state, _dir) = test_app_state();
    app_state.handle_agent_reply(AgentAction::SetWords, words_response(vec!["apple", "run"]));

    let request = unwrap_request(app_state.start_training(TrainingMode::Forward))?;

    assert_eq!(request.action, AgentAction::TrainForward);
    assert_eq!(request.input, "");
    assert_eq!(request.words, vec!["apple".to_string(), "run".to_string()]);
    assert_eq!(app_state.session.phase, Phase::Training);
    assert_eq!(app_state.session.training_mode, TrainingMode::Forward);
    assert!(app_state.waiting_for_agent);

    return Ok(());
}

#[test]
fn it_refuses_to_train_without_a_direction() {
    let (mut app_state, _dir) = test_app_state();
    assert!(app_state.start_training(TrainingMode::None).is_none());
    assert!(!app_state.waiting_for_agent);
}

#[test]
fn it_appends_training_turns_to_the_transcript() -> Result<()> {
    let (mut app_state, _dir) = test_app_state();
    app_state.handle_agent_reply(AgentAction::SetWords, words_response(vec!["apple", "run"]));
    app_state.start_training(TrainingMode::Reverse);
    app_state.handle_agent_reply(
        AgentAction::TrainReverse,
        AgentResponse {
            output: "What does \"apple\" mean in English?".to_string(),
            words: None,
            context: None,
            is_done: false,
        },
    );

    let request = unwrap_request(app_state.submit_answer("a fruit"))?;

    assert_eq!(request.action, AgentAction::TrainReverse);
    assert_eq!(request.input, "a fruit");
    assert_eq!(app_state.messages.len(), 2);
    assert_eq!(app_state.messages[0].author, Author::Agent);
    assert_eq!(app_state.messages[1].author, Author::User);
    assert_eq!(app_state.session.phase, Phase::Training);

    return Ok(());
}

#[test]
fn it_ignores_empty_answers() {
    let (mut app_state, _dir) = test_app_state();
    app_state.handle_agent_reply(AgentAction::SetWords, words_response(vec!["apple"]));
    app_state.start_training(TrainingMode::Forward);
    app_state.waiting_for_agent = false;

    assert!(app_state.submit_answer("   ").is_none());
    assert!(!app_state.waiting_for_agent);
}

#[test]
fn it_finishes_on_completion() {
    let (mut app_state, _dir) = test_app_state();
    app_state.handle_agent_reply(AgentAction::SetWords, words_response(vec!["apple"]));
    app_state.start_training(TrainingMode::Forward);

    app_state.handle_agent_reply(
        AgentAction::TrainForward,
        AgentResponse {
            output: "That was the last word. Good job!".to_string(),
            words: None,
            context: None,
            is_done: true,
        },
    );

    assert_eq!(app_state.session.phase, Phase::Done);
}

#[test]
fn it_requests_feedback_only_when_done() -> Result<()> {
    let (mut app_state, _dir) = test_app_state();
    assert!(app_state.request_feedback().is_none());

    app_state.session.phase = Phase::Done;
    app_state.session.training_mode = TrainingMode::Forward;
    let request = unwrap_request(app_state.request_feedback())?;

    assert_eq!(request.action, AgentAction::Feedback);
    assert_eq!(request.input, "");

    return Ok(());
}

#[test]
fn it_keeps_state_on_agent_failure() {
    let (mut app_state, _dir) = test_app_state();
    app_state.handle_agent_reply(AgentAction::SetWords, words_response(vec!["apple", "run"]));
    let words_before = app_state.session.words.clone();
    app_state.submit_words("pear, plum");

    app_state.handle_agent_failure(AgentError::Transport("connection refused".to_string()));

    assert_eq!(app_state.session.words, words_before);
    assert_eq!(app_state.session.phase, Phase::Setup);
    assert!(!app_state.waiting_for_agent);
    assert_eq!(
        app_state.error_banner.as_deref(),
        Some(Language::Hebrew.strings().error_network)
    );
}

#[test]
fn it_shows_server_messages_on_server_errors() {
    let (mut app_state, _dir) = test_app_state();

    app_state.handle_agent_failure(AgentError::Server {
        status: 500,
        message: "the agent is overloaded".to_string(),
    });

    assert_eq!(
        app_state.error_banner.as_deref(),
        Some("the agent is overloaded")
    );
}

#[test]
fn it_restores_the_session_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let mut app_state = AppState::new(StateStore::new(dir.path().join("state.json")));

    app_state.handle_agent_reply(
        AgentAction::SetWords,
        words_response(vec!["apple", "run", "beautiful"]),
    );
    app_state.cycle_language();
    let session_before = app_state.session.clone();

    let restored = AppState::new(StateStore::new(dir.path().join("state.json")));

    assert_eq!(restored.session, session_before);
}

#[test]
fn it_resets_for_train_again() {
    let (mut app_state, _dir) = test_app_state();
    app_state.handle_agent_reply(AgentAction::SetWords, words_response(vec!["apple", "run"]));
    app_state.start_training(TrainingMode::Forward);
    app_state.handle_agent_reply(
        AgentAction::TrainForward,
        AgentResponse {
            output: "Good job!".to_string(),
            words: None,
            context: None,
            is_done: true,
        },
    );

    app_state.train_again();

    assert_eq!(app_state.session.phase, Phase::Setup);
    assert_eq!(app_state.session.words.len(), 2);
    assert!(app_state.session.context.is_empty());
    assert!(app_state.messages.is_empty());
    assert!(app_state.session.mode_select_visible());
}

#[tokio::test]
async fn it_seeds_the_configured_language_on_first_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = StateStore::new(dir.path().join("state.json"));

    let app_state = AppState::init(store, AgentName::Mock, Language::Spanish).await;

    assert_eq!(app_state.session.language, Language::Spanish);
    assert!(app_state.error_banner.is_none());
    assert!(app_state.messages.is_empty());
}

#[tokio::test]
async fn it_keeps_the_saved_language_over_the_configured_one() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("state.json");

    let mut session = SessionState::default();
    session.set_language(Language::Ukrainian);
    session.words = vec!["apple".to_string()];
    StateStore::new(path.clone()).save(&session)?;

    let app_state =
        AppState::init(StateStore::new(path), AgentName::Mock, Language::Spanish).await;

    assert_eq!(app_state.session.language, Language::Ukrainian);
    assert_eq!(app_state.session.words, vec!["apple".to_string()]);

    return Ok(());
}

#[test]
fn it_reports_unreachable_agents_in_the_transcript() {
    let (mut app_state, _dir) = test_app_state();

    app_state.report_unreachable_agent(&anyhow!("connection refused"));

    assert_eq!(app_state.messages.len(), 1);
    assert_eq!(app_state.messages[0].message_type(), MessageType::Error);
    assert_eq!(app_state.messages[0].author, Author::Polyglot);
    assert_eq!(
        app_state.error_banner.as_deref(),
        Some(Language::Hebrew.strings().error_network)
    );
}

#[test]
fn it_cycles_language_without_touching_words() {
    let (mut app_state, _dir) = test_app_state();
    app_state.handle_agent_reply(AgentAction::SetWords, words_response(vec!["apple"]));

    app_state.cycle_language();

    assert_eq!(app_state.session.language, Language::Russian);
    assert_eq!(app_state.session.words, vec!["apple".to_string()]);
    assert_eq!(app_state.session.phase, Phase::Setup);
}
