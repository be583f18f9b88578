#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Error;
use strum::IntoEnumIterator;

use super::StateStore;
use super::Transcript;
use crate::domain::models::Action;
use crate::domain::models::AgentAction;
use crate::domain::models::AgentError;
use crate::domain::models::AgentName;
use crate::domain::models::AgentRequest;
use crate::domain::models::AgentResponse;
use crate::domain::models::Author;
use crate::domain::models::Language;
use crate::domain::models::Message;
use crate::domain::models::MessageType;
use crate::domain::models::Phase;
use crate::domain::models::SessionState;
use crate::domain::models::Strings;
use crate::domain::models::TrainingMode;
use crate::infrastructure::agents::AgentManager;

/// Everything the UI renders from, in one place: the persisted session plus
/// the transient view state that never hits disk. Methods that talk to the
/// agent return the `Action` to dispatch instead of performing I/O, so every
/// transition is testable without a terminal or a network.
pub struct AppState {
    pub session: SessionState,
    pub messages: Vec<Message>,
    pub transcript: Transcript,
    pub waiting_for_agent: bool,
    pub error_banner: Option<String>,
    pub setup_notice: Option<String>,
    store: StateStore,
}

impl AppState {
    pub fn new(store: StateStore) -> AppState {
        let session = store.load();

        return AppState {
            session,
            messages: vec![],
            transcript: Transcript::default(),
            waiting_for_agent: false,
            error_banner: None,
            setup_notice: None,
            store,
        };
    }

    /// Startup state for the UI loop: restores the saved session, seeds the
    /// configured language on first run, and probes the agent once.
    pub async fn init(store: StateStore, agent_name: AgentName, language: Language) -> AppState {
        let first_run = !store.path.exists();
        let mut app_state = AppState::new(store);

        if first_run {
            app_state.session.set_language(language);
            app_state.persist();
        }

        if let Err(err) = AgentManager::get(agent_name).health_check().await {
            tracing::error!(error = ?err, "agent failed its startup check");
            app_state.report_unreachable_agent(&err);
        }

        return app_state;
    }

    pub fn strings(&self) -> &'static Strings {
        return self.session.language.strings();
    }

    fn persist(&self) {
        if let Err(err) = self.store.save(&self.session) {
            tracing::error!(error = ?err, "failed to persist session state");
        }
    }

    fn build_request(&self, action: AgentAction, input: &str) -> AgentRequest {
        return AgentRequest {
            input: input.to_string(),
            action,
            language: self.session.language,
            words: self.session.words.clone(),
            context: self.session.context.clone(),
        };
    }

    /// Empty submissions are dropped outright: no request, no error shown.
    pub fn submit_words(&mut self, text: &str) -> Option<Action> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        self.error_banner = None;
        self.waiting_for_agent = true;
        return Some(Action::AgentRequest(
            self.build_request(AgentAction::SetWords, trimmed),
        ));
    }

    /// Flips the session into training and yields the initial request. The
    /// first prompt comes from the agent, so the request carries no input.
    pub fn start_training(&mut self, mode: TrainingMode) -> Option<Action> {
        let action = mode.agent_action()?;

        self.session.start_training(mode);
        self.messages = vec![];
        self.transcript.last();
        self.error_banner = None;
        self.persist();

        self.waiting_for_agent = true;
        return Some(Action::AgentRequest(self.build_request(action, "")));
    }

    pub fn submit_answer(&mut self, text: &str) -> Option<Action> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        let action = self.session.training_mode.agent_action()?;

        self.messages.push(Message::new(Author::User, trimmed));
        self.transcript.last();
        self.error_banner = None;
        self.waiting_for_agent = true;
        return Some(Action::AgentRequest(self.build_request(action, trimmed)));
    }

    pub fn request_feedback(&mut self) -> Option<Action> {
        if self.session.phase != Phase::Done {
            return None;
        }

        self.error_banner = None;
        self.waiting_for_agent = true;
        return Some(Action::AgentRequest(
            self.build_request(AgentAction::Feedback, ""),
        ));
    }

    pub fn train_again(&mut self) {
        self.session.train_again();
        self.messages = vec![];
        self.setup_notice = None;
        self.persist();
    }

    pub fn clear_words(&mut self) {
        self.session.clear_words();
        self.messages = vec![];
        self.setup_notice = None;
        self.persist();
    }

    pub fn cycle_language(&mut self) {
        let languages = Language::iter().collect::<Vec<Language>>();
        let idx = languages
            .iter()
            .position(|language| return *language == self.session.language)
            .unwrap_or(0);
        self.session.set_language(languages[(idx + 1) % languages.len()]);
        self.persist();
    }

    pub fn handle_agent_reply(&mut self, action: AgentAction, response: AgentResponse) {
        self.waiting_for_agent = false;
        self.error_banner = None;
        self.session.apply_agent_response(&response);

        if action == AgentAction::SetWords {
            // Word confirmations belong on the mode-select view, not in the
            // training transcript.
            self.setup_notice = Some(response.output);
        } else if !response.output.is_empty() {
            self.messages.push(Message::new(Author::Agent, &response.output));
            self.transcript.last();
        }

        self.persist();
    }

    /// Failures never touch the session: words and phase stay as they were
    /// and the user is free to retry.
    pub fn handle_agent_failure(&mut self, err: AgentError) {
        self.waiting_for_agent = false;

        if err.is_transport() {
            self.error_banner = Some(self.strings().error_network.to_string());
        } else {
            self.error_banner = Some(err.to_string());
        }
    }

    fn report_unreachable_agent(&mut self, err: &Error) {
        self.error_banner = Some(self.strings().error_network.to_string());
        self.messages.push(Message::new_with_type(
            Author::Polyglot,
            MessageType::Error,
            &format!(
                "The training agent failed its startup check. Requests will fail until it is reachable again.\n\nError: {err}"
            ),
        ));
    }
}
