#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::AgentResponse;
use super::Language;
use super::Phase;
use super::TrainingMode;
use super::PROGRESS_KEY;

/// The single persisted record driving the whole UI. Mutated between an
/// awaited agent response and the next render, then written back to disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionState {
    pub language: Language,
    pub words: Vec<String>,
    pub context: Map<String, Value>,
    pub phase: Phase,
    pub training_mode: TrainingMode,
}

fn dedupe_words(words: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = vec![];
    for word in words {
        if unique.contains(word) {
            continue;
        }
        unique.push(word.to_string());
    }

    return unique;
}

impl SessionState {
    /// The mode-selection view is derived, not stored: setup phase with a
    /// non-empty word list.
    pub fn mode_select_visible(&self) -> bool {
        return self.phase == Phase::Setup && !self.words.is_empty();
    }

    /// Merges an agent response into the session. Word lists are
    /// re-deduplicated so the no-duplicates invariant holds even when the
    /// remote agent is sloppy. Phase only ever moves here on completion;
    /// mode-start transitions happen before the request goes out.
    pub fn apply_agent_response(&mut self, response: &AgentResponse) {
        if let Some(words) = &response.words {
            self.words = dedupe_words(words);
        }
        if let Some(context) = &response.context {
            self.context = context.clone();
        }
        if response.is_done {
            self.phase = Phase::Done;
        }
    }

    pub fn start_training(&mut self, mode: TrainingMode) {
        self.phase = Phase::Training;
        self.training_mode = mode;
        self.context.remove(PROGRESS_KEY);
    }

    /// Back to mode select for another run: words survive, the training
    /// context does not.
    pub fn train_again(&mut self) {
        self.phase = Phase::Setup;
        self.training_mode = TrainingMode::None;
        self.context = Map::new();
    }

    pub fn clear_words(&mut self) {
        self.words = vec![];
        self.phase = Phase::Setup;
        self.training_mode = TrainingMode::None;
        self.context = Map::new();
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }
}
