#[cfg(test)]
#[path = "mock_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use rand::Rng;
use serde_json::Value;

use crate::domain::models::Agent;
use crate::domain::models::AgentAction;
use crate::domain::models::AgentError;
use crate::domain::models::AgentName;
use crate::domain::models::AgentRequest;
use crate::domain::models::AgentResponse;
use crate::domain::models::PROGRESS_KEY;

/// Keeps demo sessions short no matter how long the pasted list is.
const MOCK_WORD_CAP: usize = 5;

/// Splits pasted words on commas and newlines, trims each token, drops the
/// empties, and dedupes case-sensitively while preserving first-seen order.
pub fn parse_word_list(input: &str) -> Vec<String> {
    let mut words: Vec<String> = vec![];

    for token in input.split(|c: char| return c == ',' || c == '\n') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            continue;
        }
        if words.iter().any(|word| return word == trimmed) {
            continue;
        }
        words.push(trimmed.to_string());
    }

    return words;
}

fn ack() -> &'static str {
    // Stub acknowledgment. The mock never grades answers, it just keeps the
    // conversation moving.
    if rand::thread_rng().gen_bool(0.7) {
        return "Correct! ";
    }

    return "Close enough. ";
}

/// Offline stand-in for the remote training agent. Speaks the identical
/// request/response contract so demos and tests never need a network.
#[derive(Default)]
pub struct MockAgent {}

impl MockAgent {
    fn set_words(&self, request: AgentRequest) -> AgentResponse {
        let words = parse_word_list(&request.input);

        return AgentResponse {
            output: format!(
                "Great! I've saved {count} words. Please choose a training direction.",
                count = words.len()
            ),
            words: Some(words),
            context: Some(request.context),
            is_done: false,
        };
    }

    fn train(&self, request: AgentRequest) -> AgentResponse {
        let mut context = request.context;
        let mut position = context
            .get(PROGRESS_KEY)
            .and_then(|value| return value.as_u64())
            .unwrap_or(0) as usize;

        let mut prefix = "";
        if !request.input.is_empty() {
            prefix = ack();
            position += 1;
        }

        let cap = request.words.len().min(MOCK_WORD_CAP);
        context.insert(PROGRESS_KEY.to_string(), Value::from(position as u64));

        if position >= cap {
            return AgentResponse {
                output: format!("{prefix}That was the last word. Good job!"),
                words: Some(request.words),
                context: Some(context),
                is_done: true,
            };
        }

        let word = &request.words[position];
        let question = match request.action {
            AgentAction::TrainForward => format!(
                "How do you say \"{word}\" in {language}?",
                language = request.language
            ),
            _ => format!("What does \"{word}\" mean in English?"),
        };

        return AgentResponse {
            output: format!("{prefix}{question}"),
            words: Some(request.words),
            context: Some(context),
            is_done: false,
        };
    }

    fn feedback(&self, request: AgentRequest) -> AgentResponse {
        return AgentResponse {
            output: format!(
                "Mock feedback: You practiced {count} words. You are doing great in {language}!",
                count = request.words.len(),
                language = request.language
            ),
            words: Some(request.words),
            context: Some(request.context),
            is_done: true,
        };
    }
}

#[async_trait]
impl Agent for MockAgent {
    fn name(&self) -> AgentName {
        return AgentName::Mock;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn send(&self, request: AgentRequest) -> Result<AgentResponse, AgentError> {
        match request.action {
            AgentAction::SetWords => return Ok(self.set_words(request)),
            AgentAction::TrainForward | AgentAction::TrainReverse => {
                return Ok(self.train(request))
            }
            AgentAction::Feedback => return Ok(self.feedback(request)),
        }
    }
}
