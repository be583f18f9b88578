#[cfg(test)]
#[path = "agent_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;
use serde_derive::Serialize;
use serde_json::Map;
use serde_json::Value;
use strum::Display;
use strum::EnumIter;
use strum::EnumString;
use strum::EnumVariantNames;
use thiserror::Error;

use super::Language;

/// Context key under which training agents keep their position in the word
/// list. The client only ever resets it; it never interprets the value.
pub const PROGRESS_KEY: &str = "position";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumString, EnumIter, EnumVariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum AgentName {
    Http,
    Mock,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentAction {
    SetWords,
    TrainForward,
    TrainReverse,
    Feedback,
}

/// One call to the training agent. Constructed fresh from session state for
/// every request; never stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AgentRequest {
    pub input: String,
    pub action: AgentAction,
    pub language: Language,
    pub words: Vec<String>,
    pub context: Map<String, Value>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AgentResponse {
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Map<String, Value>>,
    #[serde(rename = "isDone", default)]
    pub is_done: bool,
}

#[derive(Debug, Error)]
pub enum AgentError {
    /// The request never produced a response. Rendered with the localized
    /// network error string rather than this message.
    #[error("failed to reach the training agent: {0}")]
    Transport(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("the training agent returned an invalid response: {0}")]
    Contract(String),
}

impl AgentError {
    pub fn is_transport(&self) -> bool {
        return matches!(self, AgentError::Transport(_));
    }
}

pub type AgentBox = Box<dyn Agent + Send + Sync>;

#[async_trait]
pub trait Agent {
    fn name(&self) -> AgentName;

    /// Used at startup to verify the agent can be worked with at all.
    async fn health_check(&self) -> Result<()>;

    /// Resolves one request against the agent. Implementations never touch
    /// session state; callers merge the response themselves.
    async fn send(&self, request: AgentRequest) -> Result<AgentResponse, AgentError>;
}
