use super::AgentAction;
use super::AgentError;
use super::AgentResponse;

pub enum Event {
    AgentReply(AgentAction, AgentResponse),
    AgentFailure(AgentError),
}
