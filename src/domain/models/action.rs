use super::AgentRequest;

pub enum Action {
    AgentRequest(AgentRequest),
}
