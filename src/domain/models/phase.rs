use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::AgentAction;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Setup,
    Training,
    Done,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingMode {
    #[default]
    None,
    Forward,
    Reverse,
}

impl TrainingMode {
    /// The agent action that drives a training turn in this direction.
    pub fn agent_action(&self) -> Option<AgentAction> {
        match self {
            TrainingMode::None => return None,
            TrainingMode::Forward => return Some(AgentAction::TrainForward),
            TrainingMode::Reverse => return Some(AgentAction::TrainReverse),
        }
    }
}
