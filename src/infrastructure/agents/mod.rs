pub mod http;
pub mod mock;

use crate::domain::models::AgentBox;
use crate::domain::models::AgentName;

pub struct AgentManager {}

impl AgentManager {
    pub fn get(name: AgentName) -> AgentBox {
        match name {
            AgentName::Http => return Box::<http::HttpAgent>::default(),
            AgentName::Mock => return Box::<mock::MockAgent>::default(),
        }
    }
}
