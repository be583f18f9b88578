use anyhow::Result;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::AgentBox;
use crate::domain::models::Event;

pub struct ActionsService {}

impl ActionsService {
    /// Worker loop between the UI and the agent. Requests are resolved one at
    /// a time; the UI keeps its input hidden until the matching event lands,
    /// so there is never more than one call in flight.
    pub async fn start(
        agent: AgentBox,
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        loop {
            let action = rx.recv().await;
            if action.is_none() {
                return Ok(());
            }

            match action.unwrap() {
                Action::AgentRequest(request) => {
                    let action_tag = request.action;
                    tracing::debug!(action = ?action_tag, "dispatching agent request");

                    match agent.send(request).await {
                        Ok(response) => {
                            tx.send(Event::AgentReply(action_tag, response))?;
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "agent request failed");
                            tx.send(Event::AgentFailure(err))?;
                        }
                    }
                }
            }
        }
    }
}
