#[cfg(test)]
#[path = "http_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use serde_derive::Deserialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Agent;
use crate::domain::models::AgentError;
use crate::domain::models::AgentName;
use crate::domain::models::AgentRequest;
use crate::domain::models::AgentResponse;

const DEFAULT_TIMEOUT_MILLIS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct ErrorResponse {
    error: String,
}

pub struct HttpAgent {
    url: String,
    timeout: Duration,
}

impl Default for HttpAgent {
    fn default() -> HttpAgent {
        let millis = Config::get(ConfigKey::AgentTimeout)
            .parse::<u64>()
            .unwrap_or(DEFAULT_TIMEOUT_MILLIS);

        return HttpAgent {
            url: Config::get(ConfigKey::AgentURL),
            timeout: Duration::from_millis(millis),
        };
    }
}

#[async_trait]
impl Agent for HttpAgent {
    fn name(&self) -> AgentName {
        return AgentName::Http;
    }

    #[allow(clippy::implicit_return)]
    async fn health_check(&self) -> Result<()> {
        if self.url.is_empty() {
            bail!("Training agent URL is not defined");
        }

        // The agent only answers POST. Any status at all proves the endpoint
        // is reachable, so only transport failures count.
        let res = reqwest::Client::new()
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await;

        if res.is_err() {
            tracing::error!(error = ?res.unwrap_err(), "Training agent is not reachable");
            bail!("Training agent is not reachable");
        }

        return Ok(());
    }

    #[allow(clippy::implicit_return)]
    async fn send(&self, request: AgentRequest) -> Result<AgentResponse, AgentError> {
        let res = reqwest::Client::new()
            .post(&self.url)
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await;

        let res = match res {
            Ok(res) => res,
            Err(err) => {
                tracing::error!(error = ?err, "request to the training agent failed");
                return Err(AgentError::Transport(err.to_string()));
            }
        };

        let status = res.status();
        let body = match res.text().await {
            Ok(body) => body,
            Err(err) => {
                tracing::error!(error = ?err, "failed to read the training agent response");
                return Err(AgentError::Transport(err.to_string()));
            }
        };

        if !status.is_success() {
            tracing::error!(
                status = status.as_u16(),
                "training agent returned an error status"
            );

            // Prefer the server-supplied message when the error body parses.
            if let Ok(parsed) = serde_json::from_str::<ErrorResponse>(&body) {
                return Err(AgentError::Server {
                    status: status.as_u16(),
                    message: parsed.error,
                });
            }

            return Err(AgentError::Server {
                status: status.as_u16(),
                message: format!(
                    "the training agent returned HTTP {status}",
                    status = status.as_u16()
                ),
            });
        }

        let response = match serde_json::from_str::<AgentResponse>(&body) {
            Ok(response) => response,
            Err(err) => return Err(AgentError::Contract(err.to_string())),
        };

        tracing::debug!(body = ?response, "agent response");
        return Ok(response);
    }
}
