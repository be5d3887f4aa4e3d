use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use vestibule_core::{FormState, SubmitOutcome};

use crate::config::Config;
use crate::error::{SubmitError, SubmitResult};

/// Registration endpoint client.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    http: Client,
    endpoint: String,
}

/// Body the endpoint sends back. Only `message` is ever looked at.
#[derive(Debug, Deserialize)]
pub struct ServerReply {
    #[serde(default)]
    pub message: Option<String>,
}

impl RegistrationClient {
    /// Create a new registration client.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("vestibule/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }

    /// The endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST one registration.
    ///
    /// Any 2xx response is a success; its body is not required to contain
    /// anything, though a JSON `message` is logged when present. A non-2xx
    /// response is reported as [`SubmitError::Rejected`] carrying the
    /// response body's `message` verbatim, with the status line as the
    /// fallback when the body holds no message.
    ///
    /// # Errors
    /// Returns an error if the endpoint rejects the registration or the
    /// request fails at the transport level.
    pub async fn submit(&self, registration: &FormState) -> SubmitResult<ServerReply> {
        log::debug!("POST {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(registration)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let reply = response
                .json::<ServerReply>()
                .await
                .unwrap_or(ServerReply { message: None });
            if let Some(ref message) = reply.message {
                log::info!("endpoint replied: {message}");
            }
            return Ok(reply);
        }

        let message = match response.json::<ServerReply>().await {
            Ok(ServerReply {
                message: Some(message),
            }) => message,
            _ => format!("registration failed with status {status}"),
        };
        Err(SubmitError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Collapse a submit result into the outcome the controller consumes.
///
/// Every error path becomes a rejection whose message is the error's own
/// Display text, which for an endpoint rejection is the server message
/// verbatim.
pub fn outcome_for(result: SubmitResult<ServerReply>) -> SubmitOutcome {
    match result {
        Ok(_) => SubmitOutcome::Accepted,
        Err(error) => SubmitOutcome::Rejected {
            message: error.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_client_creation() {
        let client = RegistrationClient::new(&Config::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_keeps_the_configured_endpoint() {
        let config = Config {
            endpoint: "https://example.test/registration".to_string(),
            ..Config::default()
        };
        let client = RegistrationClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "https://example.test/registration");
    }

    #[test]
    fn test_server_reply_parses_with_message() {
        let reply: ServerReply =
            serde_json::from_str(r#"{"message": "Success! Welcome, new user!"}"#).unwrap();
        assert_eq!(reply.message.as_deref(), Some("Success! Welcome, new user!"));
    }

    #[test]
    fn test_server_reply_parses_without_message() {
        let reply: ServerReply = serde_json::from_str("{}").unwrap();
        assert!(reply.message.is_none());

        // Unknown keys are ignored.
        let reply: ServerReply = serde_json::from_str(r#"{"status": "ok"}"#).unwrap();
        assert!(reply.message.is_none());
    }

    #[test]
    fn test_outcome_for_success() {
        let outcome = outcome_for(Ok(ServerReply { message: None }));
        assert_eq!(outcome, SubmitOutcome::Accepted);
    }

    #[test]
    fn test_outcome_for_rejection_carries_the_message_verbatim() {
        let outcome = outcome_for(Err(SubmitError::Rejected {
            status: 422,
            message: "Username is taken".to_string(),
        }));
        assert_eq!(
            outcome,
            SubmitOutcome::Rejected {
                message: "Username is taken".to_string(),
            }
        );
    }
}
