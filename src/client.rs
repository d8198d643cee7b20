use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::{ConfigError, SubmissionError};

/// Backend routes the forms submit to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Bookings,
    Register,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Bookings => "/api/bookings",
            Endpoint::Register => "/api/register",
        }
    }
}

/// The network boundary of the submission workflow.
///
/// One call is one attempt: implementations must not retry.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    /// POST a JSON body. Any 2xx status is success.
    async fn post_json(&self, endpoint: Endpoint, body: Value) -> Result<(), SubmissionError>;
}

/// HTTP client for the booking marketplace backend
pub struct BookingApiClient {
    client: Client,
    base_url: String,
}

impl BookingApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ConfigError> {
        let client = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(&ClientConfig::from_env()?)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

#[async_trait]
impl SubmissionTransport for BookingApiClient {
    async fn post_json(&self, endpoint: Endpoint, body: Value) -> Result<(), SubmissionError> {
        let url = self.url_for(endpoint);

        info!("Submitting to {}", endpoint.path());
        debug!("API URL: {}", url);

        let res = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    warn!("Request to {} timed out", endpoint.path());
                    SubmissionError::Timeout
                } else {
                    SubmissionError::Transport(err)
                }
            })?;

        let status = res.status();
        info!("Response received with status: {}", status);

        if status.is_success() {
            Ok(())
        } else {
            Err(SubmissionError::Status(status.as_u16()))
        }
    }
}
