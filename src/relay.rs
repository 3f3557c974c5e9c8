//! Client for the third-party form relay that turns submissions into e-mails.

use std::time::Duration;

use thiserror::Error;

use crate::domain::relay::{RelayResponse, RelaySubmission};

#[derive(Debug, Error)]
pub enum RelayError {
    /// The request could not be sent or timed out.
    #[error("relay request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The relay answered with a body that is not a relay response.
    #[error("relay returned an unreadable response: {0}")]
    Decode(String),
}

/// Sends validated submissions to the relay endpoint.
#[allow(async_fn_in_trait)]
pub trait FormRelay {
    /// Posts a single submission. No retry is attempted.
    async fn submit(&self, submission: &RelaySubmission) -> Result<RelayResponse, RelayError>;
}

/// [`FormRelay`] backed by the Web3Forms JSON API.
#[derive(Debug, Clone)]
pub struct Web3FormsRelay {
    client: reqwest::Client,
    endpoint: String,
}

impl Web3FormsRelay {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl FormRelay for Web3FormsRelay {
    async fn submit(&self, submission: &RelaySubmission) -> Result<RelayResponse, RelayError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Accept", "application/json")
            .json(submission)
            .send()
            .await?;

        // Rejections arrive as non-2xx statuses with a regular JSON body.
        let status = response.status();
        let body = response.text().await?;
        serde_json::from_str::<RelayResponse>(&body).map_err(|e| {
            log::warn!("Relay answered {status} with an unexpected body: {e}");
            RelayError::Decode(e.to_string())
        })
    }
}
