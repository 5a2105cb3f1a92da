//! HTTP implementation of [`GameService`].
//!
//! The server exposes exactly two endpoints for gameplay, both POST with a
//! JSON body: `/api/loadGame` (empty object) and `/api/action` (the intent
//! pair). Auth failures come back as 401; gameplay rejections come back as a
//! 2xx body of the form `{"error": "..."}` in place of a snapshot.
use async_trait::async_trait;
use protocol::{Action, ErrorReply, Snapshot};
use reqwest::{Client, StatusCode};
use serde_json::json;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, Result};
use crate::service::GameService;

pub struct HttpGateway {
    client: Client,
    base_url: String,
}

impl HttpGateway {
    pub fn new(config: &GatewayConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    async fn round_trip(&self, endpoint: &str, body: serde_json::Value) -> Result<Snapshot> {
        let url = format!("{}/api/{}", self.base_url, endpoint);
        tracing::debug!(%url, "posting to server");

        let response = self.client.post(&url).json(&body).send().await?;
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(GatewayError::Unauthorized);
        }
        if !status.is_success() {
            return Err(GatewayError::Http {
                status: status.as_u16(),
            });
        }

        let payload = response.bytes().await?;
        decode_reply(&payload)
    }
}

#[async_trait]
impl GameService for HttpGateway {
    async fn load_game(&self) -> Result<Snapshot> {
        self.round_trip("loadGame", json!({})).await
    }

    async fn perform(&self, action: &Action) -> Result<Snapshot> {
        let body = serde_json::to_value(action)?;
        self.round_trip("action", body).await
    }
}

/// Decode a 2xx body, which is either a snapshot or an inline rejection.
fn decode_reply(payload: &[u8]) -> Result<Snapshot> {
    if let Ok(reply) = serde_json::from_slice::<ErrorReply>(payload) {
        return Err(GatewayError::Rejected {
            message: reply.error,
        });
    }
    Ok(serde_json::from_slice(payload)?)
}
