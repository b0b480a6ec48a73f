use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::ProxyConfig;
use crate::error::{AppError, Result};
use crate::models::payload::{InboundPayload, UpstreamReply};

/// Carries one inbound payload to the destination and brings back its reply.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, payload: &InboundPayload) -> Result<UpstreamReply>;
}

#[derive(Debug, Clone)]
pub struct HttpForwarder {
    client: Client,
    target_url: String,
}

impl HttpForwarder {
    pub fn new(config: &ProxyConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { client, target_url: config.target_url().to_string() })
    }

    pub fn target_url(&self) -> &str {
        &self.target_url
    }
}

#[async_trait]
impl Forwarder for HttpForwarder {
    async fn forward(&self, payload: &InboundPayload) -> Result<UpstreamReply> {
        let mut request = self
            .client
            .post(&self.target_url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(value) = payload.value() {
            let body = serde_json::to_vec(value).map_err(|e| AppError::Forwarding(e.to_string()))?;
            request = request.body(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body: Value = response.json().await?;
        debug!(status, "destination replied");

        Ok(UpstreamReply { status, body })
    }
}
