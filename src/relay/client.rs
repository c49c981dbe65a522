//! Upstream execution.
//!
//! # Responsibilities
//! - Own the shared `reqwest::Client` with the total-call timeout
//! - Execute one outbound request per envelope, no retries
//! - Collect and decode the body, recording any degraded path

use std::time::Duration;

use reqwest::header::{HeaderName, CONTENT_ENCODING};
use reqwest::StatusCode;

use crate::config::UpstreamConfig;
use crate::relay::decode::{decode_body, DegradedPath};
use crate::relay::envelope::ProxyEnvelope;
use crate::relay::error::{RelayError, RelayResult};
use crate::relay::outbound::OutboundRequest;

/// Upstream reply as handed back to the client.
#[derive(Debug, Clone)]
pub struct RelayResponse {
    /// Upstream status, unchanged.
    pub status: StatusCode,
    /// Upstream body with any gzip encoding removed.
    pub body: Vec<u8>,
    /// Fallbacks taken while reading or decoding, in order.
    pub degraded: Vec<DegradedPath>,
}

/// Translates envelopes into upstream calls.
#[derive(Debug, Clone)]
pub struct Relay {
    client: reqwest::Client,
    session_header: HeaderName,
}

impl Relay {
    /// Create a relay from upstream settings.
    pub fn new(config: &UpstreamConfig) -> RelayResult<Self> {
        let session_header = HeaderName::from_bytes(config.session_header.as_bytes())
            .map_err(|_| RelayError::SessionHeader(config.session_header.clone()))?;
        let mut builder =
            reqwest::Client::builder().timeout(Duration::from_secs(config.timeout_secs));
        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }
        let client = builder.build().map_err(RelayError::ClientInit)?;

        Ok(Self {
            client,
            session_header,
        })
    }

    /// Relay one envelope upstream and return the upstream status and body.
    pub async fn handle(&self, envelope: ProxyEnvelope) -> RelayResult<RelayResponse> {
        let outbound = OutboundRequest::from_envelope(&envelope, &self.session_header)?;

        tracing::debug!(
            method = %outbound.method,
            url = %outbound.url,
            has_body = outbound.body.is_some(),
            "Sending upstream request"
        );

        let mut response = self
            .client
            .execute(outbound.into_request())
            .await
            .map_err(RelayError::Transport)?;

        let status = response.status();
        let content_encoding = response
            .headers()
            .get(CONTENT_ENCODING)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);

        let mut degraded = Vec::new();
        let raw = match read_body(&mut response).await {
            Ok(raw) => raw,
            Err((partial, e)) => {
                tracing::warn!(
                    status = %status,
                    received = partial.len(),
                    error = %e,
                    "Upstream body read failed, returning partial body"
                );
                degraded.push(DegradedPath::BodyTruncated);
                partial
            }
        };

        let decoded = decode_body(content_encoding.as_deref(), raw);
        if let Some(path) = decoded.degraded {
            tracing::warn!(status = %status, degraded = %path, "Upstream body decoded best-effort");
            if !degraded.contains(&path) {
                degraded.push(path);
            }
        }

        Ok(RelayResponse {
            status,
            body: decoded.bytes,
            degraded,
        })
    }
}

/// Read the whole body; on failure hand back what arrived before the error.
async fn read_body(
    response: &mut reqwest::Response,
) -> Result<Vec<u8>, (Vec<u8>, reqwest::Error)> {
    let mut body = Vec::new();
    loop {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) => return Ok(body),
            Err(e) => return Err((body, e)),
        }
    }
}
