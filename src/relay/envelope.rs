//! Inbound proxy envelope.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::relay::error::RelayResult;

/// Description of one upstream call, as posted by the frontend.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProxyEnvelope {
    /// Absolute URL of the upstream resource.
    pub endpoint: String,

    /// HTTP method name, passed through as given.
    pub method: String,

    /// JSON object re-serialized as the outbound body. Key order is kept.
    #[serde(default)]
    pub body: Option<Map<String, Value>>,

    #[serde(default)]
    pub session_token: Option<String>,

    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ProxyEnvelope {
    /// Decode an envelope from a raw request body.
    pub fn from_slice(bytes: &[u8]) -> RelayResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Session token, if present and non-empty.
    pub fn session_token(&self) -> Option<&str> {
        self.session_token.as_deref().filter(|t| !t.is_empty())
    }

    /// User agent to send upstream; absent means empty.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or_default()
    }
}
