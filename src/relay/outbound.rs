//! Translation of an envelope into the upstream HTTP request.
//!
//! Construction is kept separate from execution so the exact request the
//! relay would send can be inspected without a network.

use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_ENCODING, CONTENT_TYPE, USER_AGENT,
};
use reqwest::{Method, Url};

use crate::relay::envelope::ProxyEnvelope;
use crate::relay::error::BuildError;

/// Fully constructed upstream request.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    /// Serialized envelope body; `None` sends no body at all.
    pub body: Option<Vec<u8>>,
}

impl OutboundRequest {
    /// Build the upstream request described by `envelope`.
    pub fn from_envelope(
        envelope: &ProxyEnvelope,
        session_header: &HeaderName,
    ) -> Result<Self, BuildError> {
        let body = envelope
            .body
            .as_ref()
            .map(serde_json::to_vec)
            .transpose()
            .map_err(BuildError::Body)?;

        let method = parse_method(&envelope.method)?;
        let url = Url::parse(&envelope.endpoint).map_err(|source| BuildError::Url {
            endpoint: envelope.endpoint.clone(),
            source,
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, header_value(&USER_AGENT, envelope.user_agent())?);
        if let Some(token) = envelope.session_token() {
            headers.insert(session_header.clone(), header_value(session_header, token)?);
        }
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));

        Ok(Self {
            method,
            url,
            headers,
            body,
        })
    }

    /// Convert into a request executable by `reqwest::Client`.
    pub fn into_request(self) -> reqwest::Request {
        let mut request = reqwest::Request::new(self.method, self.url);
        *request.headers_mut() = self.headers;
        if let Some(body) = self.body {
            *request.body_mut() = Some(body.into());
        }
        request
    }
}

/// An empty method means GET; anything else must be a valid method token.
fn parse_method(method: &str) -> Result<Method, BuildError> {
    if method.is_empty() {
        return Ok(Method::GET);
    }
    Method::from_bytes(method.as_bytes()).map_err(|_| BuildError::Method {
        method: method.to_string(),
    })
}

fn header_value(name: &HeaderName, value: &str) -> Result<HeaderValue, BuildError> {
    HeaderValue::from_str(value).map_err(|source| BuildError::Header {
        name: name.clone(),
        source,
    })
}
