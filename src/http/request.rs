//! Request identification.
//!
//! Every inbound request gets an `x-request-id` (UUID v4 unless the client
//! supplied one), and the same value is echoed on the response.

use axum::extract::Request;
use axum::http::HeaderValue;
use tower_http::request_id::{MakeRequestId, RequestId};
use uuid::Uuid;

/// Header carrying the request ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Extension methods for reading the assigned request ID.
pub trait RequestIdExt {
    /// The request ID, or `"unknown"` when the layer is absent.
    fn request_id(&self) -> &str;
}

impl RequestIdExt for Request {
    fn request_id(&self) -> &str {
        self.extensions()
            .get::<RequestId>()
            .and_then(|id| id.header_value().to_str().ok())
            .unwrap_or("unknown")
    }
}

/// Generates UUID v4 request IDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRelayRequestId;

impl MakeRequestId for MakeRelayRequestId {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        HeaderValue::from_str(&Uuid::new_v4().to_string())
            .ok()
            .map(RequestId::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    #[test]
    fn test_generated_ids_are_uuids() {
        let request = axum::http::Request::new(Body::empty());
        let id = MakeRelayRequestId.make_request_id(&request).unwrap();
        let parsed = Uuid::parse_str(id.header_value().to_str().unwrap()).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_missing_id_reads_unknown() {
        let request = Request::new(Body::empty());
        assert_eq!(request.request_id(), "unknown");
    }
}
