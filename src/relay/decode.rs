//! Response body decoding.
//!
//! Decoding is best-effort. When the upstream claims gzip but the stream
//! cannot be opened, or a stream breaks partway, the caller still gets a body
//! and the failure is reported as a [`DegradedPath`] instead of an error.

use std::fmt;
use std::io::Read;

use flate2::bufread::GzDecoder;

/// A best-effort fallback taken while producing the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedPath {
    /// `Content-Encoding: gzip` but the gzip header was unreadable; the raw
    /// bytes were passed through.
    GzipHeaderRejected,
    /// The body stream failed partway; the bytes collected so far were kept.
    ///
    /// Returning a possibly truncated body with the upstream status is a
    /// known rough edge, not a guarantee of correctness.
    BodyTruncated,
}

impl fmt::Display for DegradedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradedPath::GzipHeaderRejected => write!(f, "gzip header rejected"),
            DegradedPath::BodyTruncated => write!(f, "body truncated"),
        }
    }
}

/// Body after content decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBody {
    pub bytes: Vec<u8>,
    pub degraded: Option<DegradedPath>,
}

/// Decode `raw` according to the upstream `Content-Encoding`.
///
/// Only the exact value `gzip` triggers decompression; every other encoding
/// is passed through untouched.
pub fn decode_body(content_encoding: Option<&str>, raw: Vec<u8>) -> DecodedBody {
    if content_encoding != Some("gzip") {
        return DecodedBody {
            bytes: raw,
            degraded: None,
        };
    }

    let mut decoder = GzDecoder::new(raw.as_slice());
    if decoder.header().is_none() {
        return DecodedBody {
            bytes: raw,
            degraded: Some(DegradedPath::GzipHeaderRejected),
        };
    }

    let mut bytes = Vec::new();
    match decoder.read_to_end(&mut bytes) {
        Ok(_) => DecodedBody {
            bytes,
            degraded: None,
        },
        Err(e) => {
            tracing::debug!(error = %e, inflated = bytes.len(), "gzip stream ended early");
            DecodedBody {
                bytes,
                degraded: Some(DegradedPath::BodyTruncated),
            }
        }
    }
}
