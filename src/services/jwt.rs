/*
 * Responsibility
 * - structural JWT decode, no signature or claim verification
 * - the signature segment is never inspected (it only has to exist)
 * - handlers and render only see DecodedToken / DecodeError
 */
use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("token must have exactly three dot-separated segments")]
    SegmentCount,
    #[error("segment is not valid base64url: {0}")]
    Base64(#[from] base64::DecodeError),
    #[error("segment is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Header and payload of a compact JWT, in decode order.
///
/// Serializes as `{"header": {...}, "payload": {...}}` with key order
/// preserved from the token segments.
#[derive(Debug, Serialize)]
pub struct DecodedToken {
    pub header: Value,
    pub payload: Value,
}

/// Decode a compact JWT without verifying anything.
///
/// Splits on `.`, requires exactly three segments, base64url-decodes the
/// first two and parses each as JSON. The third segment is ignored, so an
/// unsigned `header.payload.` token decodes fine.
pub fn decode_unverified(token: &str) -> Result<DecodedToken, DecodeError> {
    let parts: Vec<&str> = token.split('.').collect();
    if parts.len() != 3 {
        return Err(DecodeError::SegmentCount);
    }

    let header: Value = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[0])?)?;
    let payload: Value = serde_json::from_slice(&URL_SAFE_NO_PAD.decode(parts[1])?)?;

    Ok(DecodedToken { header, payload })
}
