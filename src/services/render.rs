/*
 * Responsibility
 * - HTML fragments (not full pages) for the partial-update front-end
 * - decode → pretty-print → highlight → wrap, plus the error fragment
 *
 * Decoded content is embedded unescaped. The service only ever renders
 * tokens forwarded by the proxy in front of it, so the fragment shows the
 * decoder output byte for byte.
 */
use crate::services::highlight::highlight;
use crate::services::jwt::{self, DecodedToken};

/// Fragment for a successfully extracted raw token string.
///
/// Any structural decode failure renders as "Invalid jwt"; the caller only
/// wraps errors that happen before decoding (unreadable header value).
pub fn token_html(token: &str) -> String {
    match jwt::decode_unverified(token) {
        Ok(decoded) => decoded_html(&decoded),
        Err(_) => error_html("Invalid jwt"),
    }
}

pub fn error_html(message: &str) -> String {
    format!(r#"<div class="error">{message}</div>"#)
}

fn decoded_html(decoded: &DecodedToken) -> String {
    // preserve_order keeps the segment key order through to_string_pretty
    let formatted = match serde_json::to_string_pretty(decoded) {
        Ok(json) => json,
        Err(e) => return error_html(&format!("Failed to serialize the decoded token: {e}")),
    };
    let highlighted = highlight(&formatted);

    format!(
        r#"<div class="json-container">
  <button class="copy-btn" disabled>Copy</button>
  <div class="json-content">{highlighted}</div>
</div>"#
    )
}
