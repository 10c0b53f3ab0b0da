/*
 * Responsibility
 * - GET /access_token, GET /id_token
 * - header extraction → decode-and-render; every failure becomes an error
 *   fragment in a 200 response, nothing escalates past the route
 */
use axum::{http::HeaderMap, http::header, response::Html};

use crate::services::render;

const FORWARDED_ACCESS_TOKEN: &str = "x-forwarded-access-token";

/// Renders the token forwarded by the oauth2 proxy.
pub async fn access_token(headers: HeaderMap) -> Html<String> {
    let Some(value) = headers.get(FORWARDED_ACCESS_TOKEN) else {
        return Html(render::error_html(
            "Missing X-Forwarded-Access-Token header",
        ));
    };

    let token = match value.to_str() {
        Ok(t) => t,
        Err(e) => {
            return Html(render::error_html(&format!(
                "Failed to parse the jwt with message {e}"
            )));
        }
    };

    // an empty header value carries no token; treat it like a missing header
    if token.is_empty() {
        return Html(render::error_html(
            "Missing X-Forwarded-Access-Token header",
        ));
    }

    Html(render::token_html(token))
}

/// Renders the id token from the Authorization header.
///
/// The `Bearer ` prefix is optional; a raw token in the header works too.
pub async fn id_token(headers: HeaderMap) -> Html<String> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        return Html(render::error_html("Missing Authorization header"));
    };

    let auth_header = match value.to_str() {
        Ok(v) => v,
        Err(e) => {
            return Html(render::error_html(&format!(
                "Failed to parse token with error: {e}"
            )));
        }
    };

    if auth_header.is_empty() {
        return Html(render::error_html("Missing Authorization header"));
    }

    // case-sensitive, exact 7-character prefix
    let id_token = auth_header.strip_prefix("Bearer ").unwrap_or(auth_header);

    if id_token.is_empty() {
        return Html(render::error_html(
            "Invalid Authorization header format. Expected: Bearer <token>",
        ));
    }

    Html(render::token_html(id_token))
}
