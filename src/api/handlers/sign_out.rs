/*
 * Responsibility
 * - GET /sign_out
 * - no token processing; the HX-Redirect header sends the browser back to the
 *   oauth2 proxy's sign-in page
 */
use axum::response::IntoResponse;

pub async fn sign_out() -> impl IntoResponse {
    ([("hx-redirect", "/oauth2/sign_in")], ())
}
