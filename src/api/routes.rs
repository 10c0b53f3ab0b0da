/*
 * Responsibility
 * - URL 構造を定義 (/access_token, /id_token, /sign_out)
 * - static assets は app::build_router の fallback 側で扱う
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::handlers::{
    sign_out::sign_out,
    tokens::{access_token, id_token},
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/access_token", get(access_token))
        .route("/id_token", get(id_token))
        .route("/sign_out", get(sign_out))
}
