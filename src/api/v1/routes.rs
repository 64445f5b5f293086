/*
 * Responsibility
 * - v1 の URL 構造を定義
 * - /health, /polls/{poll_id}
 * - polls() は既存クライアント向けに root (/polls/{poll_id}) にも mount される
 */
use axum::{Router, routing::get};

use crate::state::AppState;

use crate::api::v1::handlers::{health::health, polls::get_poll};

pub fn polls() -> Router<AppState> {
    Router::new().route("/polls/{poll_id}", get(get_poll))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health)).merge(polls())
}
