/*
 * Responsibility
 * - Path の {poll_id} を String で受け、ハイフン区切りの UUID として検証する
 * - 失敗時は AppError::bad_request (400, INVALID_POLL_ID) へ変換
 * - handler には検証済みの Uuid だけを渡す
 */
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollIdPath(pub Uuid);

fn invalid() -> AppError {
    AppError::bad_request("INVALID_POLL_ID", "poll id must be a UUID")
}

// Only the canonical 8-4-4-4-12 form; `Uuid::parse_str` alone also takes
// simple, braced and urn forms, which all differ in length.
fn parse_hyphenated(raw: &str) -> Result<Uuid, AppError> {
    if raw.len() != 36 {
        return Err(invalid());
    }
    Uuid::parse_str(raw).map_err(|_| invalid())
}

impl<S> FromRequestParts<S> for PollIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        Ok(Self(parse_hyphenated(&raw)?))
    }
}
