/*
 * Responsibility
 * - GET /polls/{poll_id} (root と /api/v1 の両方)
 * - poll 定義 (Postgres) と投票数 (Valkey sorted set) を merge して返す
 * - 作成・投票の handler はここには置かない (別サービス)
 */
use axum::{Json, extract::State};

use crate::{
    api::v1::{
        dto::polls::{PollEnvelope, PollResponse},
        extractors::PollIdPath,
    },
    error::AppError,
    services::votes::merge_scores,
    state::AppState,
};

pub async fn get_poll(
    State(state): State<AppState>,
    PollIdPath(poll_id): PollIdPath,
) -> Result<Json<PollEnvelope>, AppError> {
    let found = state
        .polls
        .get_with_options(poll_id)
        .await?
        .ok_or(AppError::not_found("Poll"))?;

    // Tallies are only read for polls that exist.
    let tallies = state.tallies.tallies(poll_id).await?;

    tracing::debug!(
        %poll_id,
        options = found.options.len(),
        tallied = tallies.len(),
        "poll loaded"
    );

    let options = merge_scores(found.options, &tallies)
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(PollEnvelope {
        poll: PollResponse {
            id: found.poll.id,
            title: found.poll.title,
            options,
        },
    }))
}
