/*
 * Responsibility
 * - "Poll" / "PollOption" テーブル向け SQLx 操作 (読み取りのみ)
 * - スキーマは Prisma の既定 (モデル名のテーブル, id は TEXT) に合わせる
 * - 作成・投票は別サービスの責務
 */
use std::{future::Future, pin::Pin};

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::repos::error::{RepoError, RepoResult};

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PollRow {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct PollOptionRow {
    pub id: Uuid,
    pub title: String,
}

#[derive(Debug, Clone)]
pub struct PollWithOptions {
    pub poll: PollRow,
    pub options: Vec<PollOptionRow>,
}

/// Read access to stored polls.
///
/// - `Ok(Some(_))`: the poll and its options (possibly none)
/// - `Ok(None)`: no poll has that id
/// - `Err(_)`: database failure
pub trait PollRepo: Send + Sync {
    fn get_with_options<'a>(
        &'a self,
        poll_id: Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<Option<PollWithOptions>, RepoError>> + Send + 'a>>;
}

/// Postgres-backed `PollRepo`.
#[derive(Clone, Debug)]
pub struct PgPollRepo {
    db: PgPool,
}

impl PgPollRepo {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

impl PollRepo for PgPollRepo {
    fn get_with_options<'a>(
        &'a self,
        poll_id: Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<Option<PollWithOptions>, RepoError>> + Send + 'a>> {
        Box::pin(get_with_options(&self.db, poll_id))
    }
}

pub async fn get_with_options(db: &PgPool, poll_id: Uuid) -> RepoResult<Option<PollWithOptions>> {
    let Some(poll) = get(db, poll_id).await? else {
        return Ok(None);
    };

    let options = list_options(db, poll.id).await?;

    Ok(Some(PollWithOptions { poll, options }))
}

// Prisma stores `String @id @default(uuid())` as TEXT, hence the casts.
pub async fn get(db: &PgPool, poll_id: Uuid) -> RepoResult<Option<PollRow>> {
    let row = sqlx::query_as::<_, PollRow>(
        r#"
        SELECT id::uuid AS id, title
        FROM "Poll"
        WHERE id = $1
        "#,
    )
    .bind(poll_id.to_string())
    .fetch_optional(db)
    .await?;

    Ok(row)
}

pub async fn list_options(db: &PgPool, poll_id: Uuid) -> RepoResult<Vec<PollOptionRow>> {
    let rows = sqlx::query_as::<_, PollOptionRow>(
        r#"
        SELECT id::uuid AS id, title
        FROM "PollOption"
        WHERE "pollId" = $1
        ORDER BY id ASC
        "#,
    )
    .bind(poll_id.to_string())
    .fetch_all(db)
    .await?;

    Ok(rows)
}
