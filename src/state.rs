/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 *   - polls: PollRepo (Postgres), tallies: VoteTallyStore (Valkey)
 * - Clone 前提で持つ (内部は Arc/Clone cheap)
 */
use std::sync::Arc;

use crate::repos::poll_repo::PollRepo;
use crate::services::votes::VoteTallyStore;

#[derive(Clone)]
pub struct AppState {
    pub polls: Arc<dyn PollRepo>,
    pub tallies: Arc<dyn VoteTallyStore>,
}

impl AppState {
    pub fn new(polls: Arc<dyn PollRepo>, tallies: Arc<dyn VoteTallyStore>) -> Self {
        Self { polls, tallies }
    }
}
