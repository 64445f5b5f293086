//! In-memory fakes shared by unit tests.
use std::{
    collections::HashMap,
    future::Future,
    pin::Pin,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use uuid::Uuid;

use crate::repos::{
    error::RepoError,
    poll_repo::{PollOptionRow, PollRepo, PollRow, PollWithOptions},
};
use crate::services::cache::{CacheClient, CacheError, CacheResult};

#[derive(Clone, Default)]
pub struct MemoryCache {
    sets: Arc<Mutex<HashMap<String, Vec<(String, f64)>>>>,
    failure: Arc<Mutex<Option<String>>>,
    reads: Arc<AtomicUsize>,
}

impl MemoryCache {
    pub fn put(&self, key: &str, scores: &[(Uuid, f64)]) {
        let members = scores
            .iter()
            .map(|(id, score)| (id.to_string(), *score))
            .collect();
        self.put_raw(key, members);
    }

    pub fn put_raw(&self, key: &str, members: Vec<(String, f64)>) {
        self.sets.lock().unwrap().insert(key.to_string(), members);
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Number of range reads served so far, failed ones included.
    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheClient for MemoryCache {
    fn backend_name(&self) -> &'static str {
        "memory"
    }

    async fn sorted_set_range_with_scores(&self, key: &str) -> CacheResult<Vec<(String, f64)>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = self.failure.lock().unwrap().clone() {
            return Err(CacheError::BackendCommand(message));
        }

        let mut members = self
            .sets
            .lock()
            .unwrap()
            .get(key)
            .cloned()
            .unwrap_or_default();
        members.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        Ok(members)
    }
}

#[derive(Clone, Default)]
pub struct MemoryPollRepo {
    polls: Arc<Mutex<HashMap<Uuid, PollWithOptions>>>,
}

impl MemoryPollRepo {
    /// Stores a poll with the given option titles and returns the stored rows.
    pub fn insert(&self, title: &str, option_titles: &[&str]) -> PollWithOptions {
        let poll = PollWithOptions {
            poll: PollRow {
                id: Uuid::new_v4(),
                title: title.to_string(),
            },
            options: option_titles
                .iter()
                .map(|t| PollOptionRow {
                    id: Uuid::new_v4(),
                    title: t.to_string(),
                })
                .collect(),
        };
        self.polls
            .lock()
            .unwrap()
            .insert(poll.poll.id, poll.clone());
        poll
    }
}

impl PollRepo for MemoryPollRepo {
    fn get_with_options<'a>(
        &'a self,
        poll_id: Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<Option<PollWithOptions>, RepoError>> + Send + 'a>> {
        let found = self.polls.lock().unwrap().get(&poll_id).cloned();
        Box::pin(async move { Ok(found) })
    }
}
