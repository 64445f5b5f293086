use std::{collections::HashMap, future::Future, pin::Pin};

use uuid::Uuid;

use crate::services::cache::CacheError;

/// Vote counts of a single poll, keyed by option id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoteTallies {
    counts: HashMap<Uuid, u64>,
}

impl VoteTallies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, option_id: Uuid, count: u64) {
        self.counts.insert(option_id, count);
    }

    /// Options nobody has voted for yet are not in the cache at all.
    pub fn score_of(&self, option_id: &Uuid) -> u64 {
        self.counts.get(option_id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(Uuid, u64)> for VoteTallies {
    fn from_iter<I: IntoIterator<Item = (Uuid, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Read side of the live vote counts.
///
/// - `Ok(tallies)`: current counts (empty when the poll has no votes yet)
/// - `Err(_)`: backend failure or a value that is not a vote count
pub trait VoteTallyStore: Send + Sync {
    fn tallies<'a>(
        &'a self,
        poll_id: Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<VoteTallies, CacheError>> + Send + 'a>>;
}
