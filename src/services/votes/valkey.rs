use std::{future::Future, pin::Pin, sync::Arc};

use uuid::Uuid;

use crate::services::{
    cache::{CacheClient, CacheError, ValkeyClient},
    votes::store::{VoteTallies, VoteTallyStore},
};

/// Valkey-backed tally store (Redis protocol).
///
/// Each poll is a sorted set keyed by the poll id; members are option ids and
/// scores are vote counts.
#[derive(Clone)]
pub struct ValkeyTallyStore<C: CacheClient> {
    cache: Arc<C>,
    // Optional key prefix to avoid collisions across environments
    prefix: Option<String>,
}

impl ValkeyTallyStore<ValkeyClient> {
    pub async fn connect(valkey_url: &str, prefix: Option<String>) -> Result<Self, CacheError> {
        let client = ValkeyClient::new(valkey_url).await?;
        Ok(Self::new_with_cache(Arc::new(client), prefix))
    }
}

impl<C: CacheClient> ValkeyTallyStore<C> {
    pub fn new_with_cache(cache: Arc<C>, prefix: Option<String>) -> Self {
        Self { cache, prefix }
    }

    pub fn key(&self, poll_id: Uuid) -> String {
        match &self.prefix {
            Some(prefix) => format!("{}:{}", prefix, poll_id),
            None => poll_id.to_string(),
        }
    }

    async fn read(&self, poll_id: Uuid) -> Result<VoteTallies, CacheError> {
        let key = self.key(poll_id);
        let pairs = self.cache.sorted_set_range_with_scores(&key).await?;

        let mut tallies = VoteTallies::new();
        for (member, score) in pairs {
            // Members that are not option ids can never match an option.
            let Ok(option_id) = Uuid::parse_str(&member) else {
                tracing::debug!(
                    backend = self.cache.backend_name(),
                    key = %key,
                    member = %member,
                    "ignoring non-uuid tally member"
                );
                continue;
            };
            tallies.insert(option_id, vote_count(&key, &member, score)?);
        }

        Ok(tallies)
    }
}

fn vote_count(key: &str, member: &str, score: f64) -> Result<u64, CacheError> {
    if !score.is_finite() || score < 0.0 || score.fract() != 0.0 || score >= u64::MAX as f64 {
        return Err(CacheError::InvalidValue(format!(
            "score {score} of {member} in {key} is not a vote count"
        )));
    }
    Ok(score as u64)
}

impl<C: CacheClient> VoteTallyStore for ValkeyTallyStore<C> {
    fn tallies<'a>(
        &'a self,
        poll_id: Uuid,
    ) -> Pin<Box<dyn Future<Output = Result<VoteTallies, CacheError>> + Send + 'a>> {
        Box::pin(self.read(poll_id))
    }
}
