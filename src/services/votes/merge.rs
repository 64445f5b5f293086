use uuid::Uuid;

use crate::repos::poll_repo::PollOptionRow;
use crate::services::votes::store::VoteTallies;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredOption {
    pub id: Uuid,
    pub title: String,
    pub score: u64,
}

/// Attaches the live count to each stored option.
///
/// Option order is kept as stored. Options without votes score 0; tally
/// entries for options that no longer exist are dropped.
pub fn merge_scores(options: Vec<PollOptionRow>, tallies: &VoteTallies) -> Vec<ScoredOption> {
    options
        .into_iter()
        .map(|option| ScoredOption {
            score: tallies.score_of(&option.id),
            id: option.id,
            title: option.title,
        })
        .collect()
}
