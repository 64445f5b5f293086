pub mod merge;
pub mod store;
pub mod valkey;

pub use merge::{ScoredOption, merge_scores};
pub use store::{VoteTallies, VoteTallyStore};
pub use valkey::ValkeyTallyStore;
