pub mod cache;
pub mod votes;
