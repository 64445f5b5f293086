pub mod error;
pub mod poll_repo;
