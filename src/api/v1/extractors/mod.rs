mod poll_id;

pub use poll_id::PollIdPath;
