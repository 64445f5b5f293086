/*
 * Responsibility
 * - Polls の response DTO
 * - score は Valkey の集計値を merge 済みのもの
 */
use serde::Serialize;
use uuid::Uuid;

use crate::services::votes::ScoredOption;

#[derive(Debug, Serialize)]
pub struct PollEnvelope {
    pub poll: PollResponse,
}

#[derive(Debug, Serialize)]
pub struct PollResponse {
    pub id: Uuid,
    pub title: String,
    pub options: Vec<PollOptionResponse>,
}

#[derive(Debug, Serialize)]
pub struct PollOptionResponse {
    pub id: Uuid,
    pub title: String,
    pub score: u64,
}

impl From<ScoredOption> for PollOptionResponse {
    fn from(o: ScoredOption) -> Self {
        Self {
            id: o.id,
            title: o.title,
            score: o.score,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn poll_is_wrapped_in_a_poll_field() {
        let poll_id = Uuid::new_v4();
        let option_id = Uuid::new_v4();
        let body = PollEnvelope {
            poll: PollResponse {
                id: poll_id,
                title: "Best language?".into(),
                options: vec![PollOptionResponse {
                    id: option_id,
                    title: "Rust".into(),
                    score: 12,
                }],
            },
        };

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "poll": {
                    "id": poll_id.to_string(),
                    "title": "Best language?",
                    "options": [{"id": option_id.to_string(), "title": "Rust", "score": 12}]
                }
            })
        );
    }
}
