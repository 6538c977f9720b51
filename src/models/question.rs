use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    /// Stored trimmed and lowercased.
    pub answer: String,
    #[serde(deserialize_with = "crate::utils::time::deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success_image: Option<String>,
}

impl Question {
    pub fn new(question: &str, answer: &str, success_image: Option<String>) -> Self {
        Self {
            question: question.trim().to_string(),
            answer: normalize_answer(answer),
            created_at: Utc::now(),
            success_image,
        }
    }

    pub fn accepts(&self, submitted: &str) -> bool {
        normalize_answer(submitted) == self.answer
    }
}

pub fn normalize_answer(raw: &str) -> String {
    raw.trim().to_lowercase()
}
