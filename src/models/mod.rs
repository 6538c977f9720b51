pub mod attempt;
pub mod question;

pub use attempt::AttemptKey;
pub use question::Question;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The whole persisted document. Both maps default to empty so a file written
/// by the static-hosting tool (questions only) loads as well.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizData {
    #[serde(default)]
    pub questions: BTreeMap<String, Question>,
    #[serde(
        default,
        deserialize_with = "crate::utils::time::deserialize_timestamp_map"
    )]
    pub attempts: BTreeMap<String, DateTime<Utc>>,
}

impl QuizData {
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.get(id)
    }

    pub fn last_failure(&self, key: &AttemptKey) -> Option<DateTime<Utc>> {
        self.attempts.get(key.as_str()).copied()
    }
}
