use std::fmt;

/// Cooldown key for one (question, client) pair, persisted as
/// `"<question_id>:<client_id>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttemptKey(String);

impl AttemptKey {
    pub fn new(question_id: &str, client_id: &str) -> Self {
        Self(format!("{}:{}", question_id, client_id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for AttemptKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
