use chrono::{DateTime, Utc};
use std::time::Duration;

use crate::dto::answer_dto::AnswerResponse;
use crate::error::{Error, Result};
use crate::models::{AttemptKey, QuizData};
use crate::utils::time::remaining_in_window;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct { success_image: Option<String> },
    Wrong,
    Cooldown { remaining_seconds: u64 },
}

impl AnswerOutcome {
    pub fn into_response(self, cooldown: Duration) -> AnswerResponse {
        match self {
            AnswerOutcome::Correct { success_image } => AnswerResponse {
                correct: true,
                timeout: None,
                remaining_seconds: None,
                message: "Поздравляем! Ответ правильный!".to_string(),
                success_image,
            },
            AnswerOutcome::Wrong => AnswerResponse {
                correct: false,
                timeout: Some(false),
                remaining_seconds: None,
                message: format!(
                    "Неправильный ответ. Попробуйте снова через {} секунд.",
                    cooldown.as_secs()
                ),
                success_image: None,
            },
            AnswerOutcome::Cooldown { remaining_seconds } => AnswerResponse {
                correct: false,
                timeout: Some(true),
                remaining_seconds: Some(remaining_seconds),
                message: format!(
                    "Подождите {} секунд перед следующей попыткой",
                    remaining_seconds
                ),
                success_image: None,
            },
        }
    }
}

#[derive(Debug)]
pub struct Checked {
    pub outcome: AnswerOutcome,
    /// Whether `data` was modified and has to be written back.
    pub changed: bool,
}

/// Checks one submission against `data`, updating the cooldown record in place.
pub fn check(
    data: &mut QuizData,
    question_id: &str,
    client_id: &str,
    submitted: &str,
    now: DateTime<Utc>,
    cooldown: Duration,
) -> Result<Checked> {
    let question = data
        .question(question_id)
        .ok_or_else(Error::question_not_found)?;
    let accepted = question.accepts(submitted);
    let success_image = question.success_image.clone();

    let key = AttemptKey::new(question_id, client_id);
    if let Some(last) = data.last_failure(&key) {
        if let Some(remaining_seconds) = remaining_in_window(last, now, cooldown) {
            return Ok(Checked {
                outcome: AnswerOutcome::Cooldown { remaining_seconds },
                changed: false,
            });
        }
    }

    if !accepted {
        data.attempts.insert(key.into_string(), now);
        return Ok(Checked {
            outcome: AnswerOutcome::Wrong,
            changed: true,
        });
    }

    let changed = data.attempts.remove(key.as_str()).is_some();
    Ok(Checked {
        outcome: AnswerOutcome::Correct { success_image },
        changed,
    })
}
