use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

use crate::error::{Error, Result};
use crate::utils::validation::validate_image_url;

pub const QUESTION_AND_ANSWER_REQUIRED: &str = "Вопрос и ответ обязательны";

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateQuestionRequest {
    #[serde(default)]
    #[validate(length(
        max = 5000,
        message = "Вопрос слишком длинный (максимум 5000 символов)"
    ))]
    pub question: String,
    #[serde(default)]
    #[validate(length(max = 500, message = "Ответ слишком длинный (максимум 500 символов)"))]
    pub answer: String,
    #[serde(default)]
    #[validate(length(
        max = 2000,
        message = "Ссылка на изображение слишком длинная (максимум 2000 символов)"
    ))]
    pub success_image: Option<String>,
}

impl CreateQuestionRequest {
    /// Trims every field, drops a blank image link, and checks the result.
    pub fn into_checked(self) -> Result<Self> {
        let req = Self {
            question: self.question.trim().to_string(),
            answer: self.answer.trim().to_string(),
            success_image: self
                .success_image
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        };

        if req.question.is_empty() || req.answer.is_empty() {
            return Err(Error::BadRequest(QUESTION_AND_ANSWER_REQUIRED.to_string()));
        }

        req.validate()?;

        if let Some(url) = &req.success_image {
            if let Err(err) = validate_image_url(url) {
                let mut errors = ValidationErrors::new();
                errors.add("success_image", err);
                return Err(errors.into());
            }
        }
        Ok(req)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateQuestionResponse {
    pub id: String,
    pub url: String,
}

/// Public view of a question. The answer never leaves the server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicQuestion {
    pub question: String,
}
