use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

use crate::dto::answer_dto::{AnswerResponse, SubmitAnswerRequest};
use crate::dto::question_dto::{CreateQuestionRequest, CreateQuestionResponse};
use crate::error::{Error, Result};
use crate::models::Question;
use crate::services::answer_checker;
use crate::storage::QuizStore;
use crate::utils::{id::generate_question_id, time};

pub const CLIENT_ID_REQUIRED: &str = "Требуется идентификатор клиента";

#[derive(Clone)]
pub struct QuizService {
    store: Arc<dyn QuizStore>,
    // Serializes load-modify-save cycles on the shared document.
    write_lock: Arc<Mutex<()>>,
    cooldown: Duration,
}

impl QuizService {
    pub fn new(store: Arc<dyn QuizStore>, cooldown: Duration) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
            cooldown,
        }
    }

    pub async fn create_question(
        &self,
        payload: CreateQuestionRequest,
    ) -> Result<CreateQuestionResponse> {
        let req = payload.into_checked()?;
        let id = generate_question_id();
        let question = Question::new(&req.question, &req.answer, req.success_image);

        let _guard = self.write_lock.lock().await;
        let mut data = self.store.load().await?;
        data.questions.insert(id.clone(), question);
        self.store.save(&data).await?;

        tracing::info!(question_id = %id, "Question created");
        Ok(CreateQuestionResponse {
            url: format!("/q/{}", id),
            id,
        })
    }

    pub async fn get_question(&self, id: &str) -> Result<Question> {
        let data = self.store.load().await?;
        data.questions
            .get(id)
            .cloned()
            .ok_or_else(Error::question_not_found)
    }

    pub async fn check_answer(
        &self,
        question_id: &str,
        payload: Result<SubmitAnswerRequest>,
    ) -> Result<AnswerResponse> {
        let _guard = self.write_lock.lock().await;
        let mut data = self.store.load().await?;
        if data.question(question_id).is_none() {
            return Err(Error::question_not_found());
        }

        let req = payload?;
        if req.client_id.trim().is_empty() {
            return Err(Error::BadRequest(CLIENT_ID_REQUIRED.to_string()));
        }

        let checked = answer_checker::check(
            &mut data,
            question_id,
            &req.client_id,
            &req.answer,
            time::now(),
            self.cooldown,
        )?;
        if checked.changed {
            self.store.save(&data).await?;
        }

        match &checked.outcome {
            answer_checker::AnswerOutcome::Wrong => {
                tracing::info!(question_id, client_id = %req.client_id, "Wrong answer")
            }
            answer_checker::AnswerOutcome::Cooldown { remaining_seconds } => tracing::debug!(
                question_id,
                client_id = %req.client_id,
                remaining_seconds,
                "Answer rejected during cooldown"
            ),
            answer_checker::AnswerOutcome::Correct { .. } => {
                tracing::info!(question_id, client_id = %req.client_id, "Correct answer")
            }
        }

        Ok(checked.outcome.into_response(self.cooldown))
    }
}
