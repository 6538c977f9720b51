use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};

use crate::dto::question_dto::{CreateQuestionRequest, CreateQuestionResponse, PublicQuestion};
use crate::AppState;

#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<CreateQuestionRequest>, JsonRejection>,
) -> crate::error::Result<Json<CreateQuestionResponse>> {
    let Json(req) = payload?;
    let created = state.quiz_service.create_question(req).await?;
    Ok(Json(created))
}

#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> crate::error::Result<Json<PublicQuestion>> {
    let question = state.quiz_service.get_question(&id).await?;
    Ok(Json(PublicQuestion {
        question: question.question,
    }))
}
