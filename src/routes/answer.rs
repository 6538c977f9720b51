use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::Json,
};

use crate::dto::answer_dto::{AnswerResponse, SubmitAnswerRequest};
use crate::error::Error;
use crate::AppState;

/// The body is parsed leniently: an unknown question id answers 404 before
/// the payload is looked at.
#[axum::debug_handler]
pub async fn submit_answer(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<SubmitAnswerRequest>, JsonRejection>,
) -> crate::error::Result<Json<AnswerResponse>> {
    let payload = payload.map(|Json(req)| req).map_err(Error::from);
    let response = state.quiz_service.check_answer(&id, payload).await?;
    Ok(Json(response))
}
