use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use tera::{Context, Tera};

use crate::error::{Error, Result, QUESTION_NOT_FOUND};
use crate::AppState;

pub fn load_templates() -> Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        ("admin.html", include_str!("../../templates/admin.html")),
        ("question.html", include_str!("../../templates/question.html")),
    ])
    .map_err(|e| Error::Internal(format!("Template error: {}", e)))?;
    tera.autoescape_on(vec![".html"]);
    Ok(tera)
}

fn render(tera: &Tera, name: &str, context: &Context) -> Result<Html<String>> {
    tera.render(name, context)
        .map(Html)
        .map_err(|e| Error::Internal(format!("Failed to render {}: {}", name, e)))
}

pub async fn admin_page(State(state): State<AppState>) -> Result<Html<String>> {
    render(&state.templates, "admin.html", &Context::new())
}

pub async fn question_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response> {
    match state.quiz_service.get_question(&id).await {
        Ok(_) => {
            let mut context = Context::new();
            context.insert("question_id", &id);
            Ok(render(&state.templates, "question.html", &context)?.into_response())
        }
        Err(Error::NotFound(_)) => Ok((StatusCode::NOT_FOUND, QUESTION_NOT_FOUND).into_response()),
        Err(e) => Err(e),
    }
}
