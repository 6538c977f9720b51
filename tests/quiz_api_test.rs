use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use chgk_quiz::{
    config::Config,
    routes,
    storage::{JsonFileStore, MemoryStore},
    AppState,
};
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

fn test_config(cooldown: Duration) -> Config {
    Config {
        static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
        answer_cooldown: cooldown,
        public_rps: 1000,
        ..Config::default()
    }
}

fn setup_app(cooldown: Duration) -> (Router, MemoryStore) {
    let store = MemoryStore::new();
    let state = AppState::new(test_config(cooldown), Arc::new(store.clone())).expect("state");
    (routes::router(state), store)
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

async fn create(app: &Router, question: &str, answer: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/question",
        Some(json!({ "question": question, "answer": answer })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_str().expect("id").to_string()
}

#[tokio::test]
async fn create_then_read_hides_answer() {
    let (app, _) = setup_app(Duration::from_secs(30));
    let (status, created) = send(
        &app,
        "POST",
        "/api/question",
        Some(json!({ "question": "Сколько будет 2+2?", "answer": "Четыре" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["url"], format!("/q/{}", id));

    let (status, body) = send(&app, "GET", &format!("/api/question/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"], "Сколько будет 2+2?");
    assert!(body.get("answer").is_none());
    assert_eq!(body.as_object().unwrap().len(), 1);
}

#[tokio::test]
async fn empty_fields_are_rejected_and_not_stored() {
    let (app, store) = setup_app(Duration::from_secs(30));
    for payload in [
        json!({ "question": "", "answer": "a" }),
        json!({ "question": "q", "answer": "   " }),
        json!({ "question": "q" }),
        json!({}),
    ] {
        let (status, body) = send(&app, "POST", "/api/question", Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Вопрос и ответ обязательны");
    }
    assert!(store.snapshot().questions.is_empty());
}

#[tokio::test]
async fn malformed_json_is_bad_request() {
    let (app, store) = setup_app(Duration::from_secs(30));
    let req = Request::builder()
        .method("POST")
        .uri("/api/question")
        .header("content-type", "application/json")
        .body(Body::from("{\"question\": "))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(store.snapshot().questions.is_empty());
}

#[tokio::test]
async fn image_url_must_use_http_scheme() {
    let (app, store) = setup_app(Duration::from_secs(30));
    let (status, body) = send(
        &app,
        "POST",
        "/api/question",
        Some(json!({ "question": "q", "answer": "a", "success_image": "ftp://example.com/a.png" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Ссылка на изображение должна начинаться с http:// или https://"
    );
    assert!(store.snapshot().questions.is_empty());
}

#[tokio::test]
async fn oversized_question_is_rejected() {
    let (app, _) = setup_app(Duration::from_secs(30));
    let (status, body) = send(
        &app,
        "POST",
        "/api/question",
        Some(json!({ "question": "в".repeat(5001), "answer": "a" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Вопрос слишком длинный (максимум 5000 символов)");
}

#[tokio::test]
async fn unknown_question_is_404_regardless_of_payload() {
    let (app, _) = setup_app(Duration::from_secs(30));
    let (status, _) = send(&app, "GET", "/api/question/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    for payload in [
        Some(json!({ "answer": "x", "client_id": "c" })),
        Some(json!({})),
        Some(json!([1, 2, 3])),
        None,
    ] {
        let (status, body) = send(&app, "POST", "/api/answer/nope", payload).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Вопрос не найден");
    }
}

#[tokio::test]
async fn answer_requires_client_id() {
    let (app, _) = setup_app(Duration::from_secs(30));
    let id = create(&app, "q", "a").await;
    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/answer/{}", id),
        Some(json!({ "answer": "a" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Требуется идентификатор клиента");
}

#[tokio::test]
async fn correct_answer_is_case_and_whitespace_insensitive() {
    let (app, _) = setup_app(Duration::from_secs(30));
    let (_, created) = send(
        &app,
        "POST",
        "/api/question",
        Some(json!({
            "question": "Столица России?",
            "answer": "Москва",
            "success_image": "https://example.com/win.gif"
        })),
    )
    .await;
    let id = created["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        "POST",
        &format!("/api/answer/{}", id),
        Some(json!({ "answer": "  мОСКВА  ", "client_id": "c1" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["correct"], true);
    assert_eq!(body["success_image"], "https://example.com/win.gif");
    assert_eq!(body["message"], "Поздравляем! Ответ правильный!");
}

#[tokio::test]
async fn wrong_answers_hit_cooldown_until_it_expires() {
    let (app, store) = setup_app(Duration::from_secs(1));
    let id = create(&app, "q", "верно").await;
    let uri = format!("/api/answer/{}", id);

    let (_, first) = send(&app, "POST", &uri, Some(json!({ "answer": "нет", "client_id": "c1" }))).await;
    assert_eq!(first["correct"], false);
    assert_eq!(first["timeout"], false);

    let (_, second) = send(&app, "POST", &uri, Some(json!({ "answer": "нет", "client_id": "c1" }))).await;
    assert_eq!(second["correct"], false);
    assert_eq!(second["timeout"], true);
    assert!(second["remaining_seconds"].as_u64().unwrap() > 0);

    // Another client is not affected.
    let (_, other) = send(&app, "POST", &uri, Some(json!({ "answer": "нет", "client_id": "c2" }))).await;
    assert_eq!(other["timeout"], false);

    tokio::time::sleep(Duration::from_millis(1100)).await;

    let (_, after) = send(&app, "POST", &uri, Some(json!({ "answer": "Верно", "client_id": "c1" }))).await;
    assert_eq!(after["correct"], true);
    let attempts = store.snapshot().attempts;
    assert!(!attempts.contains_key(&format!("{}:c1", id)));
    assert!(attempts.contains_key(&format!("{}:c2", id)));
}

#[tokio::test]
async fn question_page_renders_or_404s() {
    let (app, _) = setup_app(Duration::from_secs(30));
    let id = create(&app, "q", "a").await;

    let resp = app
        .clone()
        .oneshot(Request::builder().uri(format!("/q/{}", id)).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let html = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    assert!(String::from_utf8_lossy(&html).contains(&id));

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/q/missing").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let text = to_bytes(resp.into_body(), 1024).await.unwrap();
    assert_eq!(&text[..], "Вопрос не найден".as_bytes());

    let resp = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn static_bundle_and_health_are_served() {
    let (app, _) = setup_app(Duration::from_secs(30));
    let (status, body) = send(&app, "GET", "/static/questions.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["questions"].is_object());

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn file_backed_flow_persists_between_states() {
    let dir = std::env::temp_dir().join(format!("chgk-api-{}", uuid::Uuid::new_v4()));
    let path = dir.join("data.json");

    let state = AppState::new(
        test_config(Duration::from_secs(30)),
        Arc::new(JsonFileStore::new(&path)),
    )
    .unwrap();
    let app = routes::router(state);
    let id = create(&app, "Где?", "Там").await;
    let (_, wrong) = send(
        &app,
        "POST",
        &format!("/api/answer/{}", id),
        Some(json!({ "answer": "здесь", "client_id": "c" })),
    )
    .await;
    assert_eq!(wrong["timeout"], false);

    let saved: JsonValue = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["questions"][&id]["answer"], "там");
    assert!(saved["attempts"][format!("{}:c", id)].is_string());

    // A fresh state over the same file sees the cooldown.
    let reopened = AppState::new(
        test_config(Duration::from_secs(30)),
        Arc::new(JsonFileStore::new(&path)),
    )
    .unwrap();
    let app = routes::router(reopened);
    let (_, blocked) = send(
        &app,
        "POST",
        &format!("/api/answer/{}", id),
        Some(json!({ "answer": "там", "client_id": "c" })),
    )
    .await;
    assert_eq!(blocked["timeout"], true);
}
