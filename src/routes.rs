use axum::{
    extract::{Form, Query, State},
    response::Html,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::handlers::{self, PageView, TranslateCommand};
use crate::page;
use crate::state::AppState;
use crate::translate::{Direction, TranslationResult};

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Form page
        .route("/", get(index))
        .route("/translate", post(translate_form))
        // JSON API
        .route("/api/translate", post(translate_json))
        .route("/api/directions", get(list_directions))
        .route("/api/health", get(health_check))
}

#[derive(Debug, Deserialize)]
struct IndexQuery {
    direction: Option<String>,
}

async fn index(Query(query): Query<IndexQuery>) -> Html<String> {
    let direction = query
        .direction
        .as_deref()
        .and_then(Direction::from_code)
        .unwrap_or_default();
    Html(page::render(&PageView::empty(direction)))
}

async fn translate_form(
    State(state): State<AppState>,
    Form(command): Form<TranslateCommand>,
) -> Html<String> {
    let view = handlers::handle_translate(state.translator.as_ref(), command).await;
    Html(page::render(&view))
}

async fn translate_json(
    State(state): State<AppState>,
    Json(command): Json<TranslateCommand>,
) -> Json<TranslationResult> {
    let result =
        handlers::run_translation(state.translator.as_ref(), command.direction, &command.text).await;
    Json(result)
}

async fn list_directions() -> Json<Value> {
    let directions: Vec<Value> = Direction::ALL
        .iter()
        .map(|d| {
            json!({
                "code": d.code(),
                "name": d.display_name(),
                "from": d.source_language(),
                "to": d.target_language(),
                "input_label": d.input_label(),
            })
        })
        .collect();
    Json(json!(directions))
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "region": state.config.translator.region,
        "category": state.config.translator.category,
    }))
}
