use axum::{
    body::Bytes,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use gopher_core::{translate_sentence, translate_word, History, TranslationError};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
struct WordRequest {
    #[serde(rename = "english-word", default)]
    english: String,
}

#[derive(Deserialize)]
struct SentenceRequest {
    #[serde(rename = "english-sentence", default)]
    english: String,
}

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

pub fn translate_routes() -> Router<AppState> {
    Router::new()
        .route("/word", post(word))
        .route("/sentence", post(sentence))
}

pub fn history_routes() -> Router<AppState> {
    Router::new().route("/history", get(history))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "entries": state.history.len(),
        "uptime_secs": state.start_time.elapsed().as_secs(),
    }))
}

/// Load from history, or translate and remember. Concurrent misses on the
/// same phrase may both translate; the result is identical either way.
fn load_or_translate(
    history: &History,
    english: &str,
    translate: fn(&str) -> Result<String, TranslationError>,
) -> Result<String, ApiError> {
    if let Some(gopher) = history.load(english) {
        debug!(english, "history hit");
        return Ok(gopher);
    }

    let gopher = translate(english).map_err(|e| {
        warn!(english, kind = e.kind().as_str(), "translation failed: {e}");
        ApiError::from(e)
    })?;
    debug!(english, gopher = %gopher, "history miss, storing");
    history.store(english, gopher.clone());
    Ok(gopher)
}

async fn word(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let req: WordRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    if req.english.is_empty() {
        return Err(ApiError::bad_request("No english word provided."));
    }

    let gopher = load_or_translate(&state.history, &req.english, translate_word)?;
    Ok(Json(json!({ "gopher-word": gopher })))
}

async fn sentence(State(state): State<AppState>, body: Bytes) -> Result<Json<Value>, ApiError> {
    let req: SentenceRequest =
        serde_json::from_slice(&body).map_err(|e| ApiError::bad_request(e.to_string()))?;
    if req.english.is_empty() {
        return Err(ApiError::bad_request("No english sentence provided."));
    }

    let gopher = load_or_translate(&state.history, &req.english, translate_sentence)?;
    Ok(Json(json!({ "gopher-sentence": gopher })))
}

async fn history(State(state): State<AppState>) -> Result<Response, ApiError> {
    let body = state.history.export()?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}
