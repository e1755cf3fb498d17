use crate::error::AppError;
use crate::state::SharedState;
use axum::extract::State;

pub async fn root(State(state): State<SharedState>) -> String {
    format!(
        "Bluesky feed generator service identity: {}",
        state.service().service_did
    )
}

pub async fn health() -> &'static str {
    "OK"
}

pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".to_string())
}
