pub mod config;
pub mod error;
pub mod handlers;
pub mod state;

use axum::{routing::get, Router};
use state::SharedState;
use tower_http::trace::TraceLayer;

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/.well-known/did.json", get(handlers::get_did_json))
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(
            // DID resolvers fetch the document cross-origin
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .with_state(state)
}
