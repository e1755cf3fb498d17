use crate::state::SharedState;
use axum::{
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use bsky_core::{did_document_for, DidDocument, ServiceConfig};
use std::sync::Arc;

/// レスポンスの書き込み先
///
/// 1 回の呼び出しにつき、どちらか一方だけが 1 度だけ呼ばれる。
pub trait ResponseSink {
    fn send_json(&mut self, body: DidDocument);
    fn send_status(&mut self, status: StatusCode);
}

/// `/.well-known/did.json` の応答器
#[derive(Debug, Clone)]
pub struct DidJsonHandler {
    config: Arc<ServiceConfig>,
}

/// 設定を受け取って did.json の応答器を作る
pub fn handle(config: ServiceConfig) -> DidJsonHandler {
    DidJsonHandler {
        config: Arc::new(config),
    }
}

impl DidJsonHandler {
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// リクエストは参照せず、設定だけで応答を決める
    pub fn respond<B, S: ResponseSink>(&self, _req: &axum::http::Request<B>, sink: &mut S) {
        match did_document_for(&self.config) {
            Some(document) => sink.send_json(document),
            None => {
                tracing::debug!(
                    "Service DID {} does not end with hostname {}, answering 404",
                    self.config.service_did,
                    self.config.hostname
                );
                sink.send_status(StatusCode::NOT_FOUND);
            }
        }
    }
}

/// axum のレスポンスに変換する ResponseSink
#[derive(Debug, Default)]
pub struct AxumSink {
    response: Option<Response>,
}

impl ResponseSink for AxumSink {
    fn send_json(&mut self, body: DidDocument) {
        self.response = Some(Json(body).into_response());
    }

    fn send_status(&mut self, status: StatusCode) {
        self.response = Some(status.into_response());
    }
}

impl IntoResponse for AxumSink {
    fn into_response(self) -> Response {
        match self.response {
            Some(response) => response,
            None => {
                tracing::error!("AxumSink converted before send_json or send_status was called");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

pub async fn get_did_json(State(state): State<SharedState>, req: Request) -> Response {
    let mut sink = AxumSink::default();
    state.did_json.respond(&req, &mut sink);
    sink.into_response()
}
