use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bsky_core::ServiceConfig;
use feedgen_did::{
    app,
    state::{AppState, SharedState},
};
use tower::ServiceExt; // for oneshot

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }
}

pub struct TestClient {
    pub router: Router,
    pub state: SharedState,
}

impl TestClient {
    pub fn new(service_did: &str, hostname: &str) -> Self {
        let state = AppState::new(ServiceConfig::new(service_did, hostname));
        let router = app(state.clone());
        Self { router, state }
    }

    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        // Router is cheap to clone; oneshot consumes it
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.to_string());
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();

        TestResponse {
            status,
            content_type,
            body,
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        let request = Request::builder()
            .uri(uri)
            .method("GET")
            .header("Host", "feeds.localhost")
            .body(Body::empty())
            .unwrap();

        self.request(request).await
    }

    pub async fn get_did_json(&self) -> TestResponse {
        self.get("/.well-known/did.json").await
    }

    pub async fn get_health(&self) -> TestResponse {
        self.get("/health").await
    }
}
