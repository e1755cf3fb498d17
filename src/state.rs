use crate::handlers::{handle, DidJsonHandler};
use bsky_core::ServiceConfig;

pub type SharedState = AppState;

#[derive(Clone, Debug)]
pub struct AppState {
    pub did_json: DidJsonHandler,
}

impl AppState {
    pub fn new(service: ServiceConfig) -> Self {
        Self {
            did_json: handle(service),
        }
    }

    pub fn service(&self) -> &ServiceConfig {
        self.did_json.config()
    }
}
