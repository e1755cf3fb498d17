pub mod common;
pub mod well_known;

pub use common::{health, not_found, root};
pub use well_known::{get_did_json, handle, AxumSink, DidJsonHandler, ResponseSink};
