use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{issue_pass, scan_pass};

pub fn init_passes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(issue_pass))
        .route("/scan", post(scan_pass))
}
