use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{confirm_code, request_code};

pub fn init_verification_router() -> Router<AppState> {
    Router::new()
        .route("/request-code", post(request_code))
        .route("/confirm", post(confirm_code))
}
