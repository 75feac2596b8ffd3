mod error;
mod relay;

pub use error::ApiError;

use axum::{routing::post, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/set-type", post(relay::set_type))
        .route("/upload-file", post(relay::upload_file))
}
