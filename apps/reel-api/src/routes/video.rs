//! Video routes, mounted under `/media`

use axum::{
    routing::{get, post},
    Router,
};

use crate::{
    handlers::video::{get_video_handler, upload_video_handler},
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/videos", post(upload_video_handler))
        .route("/videos/:id", get(get_video_handler))
}
