//! Video handlers
//!
//! Each handler checks the raw input against its schema, runs one use case
//! and maps `MediaError` onto a status code.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use reelbase_domain::media::{GetVideoInput, MediaError, UploadVideoInput};
use tracing::{error, info, warn};

use crate::{
    dto::video::{
        validate_video_id, ErrorResponse, UploadVideoRequest, UploadVideoResponse, VideoResponse,
    },
    AppState,
};

/// Upload a new video
#[utoipa::path(
    post,
    path = "/media/videos",
    request_body = UploadVideoRequest,
    responses(
        (status = 201, description = "Video created", body = UploadVideoResponse),
        (status = 400, description = "Bad request - malformed body or invalid video", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "media"
)]
pub async fn upload_video_handler(
    State(state): State<AppState>,
    payload: Result<Json<UploadVideoRequest>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected upload body");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(rejection.body_text())),
            )
                .into_response();
        }
    };

    let issues = payload.validate();
    if !issues.is_empty() {
        warn!(issues = ?issues, "Upload body failed schema check");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_issues("Invalid request body", issues)),
        )
            .into_response();
    }

    info!(title_len = payload.title.len(), "Received upload request");

    match state
        .upload_video
        .execute(UploadVideoInput {
            title: payload.title,
        })
        .await
    {
        Ok(output) => {
            info!(video_id = %output.id, "Uploaded video");
            (
                StatusCode::CREATED,
                Json(UploadVideoResponse { id: output.id }),
            )
                .into_response()
        }
        Err(err) => media_error_response(err),
    }
}

/// Fetch a video by id
#[utoipa::path(
    get,
    path = "/media/videos/{id}",
    params(
        ("id" = String, Path, description = "Video identifier (UUID)")
    ),
    responses(
        (status = 200, description = "Video found", body = VideoResponse),
        (status = 400, description = "Bad request - id is not a UUID, or the stored video is invalid", body = ErrorResponse),
        (status = 404, description = "Video not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "media"
)]
pub async fn get_video_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let issues = validate_video_id(&id);
    if !issues.is_empty() {
        warn!(video_id = %id, "Lookup id failed schema check");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::with_issues("Invalid path parameters", issues)),
        )
            .into_response();
    }

    match state.get_video.execute(GetVideoInput { id }).await {
        Ok(output) => (
            StatusCode::OK,
            Json(VideoResponse {
                id: output.id,
                title: output.title,
            }),
        )
            .into_response(),
        Err(err) => media_error_response(err),
    }
}

/// Translate a use case failure into a response
///
/// The error payload (entity and issues, or the missing id) is forwarded as is.
pub fn media_error_response(err: MediaError) -> Response {
    let (status, body) = match err {
        MediaError::Validation(err) => {
            warn!(entity = err.entity(), issues = ?err.issues(), "Video failed validation");
            let message = err.to_string();
            let entity = err.entity().to_string();
            (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    entity: Some(entity),
                    issues: err.into_issues().into_iter().map(Into::into).collect(),
                    ..ErrorResponse::new(message)
                },
            )
        }
        MediaError::NotFound(err) => {
            info!(video_id = %err.id(), "Video not found");
            (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    id: Some(err.id().to_string()),
                    ..ErrorResponse::new(err.to_string())
                },
            )
        }
        MediaError::StorageFailure(msg) => {
            error!(error = %msg, "Video storage failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Internal server error"),
            )
        }
    };

    (status, Json(body)).into_response()
}
