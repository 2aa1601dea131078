//! API routes

pub mod video;

use axum::{routing::get, Router};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    dto::{
        health::HealthResponse,
        video::{ErrorResponse, IssueResponse, UploadVideoRequest, UploadVideoResponse, VideoResponse},
    },
    handlers::{self, health::health_handler},
    AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::video::upload_video_handler,
        handlers::video::get_video_handler,
        handlers::health::health_handler
    ),
    components(schemas(
        UploadVideoRequest,
        UploadVideoResponse,
        VideoResponse,
        IssueResponse,
        ErrorResponse,
        HealthResponse
    )),
    tags(
        (name = "media", description = "Register videos and read them back by id"),
        (name = "health", description = "Liveness")
    ),
    info(title = "Reel API", version = "0.1.0", description = "Video catalogue over HTTP")
)]
pub struct ApiDoc;

/// Build the service router: `/media/*`, `/health` and the Swagger UI
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/media", video::routes())
        .route("/health", get(health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{handlers::video::media_error_response, store::VideoBackend};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
        response::Response,
    };
    use reelbase_domain::{
        media::{GetVideo, GetVideoInput, MediaError, Video, VideoProps, VideoRepository},
        EntityValidationError, ValidationIssue,
    };
    use reelbase_infra::{infrastructure::VideoRow, InMemoryVideoRepository};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    const VIDEO_ID: &str = "550e8400-e29b-41d4-a716-446655440000";

    fn app_with(repo: InMemoryVideoRepository) -> Router {
        create_router(AppState::new(VideoBackend::Memory(repo)))
    }

    fn app() -> Router {
        app_with(InMemoryVideoRepository::new())
    }

    fn post_video(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/media/videos")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_video(id: &str) -> Request<Body> {
        Request::builder()
            .uri(format!("/media/videos/{}", id))
            .body(Body::empty())
            .unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_upload_then_get() {
        let app = app();

        let response = app.clone().oneshot(post_video(r#"{"title":"hello"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = json_body(response).await;
        let id = body["id"].as_str().unwrap().to_string();
        assert_eq!(id.len(), 36);

        let response = app.oneshot(get_video(&id)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, json!({ "id": id, "title": "hello" }));
    }

    #[tokio::test]
    async fn test_upload_empty_title_is_bad_request() {
        let repo = InMemoryVideoRepository::new();
        let app = app_with(repo.clone());

        let response = app.oneshot(post_video(r#"{"title":""}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["issues"][0]["path"], "title");
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn test_upload_malformed_body_is_bad_request() {
        let response = app().oneshot(post_video(r#"{"name":"hello"}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = app().oneshot(post_video("not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_unknown_video_is_not_found() {
        let response = app().oneshot(get_video(VIDEO_ID)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = json_body(response).await;
        assert_eq!(body["id"], VIDEO_ID);
        assert_eq!(body["error"], format!("video not found: {}", VIDEO_ID));
    }

    #[tokio::test]
    async fn test_get_with_invalid_id_is_bad_request() {
        let response = app().oneshot(get_video("invalid")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["issues"][0]["path"], "id");
    }

    #[tokio::test]
    async fn test_get_existing_video() {
        let repo = InMemoryVideoRepository::new();
        repo.save(&Video::new(VideoProps {
            id: VIDEO_ID.to_string(),
            title: "stored".to_string(),
        }))
        .await
        .unwrap();

        let response = app_with(repo).oneshot(get_video(VIDEO_ID)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "id": VIDEO_ID, "title": "stored" })
        );
    }

    #[tokio::test]
    async fn test_health() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({ "status": "ok", "storage": "memory" })
        );
    }

    #[tokio::test]
    async fn test_validation_error_maps_to_bad_request_with_issues() {
        let err = EntityValidationError::new(
            "Video",
            vec![
                ValidationIssue::new("id", "Invalid uuid"),
                ValidationIssue::new("title", "String must contain at least 1 character(s)"),
            ],
        );

        let response = media_error_response(MediaError::Validation(err));
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_body(response).await;
        assert_eq!(body["error"], "Video validation failed");
        assert_eq!(body["entity"], "Video");
        assert_eq!(body["issues"][0]["path"], "id");
        assert_eq!(body["issues"][1]["path"], "title");
    }

    // Stores raw rows and rebuilds them on read, like the PostgreSQL adapter
    struct RowStore {
        row: VideoRow,
    }

    impl VideoRepository for RowStore {
        fn save(
            &self,
            _video: &Video,
        ) -> impl std::future::Future<Output = Result<(), MediaError>> + Send {
            async { Ok(()) }
        }

        fn get_by_id(
            &self,
            _id: &str,
        ) -> impl std::future::Future<Output = Result<Option<Video>, MediaError>> + Send {
            let row = self.row.clone();
            async move { Ok(Some(row.into_video()?)) }
        }
    }

    #[tokio::test]
    async fn test_corrupt_stored_video_maps_to_bad_request() {
        let get = GetVideo::new(RowStore {
            row: VideoRow {
                id: "legacy-42".to_string(),
                title: String::new(),
            },
        });

        let err = get
            .execute(GetVideoInput {
                id: VIDEO_ID.to_string(),
            })
            .await
            .unwrap_err();

        let response = media_error_response(err);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            json_body(response).await,
            json!({
                "error": "Video validation failed",
                "entity": "Video",
                "issues": [
                    { "path": "id", "message": "Invalid uuid" },
                    { "path": "title", "message": "String must contain at least 1 character(s)" }
                ]
            })
        );
    }

    #[tokio::test]
    async fn test_storage_failure_maps_to_internal_error() {
        let response = media_error_response(MediaError::storage_failure("connection refused"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = json_body(response).await;
        assert_eq!(body["error"], "Internal server error");
    }

    #[test]
    fn test_openapi_lists_video_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/media/videos"));
        assert!(doc.paths.paths.contains_key("/media/videos/{id}"));
        assert!(doc.paths.paths.contains_key("/health"));
    }

    #[tokio::test]
    async fn test_openapi_json_is_served() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["components"]["schemas"]["HealthResponse"].is_object());
    }
}
