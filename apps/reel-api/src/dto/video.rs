//! DTOs for video endpoints

use reelbase_domain::ValidationIssue;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Request body for the upload endpoint
#[derive(Debug, Deserialize, ToSchema)]
pub struct UploadVideoRequest {
    /// Title of the video, at least one character
    #[schema(example = "My first video", min_length = 1)]
    pub title: String,
}

impl UploadVideoRequest {
    /// Schema check run before the use case is invoked
    pub fn validate(&self) -> Vec<IssueResponse> {
        let mut issues = Vec::new();
        if self.title.is_empty() {
            issues.push(IssueResponse {
                path: "title".to_string(),
                message: "String must contain at least 1 character(s)".to_string(),
            });
        }
        issues
    }
}

/// Schema check for the `id` path parameter
pub fn validate_video_id(id: &str) -> Vec<IssueResponse> {
    if id.len() == 36 && Uuid::try_parse(id).is_ok() {
        Vec::new()
    } else {
        vec![IssueResponse {
            path: "id".to_string(),
            message: "Invalid uuid".to_string(),
        }]
    }
}

/// Response body for a successful upload
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UploadVideoResponse {
    /// Identifier assigned to the new video
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
}

/// Response body for a video lookup
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: String,
    #[schema(example = "My first video")]
    pub title: String,
}

/// One violated rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IssueResponse {
    #[schema(example = "title")]
    pub path: String,
    #[schema(example = "String must contain at least 1 character(s)")]
    pub message: String,
}

impl From<ValidationIssue> for IssueResponse {
    fn from(issue: ValidationIssue) -> Self {
        Self {
            path: issue.path,
            message: issue.message,
        }
    }
}

/// Error response body
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error description
    #[schema(example = "Video validation failed")]
    pub error: String,
    /// Entity that failed validation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,
    /// Violated rules, in evaluation order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<IssueResponse>,
    /// Identifier that was not found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ..Self::default()
        }
    }

    pub fn with_issues(error: impl Into<String>, issues: Vec<IssueResponse>) -> Self {
        Self {
            issues,
            ..Self::new(error)
        }
    }
}
