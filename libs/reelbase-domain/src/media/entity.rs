//! The Video entity
//!
//! A Video is identified by a UUID string and carries a title. Construction
//! never checks anything; [`Video::validate`] must be called before the
//! instance is trusted (use cases do this before persisting, persistent
//! repositories do it after reading).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{EntityValidationError, ValidationIssue};

const ENTITY_NAME: &str = "Video";

/// Raw fields of a Video, also its serialized shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoProps {
    pub id: String,
    pub title: String,
}

/// An uploaded video
///
/// Immutable once built: changing a field means constructing a new Video.
///
/// # Example
///
/// ```rust
/// use reelbase_domain::media::{Video, VideoProps};
///
/// let video = Video::new(VideoProps {
///     id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
///     title: "hello".to_string(),
/// });
/// assert!(video.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "VideoProps", into = "VideoProps")]
pub struct Video {
    id: String,
    title: String,
}

impl Video {
    /// Store the given fields verbatim, without validation
    pub fn new(props: VideoProps) -> Self {
        Self {
            id: props.id,
            title: props.title,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Check every field invariant
    ///
    /// All rules are evaluated, so a Video violating several of them reports
    /// one issue per rule, in field order (`id`, then `title`). Calling this
    /// has no side effect and always yields the same outcome for the same Video.
    ///
    /// # Errors
    ///
    /// Returns `EntityValidationError` naming "Video" if any rule fails
    pub fn validate(&self) -> Result<(), EntityValidationError> {
        let mut issues = Vec::new();

        if !is_uuid(&self.id) {
            issues.push(ValidationIssue::new("id", "Invalid uuid"));
        }

        if self.title.is_empty() {
            issues.push(ValidationIssue::new(
                "title",
                "String must contain at least 1 character(s)",
            ));
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(EntityValidationError::new(ENTITY_NAME, issues))
        }
    }

    /// Consume the Video and return its raw fields
    pub fn into_props(self) -> VideoProps {
        VideoProps {
            id: self.id,
            title: self.title,
        }
    }
}

impl From<VideoProps> for Video {
    fn from(props: VideoProps) -> Self {
        Self::new(props)
    }
}

impl From<Video> for VideoProps {
    fn from(video: Video) -> Self {
        video.into_props()
    }
}

/// Only the canonical hyphenated form (8-4-4-4-12) is accepted.
/// Braced, URN and simple forms are rejected even though `Uuid` parses them.
fn is_uuid(value: &str) -> bool {
    value.len() == 36 && Uuid::try_parse(value).is_ok()
}
