//! Media use cases - application-level orchestration
//!
//! Each use case owns exactly one repository and at most one id generator,
//! received at construction. They keep no state between invocations.

use serde::{Deserialize, Serialize};

use super::{
    entity::{Video, VideoProps},
    error::MediaError,
    ports::{IdGenerator, VideoRepository},
};

/// Input of [`UploadVideo`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadVideoInput {
    pub title: String,
}

/// Output of [`UploadVideo`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadVideoOutput {
    pub id: String,
}

/// Register a new Video
pub struct UploadVideo<R, G> {
    repository: R,
    id_generator: G,
}

impl<R, G> UploadVideo<R, G>
where
    R: VideoRepository,
    G: IdGenerator,
{
    pub fn new(repository: R, id_generator: G) -> Self {
        Self {
            repository,
            id_generator,
        }
    }

    /// Create, validate and persist a Video, returning its new id
    ///
    /// Steps run in a fixed order:
    /// 1. Obtain an id from the generator
    /// 2. Build the Video
    /// 3. Validate it
    /// 4. Save it
    ///
    /// A Video that fails validation is never saved.
    ///
    /// # Errors
    ///
    /// - `MediaError::Validation` if the title (or generated id) is invalid
    /// - `MediaError::StorageFailure` if the repository write fails
    pub async fn execute(&self, input: UploadVideoInput) -> Result<UploadVideoOutput, MediaError> {
        let video = Video::new(VideoProps {
            id: self.id_generator.new_id(),
            title: input.title,
        });

        video.validate()?;

        self.repository.save(&video).await?;

        Ok(UploadVideoOutput {
            id: video.id().to_string(),
        })
    }
}

/// Input of [`GetVideo`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetVideoInput {
    pub id: String,
}

/// Output of [`GetVideo`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetVideoOutput {
    pub id: String,
    pub title: String,
}

/// Fetch a Video or fail
///
/// Does not re-validate what it reads; trust is delegated to the repository.
pub struct GetVideo<R> {
    repository: R,
}

impl<R> GetVideo<R>
where
    R: VideoRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - `MediaError::NotFound` carrying `input.id` when nothing is stored under it
    /// - any error raised by the repository, unchanged
    pub async fn execute(&self, input: GetVideoInput) -> Result<GetVideoOutput, MediaError> {
        let found = self.repository.get_by_id(&input.id).await?;
        let video = found.ok_or_else(|| MediaError::not_found(input.id))?;

        let props = video.into_props();
        Ok(GetVideoOutput {
            id: props.id,
            title: props.title,
        })
    }
}
