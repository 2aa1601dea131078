//! Repository backend selected at startup

use std::future::Future;

use reelbase_domain::media::{MediaError, Video, VideoRepository};
use reelbase_infra::{InMemoryVideoRepository, PgVideoRepository};

/// The repository the service runs on
///
/// Use cases are generic over their repository; this enum lets the binary
/// pick one at runtime while keeping static dispatch.
#[derive(Debug, Clone)]
pub enum VideoBackend {
    Memory(InMemoryVideoRepository),
    Postgres(PgVideoRepository),
}

impl VideoBackend {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
            Self::Postgres(_) => "postgres",
        }
    }
}

impl VideoRepository for VideoBackend {
    fn save(&self, video: &Video) -> impl Future<Output = Result<(), MediaError>> + Send {
        async move {
            match self {
                Self::Memory(repo) => repo.save(video).await,
                Self::Postgres(repo) => repo.save(video).await,
            }
        }
    }

    fn get_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Video>, MediaError>> + Send {
        async move {
            match self {
                Self::Memory(repo) => repo.get_by_id(id).await,
                Self::Postgres(repo) => repo.get_by_id(id).await,
            }
        }
    }
}
