//! In-memory Video repository
//!
//! Backs the service when no database is configured and doubles as a test
//! fake. Not durable: everything is lost when the process exits.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use reelbase_domain::media::{MediaError, Video, VideoRepository};
use tracing::{debug, instrument};

/// Map-backed implementation of the VideoRepository port
///
/// Cloning yields another handle on the same map, which lets one store back
/// several use cases. Concurrent saves for the same id race and the last one
/// to take the lock wins, the usual upsert semantics.
#[derive(Debug, Clone, Default)]
pub struct InMemoryVideoRepository {
    videos: Arc<Mutex<HashMap<String, Video>>>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored videos
    ///
    /// Counts through a poisoned lock: a writer that panicked cannot leave
    /// the map half-updated, since every write is a single insert.
    pub fn len(&self) -> usize {
        self.videos
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn lock_videos(
    videos: &Mutex<HashMap<String, Video>>,
) -> Result<MutexGuard<'_, HashMap<String, Video>>, MediaError> {
    videos
        .lock()
        .map_err(|_| MediaError::storage_failure("in-memory video store lock poisoned"))
}

impl VideoRepository for InMemoryVideoRepository {
    #[instrument(skip(self, video), fields(video_id = %video.id()))]
    fn save(&self, video: &Video) -> impl Future<Output = Result<(), MediaError>> + Send {
        let videos = self.videos.clone();
        let video = video.clone();

        async move {
            let mut guard = lock_videos(&videos)?;
            let replaced = guard.insert(video.id().to_string(), video).is_some();
            debug!(replaced, "Stored video in memory");
            Ok(())
        }
    }

    #[instrument(skip(self), fields(video_id = %id))]
    fn get_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Video>, MediaError>> + Send {
        let videos = self.videos.clone();
        let id = id.to_string();

        async move {
            let found = lock_videos(&videos)?.get(&id).cloned();
            debug!(found = found.is_some(), "Looked up video in memory");
            Ok(found)
        }
    }
}
