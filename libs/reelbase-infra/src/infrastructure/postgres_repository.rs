//! PostgreSQL Video repository
//!
//! This module implements the `VideoRepository` port on top of `sqlx`.
//! Rows read back are treated as untrusted: each one is rebuilt into a
//! `Video` and validated again before it reaches a use case.

use std::future::Future;

use reelbase_domain::{
    media::{MediaError, Video, VideoProps, VideoRepository},
    EntityValidationError,
};
use sqlx::{migrate::MigrateError, FromRow, PgPool};
use tracing::{debug, error, info, instrument, warn};

const UPSERT_VIDEO: &str = r#"
    INSERT INTO videos (id, title)
    VALUES ($1, $2)
    ON CONFLICT (id) DO UPDATE SET title = EXCLUDED.title
"#;

const SELECT_VIDEO_BY_ID: &str = r#"
    SELECT id, title
    FROM videos
    WHERE id = $1
"#;

/// Raw `videos` row
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct VideoRow {
    pub id: String,
    pub title: String,
}

impl VideoRow {
    /// Rebuild a Video from the stored fields and check its invariants
    ///
    /// # Errors
    ///
    /// Returns `EntityValidationError` when the row is corrupt
    pub fn into_video(self) -> Result<Video, EntityValidationError> {
        let video = Video::new(VideoProps {
            id: self.id,
            title: self.title,
        });
        video.validate()?;
        Ok(video)
    }
}

/// PostgreSQL-based implementation of the VideoRepository port
///
/// Durability and isolation come from PostgreSQL's native upsert; this adapter
/// adds no locking of its own.
///
/// ## Error Handling
///
/// Driver errors become `MediaError::StorageFailure`. A stored row that fails
/// validation surfaces as `MediaError::Validation`, the same kind client input
/// produces, so callers see corrupt data as a bad-input outcome.
#[derive(Debug, Clone)]
pub struct PgVideoRepository {
    pool: PgPool,
}

impl PgVideoRepository {
    /// Create a new PostgreSQL repository
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use reelbase_infra::{connect, DbConfig, PgVideoRepository};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = connect(&DbConfig::from_env()?).await?;
    /// let repo = PgVideoRepository::new(pool);
    /// repo.migrate().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(pool: PgPool) -> Self {
        info!("Initializing PgVideoRepository");
        Self { pool }
    }

    /// Apply the embedded schema migrations
    pub async fn migrate(&self) -> Result<(), MigrateError> {
        info!("Running video schema migrations");
        sqlx::migrate!("./migrations").run(&self.pool).await
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

impl VideoRepository for PgVideoRepository {
    #[instrument(skip(self, video), fields(video_id = %video.id()))]
    fn save(&self, video: &Video) -> impl Future<Output = Result<(), MediaError>> + Send {
        let pool = self.pool.clone();
        let id = video.id().to_string();
        let title = video.title().to_string();

        async move {
            debug!(video_id = %id, "Upserting video");

            match sqlx::query(UPSERT_VIDEO)
                .bind(&id)
                .bind(&title)
                .execute(&pool)
                .await
            {
                Ok(_) => {
                    info!(video_id = %id, "Saved video");
                    Ok(())
                }
                Err(err) => {
                    error!(video_id = %id, error = ?err, "Failed to save video");
                    Err(MediaError::storage_failure(format!(
                        "upsert failed for video '{}': {}",
                        id, err
                    )))
                }
            }
        }
    }

    #[instrument(skip(self), fields(video_id = %id))]
    fn get_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Video>, MediaError>> + Send {
        let pool = self.pool.clone();
        let id = id.to_string();

        async move {
            debug!(video_id = %id, "Fetching video");

            let row = sqlx::query_as::<_, VideoRow>(SELECT_VIDEO_BY_ID)
                .bind(&id)
                .fetch_optional(&pool)
                .await
                .map_err(|err| {
                    error!(video_id = %id, error = ?err, "Failed to fetch video");
                    MediaError::storage_failure(format!(
                        "lookup failed for video '{}': {}",
                        id, err
                    ))
                })?;

            let Some(row) = row else {
                debug!(video_id = %id, "Video not stored");
                return Ok(None);
            };

            match row.into_video() {
                Ok(video) => Ok(Some(video)),
                Err(err) => {
                    warn!(video_id = %id, issues = ?err.issues(), "Stored video failed validation");
                    Err(err.into())
                }
            }
        }
    }
}
