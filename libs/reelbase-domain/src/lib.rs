//! # Reelbase Domain Layer
//!
//! This crate contains the business rules for the Reelbase video catalogue.
//! It follows a layered ("clean") architecture:
//!
//! - **Entities**: the self-validating [`Video`]
//! - **Ports**: traits for what the core needs but does not implement
//!   ([`VideoRepository`], [`IdGenerator`])
//! - **Use cases**: [`UploadVideo`] and [`GetVideo`]
//!
//! ## Architecture
//!
//! This layer has NO dependencies on infrastructure concerns (databases, HTTP,
//! logging). Adapters live in `reelbase-infra` and the `reel-api` binary.
//!
//! ## Example
//!
//! ```rust
//! use reelbase_domain::media::{GetVideo, GetVideoInput, VideoRepository};
//!
//! async fn example<R: VideoRepository>(get_video: GetVideo<R>) {
//!     let input = GetVideoInput {
//!         id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
//!     };
//!     match get_video.execute(input).await {
//!         Ok(video) => println!("Found {}", video.title),
//!         Err(err) => println!("Lookup failed: {}", err),
//!     }
//! }
//! ```

pub mod media;
pub mod shared;

// Re-export commonly used types
pub use media::{
    GetVideo, IdGenerator, MediaError, UploadVideo, Video, VideoNotFoundError, VideoProps,
    VideoRepository,
};
pub use shared::error::{EntityValidationError, ValidationIssue};
