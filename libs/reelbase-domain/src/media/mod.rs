//! Media bounded context
//!
//! The video entity, the ports it is persisted through, and the use cases
//! that orchestrate them.

mod entity;
mod error;
mod ports;
mod usecase;

pub use entity::{Video, VideoProps};
pub use error::{MediaError, Result, VideoNotFoundError};
pub use ports::{IdGenerator, VideoRepository};
pub use usecase::{
    GetVideo, GetVideoInput, GetVideoOutput, UploadVideo, UploadVideoInput, UploadVideoOutput,
};
