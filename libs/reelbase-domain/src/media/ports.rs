//! Ports (trait definitions) for external dependencies
//!
//! The domain states what it needs; infrastructure crates provide it.
//!
//! ## Static Dispatch
//!
//! Repository methods are native async functions spelled with `impl Future`
//! return types, so use cases are monomorphized over their repository and no
//! trait objects are involved.

use std::future::Future;

use super::{entity::Video, error::MediaError};

/// Port for Video persistence
///
/// The contract is intentionally small: an upsert and a lookup by id. Callers
/// depend on this trait only, never on a concrete backend.
pub trait VideoRepository: Send + Sync {
    /// Store a Video, replacing any Video already stored under the same id
    ///
    /// # Errors
    ///
    /// Returns `MediaError::StorageFailure` if the backend rejects the write
    fn save(&self, video: &Video) -> impl Future<Output = Result<(), MediaError>> + Send;

    /// Fetch the Video stored under `id`
    ///
    /// A miss is `Ok(None)`, never an error. Backends reading from untrusted
    /// storage re-validate what they reconstruct.
    ///
    /// # Errors
    ///
    /// - `MediaError::Validation` if a stored row no longer satisfies the Video invariants
    /// - `MediaError::StorageFailure` if the backend read fails
    fn get_by_id(
        &self,
        id: &str,
    ) -> impl Future<Output = Result<Option<Video>, MediaError>> + Send;
}

/// Port for identifier creation
///
/// Implementations must return syntactically valid UUIDs that do not collide
/// over the lifetime of the system.
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn new_id(&self) -> String;
}
