//! UUID-based identifier generation

use reelbase_domain::media::IdGenerator;
use uuid::Uuid;

/// Generates random (v4) UUIDs in lowercase hyphenated form
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidGenerator;

impl UuidGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for UuidGenerator {
    fn new_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
