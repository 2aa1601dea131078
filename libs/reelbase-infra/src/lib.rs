//! # Reelbase Infrastructure
//!
//! Adapters implementing the ports declared in `reelbase-domain`:
//!
//! - [`InMemoryVideoRepository`]: process-local map, used as the default backend and in tests
//! - [`PgVideoRepository`]: PostgreSQL through `sqlx`, re-validating every row it reads
//! - [`UuidGenerator`]: random UUID v4 identifiers

pub mod infrastructure;

pub use infrastructure::{
    connect, DbConfig, DbConfigError, InMemoryVideoRepository, PgVideoRepository, UuidGenerator,
};
