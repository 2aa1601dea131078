//! Concrete adapters

mod db;
mod memory_repository;
mod postgres_repository;
mod uuid_generator;

pub use db::{connect, DbConfig, DbConfigError};
pub use memory_repository::InMemoryVideoRepository;
pub use postgres_repository::{PgVideoRepository, VideoRow};
pub use uuid_generator::UuidGenerator;
