//! PostgreSQL repository implementations.

pub mod pg_access_log_repository;
pub mod pg_url_repository;

pub use pg_access_log_repository::PgAccessLogRepository;
pub use pg_url_repository::PgUrlRepository;
