//! Business logic services.

pub mod auth_service;
pub mod stats_service;
pub mod url_service;

pub use auth_service::AuthService;
pub use stats_service::{StatsService, UrlStats};
pub use url_service::{CreateOutcome, UrlService};
