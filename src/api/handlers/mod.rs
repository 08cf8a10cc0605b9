//! HTTP request handlers.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod details;
pub mod health;
pub mod links;
pub mod redirect;
pub mod shorten;
pub mod stats;

pub use details::details_handler;
pub use health::health_handler;
pub use links::{delete_url_handler, update_url_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
