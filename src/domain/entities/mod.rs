//! Core business entities.

pub mod access_log;
pub mod short_url;

pub use access_log::{AccessLog, NewAccess};
pub use short_url::{NewShortUrl, ShortUrl};
