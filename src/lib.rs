/*!
medialist. lists the media files kept in a github repository

a single endpoint that asks the github contents api for a directory listing,
keeps the videos and images, and hands them back as a small json array
*/

/// Configuration
pub mod config;
pub use config::Config;

/// Errors produced while building a listing
pub mod error;
pub use error::ListingError;

/// Extension allow-list and the output records
pub mod media;
pub use media::{MediaItem, MediaKind, RemoteEntry};

/// Client for the github contents api
pub mod github;

mod listing;
pub use listing::Listing;

/// Inbound http
pub mod http;

pub static DEFAULT_CONFIG: &str = include_str!("../default.toml");
