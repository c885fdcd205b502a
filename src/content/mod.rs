// Content API client with caching and fallback

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod outcome;
pub mod source;

pub use client::ContentClient;
pub use config::{CacheConfig, ContentConfig};
pub use error::ContentError;
pub use http::HttpContentSource;
pub use mock::MockContentSource;
pub use outcome::{FetchOutcome, Payload};
pub use source::ContentSource;
