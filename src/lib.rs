pub mod article;
pub mod cache;
pub mod config;
pub mod content;
pub mod error;
pub mod fallback;
pub mod http;

pub use error::RestError;
