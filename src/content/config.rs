use std::time::Duration;

use reqwest::Url;
use smart_default::SmartDefault;

use crate::fallback::Category;

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_millis(300_000);

/// Where and how to reach the content API.
#[derive(Debug, Clone)]
pub struct ContentConfig {
    pub endpoint: Url,
    pub token: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl ContentConfig {
    pub fn new(endpoint: Url) -> Self {
        Self {
            endpoint,
            token: None,
            request_timeout: None,
        }
    }
}

#[derive(Debug, Clone, SmartDefault)]
pub struct CacheConfig {
    #[default(DEFAULT_CACHE_TTL)]
    pub ttl: Duration,
    /// Unbounded when unset.
    pub max_entries: Option<u64>,
    pub default_category: Category,
}
