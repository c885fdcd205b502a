use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;
use thiserror::Error;

use crate::article::{ImageConfig, PageConfig};
use crate::content::{CacheConfig, ContentConfig};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("Invalid value '{value}' for {name}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Absent when `CONTENT_API_URL` isn't set.
    pub content: Option<ContentConfig>,
    pub cache: CacheConfig,
    pub images: ImageConfig,
    pub pages: PageConfig,
    /// Report every page error as "not found".
    pub merge_page_errors: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars(lookup);

        let content = match vars.parse::<Url>("CONTENT_API_URL")? {
            Some(endpoint) => Some(ContentConfig {
                endpoint,
                token: vars.get("CONTENT_API_TOKEN"),
                request_timeout: vars
                    .parse::<u64>("CONTENT_REQUEST_TIMEOUT_SECS")?
                    .map(Duration::from_secs),
            }),
            None => None,
        };

        let defaults = CacheConfig::default();
        let cache = CacheConfig {
            ttl: vars
                .parse::<u64>("CONTENT_CACHE_TTL_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.ttl),
            max_entries: vars.parse("CONTENT_CACHE_MAX_ENTRIES")?,
            default_category: vars
                .parse("CONTENT_DEFAULT_CATEGORY")?
                .unwrap_or(defaults.default_category),
        };

        let defaults = ImageConfig::default();
        let images = ImageConfig {
            project_id: vars.get("SANITY_PROJECT_ID").unwrap_or(defaults.project_id),
            dataset: vars.get("SANITY_DATASET").unwrap_or(defaults.dataset),
            cdn_url: vars.get("IMAGE_CDN_URL").unwrap_or(defaults.cdn_url),
        };

        let pages = PageConfig {
            related_limit: vars
                .parse("SITE_RELATED_LIMIT")?
                .unwrap_or(PageConfig::default().related_limit),
        };

        Ok(Self {
            content,
            cache,
            images,
            pages,
            merge_page_errors: vars.parse("SITE_MERGE_PAGE_ERRORS")?.unwrap_or(true),
        })
    }

    pub fn require_content(&self) -> Result<&ContentConfig, ConfigError> {
        self.content
            .as_ref()
            .ok_or(ConfigError::Missing("CONTENT_API_URL"))
    }
}

struct Vars<F>(F);

impl<F> Vars<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, name: &str) -> Option<String> {
        (self.0)(name).filter(|value| !value.trim().is_empty())
    }

    fn parse<T: FromStr>(&self, name: &'static str) -> Result<Option<T>, ConfigError> {
        self.get(name)
            .map(|value| {
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Invalid { name, value })
            })
            .transpose()
    }
}
