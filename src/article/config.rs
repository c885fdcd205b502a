use smart_default::SmartDefault;

pub const DEFAULT_RELATED_LIMIT: usize = 6;

/// Image CDN coordinates used to turn asset references into URLs.
#[derive(Debug, Clone, SmartDefault)]
pub struct ImageConfig {
    #[default("demo".to_string())]
    pub project_id: String,
    #[default("production".to_string())]
    pub dataset: String,
    #[default("https://cdn.sanity.io".to_string())]
    pub cdn_url: String,
}

#[derive(Debug, Clone, SmartDefault)]
pub struct PageConfig {
    #[default(DEFAULT_RELATED_LIMIT)]
    pub related_limit: usize,
}
