use regex::Regex;

use crate::article::{config::ImageConfig, types::Article};

/// Resolves image asset references (`image-<id>-<w>x<h>-<ext>`) to CDN URLs.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    base: String,
    reference: Regex,
}

impl ImageUrlBuilder {
    pub fn new(config: &ImageConfig) -> Result<Self, regex::Error> {
        let base = format!(
            "{}/images/{}/{}",
            config.cdn_url.trim_end_matches('/'),
            config.project_id,
            config.dataset
        );
        let reference = Regex::new(r"^image-([A-Za-z0-9]+)-(\d+x\d+)-([a-z0-9]+)$")?;

        Ok(Self { base, reference })
    }

    pub fn url_for(&self, reference: &str) -> Option<String> {
        let captures = self.reference.captures(reference)?;
        let (_, [id, dimensions, format]) = captures.extract();
        Some(format!("{}/{id}-{dimensions}.{format}", self.base))
    }

    /// Fills `image_url` unless the article already carries one.
    pub fn attach(&self, article: &mut Article) {
        if article.image_url.is_some() {
            return;
        }

        let Some(asset) = article.main_image.as_ref().and_then(|image| image.asset.as_ref()) else {
            return;
        };

        article.image_url = asset
            .url
            .clone()
            .or_else(|| asset.reference.as_deref().and_then(|r| self.url_for(r)));
    }
}
