use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::article::{
    config::PageConfig,
    error::PageError,
    image::ImageUrlBuilder,
    queries::{ALL_ARTICLES, ARTICLES_BY_CATEGORY, ARTICLE_BY_SLUG},
    types::Article,
};
use crate::content::ContentClient;
use crate::fallback::{self, Category};

#[derive(Debug, Clone, Serialize)]
pub struct ArticlePage {
    pub article: Article,
    pub related: Vec<Article>,
    /// Set when any part of the page came from fallback data.
    pub degraded: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArticleList {
    pub articles: Vec<Article>,
    pub degraded: bool,
}

/// Builds article pages on top of the content client.
pub struct ArticlePages {
    content: Arc<ContentClient>,
    images: ImageUrlBuilder,
    related_limit: usize,
}

impl ArticlePages {
    pub fn new(content: Arc<ContentClient>, images: ImageUrlBuilder, config: &PageConfig) -> Self {
        Self {
            content,
            images,
            related_limit: config.related_limit,
        }
    }

    /// The article for `slug` plus up to `related_limit` other articles of its category.
    pub async fn article_page(&self, slug: &str) -> Result<ArticlePage, PageError> {
        validate_slug(slug)?;

        let params = json!({ "slug": slug });
        let lookup = self.content.fetch_outcome(ARTICLE_BY_SLUG, Some(&params)).await;

        let found = match select_article(lookup.payload(), slug)? {
            Some(article) => Some(article),
            // the lookup carries no category, so only the default table came back
            None if lookup.is_fallback() => find_in_fallback(slug)?,
            None => None,
        };
        let mut article = found.ok_or_else(|| PageError::NotFound(slug.to_string()))?;
        self.images.attach(&mut article);

        let list_params = article
            .category
            .as_ref()
            .map(|category| json!({ "category": category }));
        let listing = self
            .content
            .fetch_outcome(ALL_ARTICLES, list_params.as_ref())
            .await;

        let related: Vec<Article> = parse_list(listing.payload())?
            .into_iter()
            .filter(|candidate| {
                candidate.category == article.category && candidate.id != article.id
            })
            .take(self.related_limit)
            .map(|mut candidate| {
                self.images.attach(&mut candidate);
                candidate
            })
            .collect();

        debug!("assembled page for '{}' with {} related articles", slug, related.len());

        Ok(ArticlePage {
            article,
            related,
            degraded: lookup.is_fallback() || listing.is_fallback(),
        })
    }

    /// All articles, or those of one category.
    pub async fn articles(&self, category: Option<&str>) -> Result<ArticleList, PageError> {
        let outcome = match category {
            Some(category) => {
                let params = json!({ "category": category });
                self.content
                    .fetch_outcome(ARTICLES_BY_CATEGORY, Some(&params))
                    .await
            }
            None => self.content.fetch_outcome(ALL_ARTICLES, None).await,
        };

        let articles = parse_list(outcome.payload())?
            .into_iter()
            .filter(|article| match category {
                Some(category) => article
                    .category
                    .as_deref()
                    .is_some_and(|own| same_category(own, category)),
                None => true,
            })
            .map(|mut article| {
                self.images.attach(&mut article);
                article
            })
            .collect();

        Ok(ArticleList {
            articles,
            degraded: outcome.is_fallback(),
        })
    }
}

fn validate_slug(slug: &str) -> Result<(), PageError> {
    let valid = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-');

    if valid {
        Ok(())
    } else {
        Err(PageError::InvalidSlug(slug.to_string()))
    }
}

fn same_category(a: &str, b: &str) -> bool {
    a.trim().eq_ignore_ascii_case(b.trim())
}

fn find_in_fallback(slug: &str) -> Result<Option<Article>, PageError> {
    for category in Category::ALL {
        if let Some(article) = select_article(&fallback::articles(category), slug)? {
            return Ok(Some(article));
        }
    }
    Ok(None)
}

/// The article with `slug` from a single document or a list of them.
fn select_article(payload: &Value, slug: &str) -> Result<Option<Article>, PageError> {
    match payload {
        Value::Object(_) => {
            let article = Article::deserialize(payload)?;
            Ok(article.has_slug(slug).then_some(article))
        }
        _ => Ok(parse_list(payload)?
            .into_iter()
            .find(|article| article.has_slug(slug))),
    }
}

/// Articles in a list payload. Entries that aren't articles are skipped.
fn parse_list(payload: &Value) -> Result<Vec<Article>, PageError> {
    let items = match payload {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => return Err(PageError::NotAList(kind(other))),
    };

    Ok(items
        .iter()
        .filter_map(|item| match Article::deserialize(item) {
            Ok(article) => Some(article),
            Err(e) => {
                warn!("skipping malformed article in list: {}", e);
                None
            }
        })
        .collect())
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
