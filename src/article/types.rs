use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Article document as returned by the content API.
///
/// Fields this crate doesn't read are kept in `extra` and serialized back out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "_id")]
    pub id: String,
    pub slug: Slug,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_image: Option<MainImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn has_slug(&self, slug: &str) -> bool {
        self.slug.current == slug
    }
}

/// Accepts both `"slug"` and `{"current": "slug"}`, always writes the latter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SlugRepr")]
pub struct Slug {
    pub current: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum SlugRepr {
    Plain(String),
    Document { current: String },
}

impl From<SlugRepr> for Slug {
    fn from(repr: SlugRepr) -> Self {
        match repr {
            SlugRepr::Plain(current) | SlugRepr::Document { current } => Slug { current },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainImage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset: Option<ImageAsset>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageAsset {
    #[serde(rename = "_ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
