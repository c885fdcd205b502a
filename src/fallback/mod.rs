//! Canned article data served when the content API cannot be reached.
//!
//! Tables are keyed by a small closed set of categories. Lookups never fail:
//! anything unrecognized resolves to the default category.

mod data;

use std::str::FromStr;
use std::sync::Arc;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::content::Payload;

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    #[display("academy")]
    Academy,
    #[display("news")]
    News,
    #[display("analysis")]
    Analysis,
}

#[derive(Debug, Error)]
#[error("Unknown article category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "academy" => Ok(Category::Academy),
            "news" => Ok(Category::News),
            "analysis" => Ok(Category::Analysis),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Academy, Category::News, Category::Analysis];

    /// Parses `s`, falling back to the default category.
    pub fn classify(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Recognized `category` field of a query's params, if any.
    pub fn from_params(params: Option<&Value>) -> Option<Self> {
        params?.get("category")?.as_str()?.parse().ok()
    }
}

/// Fallback payload for a category name. Total over all inputs.
pub fn fallback_for(category: &str) -> Payload {
    articles(Category::classify(category))
}

pub fn articles(category: Category) -> Payload {
    let table = match category {
        Category::Academy => data::academy(),
        Category::News => data::news(),
        Category::Analysis => data::analysis(),
    };
    Arc::new(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_category_parsing() {
        assert_eq!("academy".parse::<Category>().unwrap(), Category::Academy);
        assert_eq!(" News ".parse::<Category>().unwrap(), Category::News);
        assert_eq!("ANALYSIS".parse::<Category>().unwrap(), Category::Analysis);
        assert!("memes".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_round_trips_through_display() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_category_from_params() {
        assert_eq!(
            Category::from_params(Some(&json!({"category": "news"}))),
            Some(Category::News)
        );
        assert_eq!(Category::from_params(Some(&json!({"category": "memes"}))), None);
        assert_eq!(Category::from_params(Some(&json!({"category": 3}))), None);
        assert_eq!(Category::from_params(Some(&json!({"slug": "x"}))), None);
        assert_eq!(Category::from_params(None), None);
    }

    #[test]
    fn test_fallback_is_total() {
        for input in ["academy", "news", "analysis", "", "memes", "ACADEMY", "🚀"] {
            let payload = fallback_for(input);
            let list = payload.as_array().expect("fallback tables are arrays");
            assert!(!list.is_empty(), "empty fallback for {input:?}");
        }
    }

    #[test]
    fn test_unknown_category_uses_default_table() {
        assert_eq!(*fallback_for("memes"), *articles(Category::default()));
        assert_eq!(*fallback_for(""), *articles(Category::Academy));
    }

    #[test]
    fn test_tables_only_contain_their_category() {
        for category in Category::ALL {
            let payload = articles(category);
            for article in payload.as_array().unwrap() {
                assert_eq!(article["category"], json!(category.to_string()));
                assert!(article["slug"]["current"].is_string());
                assert!(article["_id"].is_string());
            }
        }
    }

    #[test]
    fn test_tables_differ_between_categories() {
        assert_ne!(*articles(Category::Academy), *articles(Category::News));
        assert_ne!(*articles(Category::News), *articles(Category::Analysis));
    }
}
