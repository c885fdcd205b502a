use derive_more::Display;
use serde_json::Value;

/// Cache key for a content query: the query text followed by its serialized params.
///
/// Absent params serialize as `{}`. Parameter sets that serialize identically map
/// to the same key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub struct CacheKey(String);

impl CacheKey {
    pub fn derive(query: &str, params: Option<&Value>) -> Self {
        let params = match params {
            Some(params) => params.to_string(),
            None => "{}".to_string(),
        };

        let mut key = String::with_capacity(query.len() + params.len());
        key.push_str(query);
        key.push_str(&params);
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
