use async_trait::async_trait;
use serde_json::Value;

use crate::content::error::ContentError;

/// Remote side of the content client: runs a query and returns the decoded body.
#[async_trait]
pub trait ContentSource: Send + Sync {
    async fn query(&self, query: &str, params: Option<&Value>) -> Result<Value, ContentError>;
}
