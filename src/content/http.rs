use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use crate::content::{config::ContentConfig, error::ContentError, source::ContentSource};

/// Queries the content API over HTTP: `GET <endpoint>?query=..&params=<json>`.
pub struct HttpContentSource {
    client: Client,
    endpoint: Url,
    token: Option<String>,
}

impl HttpContentSource {
    pub fn new(config: &ContentConfig) -> Result<Self, ContentError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ContentError::Client)?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            token: config.token.clone(),
        })
    }
}

#[async_trait]
impl ContentSource for HttpContentSource {
    async fn query(&self, query: &str, params: Option<&Value>) -> Result<Value, ContentError> {
        let mut request = self
            .client
            .get(self.endpoint.clone())
            .query(&[("query", query)]);

        if let Some(params) = params {
            request = request.query(&[("params", params.to_string())]);
        }
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        debug!("querying content api: {}", query);
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status(status));
        }

        let body = response.bytes().await?;
        let value = serde_json::from_slice(&body)?;

        debug!("content api returned {} bytes", body.len());
        Ok(value)
    }
}
