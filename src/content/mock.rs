use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::content::{error::ContentError, source::ContentSource};

/// In-process content source with canned responses keyed by query text.
///
/// Queries without a canned response fail, as does every query while the
/// source is switched to failing. Each call is counted, whether it succeeds
/// or not.
#[derive(Default)]
pub struct MockContentSource {
    responses: HashMap<String, Value>,
    failing: AtomicBool,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockContentSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that fails every query.
    pub fn failing() -> Self {
        let source = Self::new();
        source.set_failing(true);
        source
    }

    pub fn with_response(mut self, query: impl Into<String>, body: Value) -> Self {
        self.responses.insert(query.into(), body);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentSource for MockContentSource {
    async fn query(&self, query: &str, _params: Option<&Value>) -> Result<Value, ContentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.load(Ordering::SeqCst) {
            return Err(ContentError::Unavailable("content source offline".to_string()));
        }

        self.responses
            .get(query)
            .cloned()
            .ok_or_else(|| ContentError::Unavailable(format!("no response for query '{query}'")))
    }
}
