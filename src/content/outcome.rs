use std::sync::Arc;

use serde_json::Value;

use crate::{content::error::ContentError, fallback::Category};

/// Shared query result. Cache hits hand out clones of the same allocation.
pub type Payload = Arc<Value>;

/// What a fetch resolved to, before flattening to a payload.
#[derive(Debug, Clone)]
pub enum FetchOutcome {
    Live(Payload),
    Fallback {
        payload: Payload,
        category: Category,
        reason: Arc<ContentError>,
    },
}

impl FetchOutcome {
    pub fn payload(&self) -> &Payload {
        match self {
            FetchOutcome::Live(payload) => payload,
            FetchOutcome::Fallback { payload, .. } => payload,
        }
    }

    pub fn into_payload(self) -> Payload {
        match self {
            FetchOutcome::Live(payload) => payload,
            FetchOutcome::Fallback { payload, .. } => payload,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, FetchOutcome::Fallback { .. })
    }
}
