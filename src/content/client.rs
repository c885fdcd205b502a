use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt, Shared};
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::{CacheEntry, CacheKey, CacheStore, Clock, MemoryStore, SystemClock};
use crate::content::{
    config::{CacheConfig, ContentConfig, DEFAULT_CACHE_TTL},
    error::ContentError,
    http::HttpContentSource,
    outcome::{FetchOutcome, Payload},
    source::ContentSource,
};
use crate::fallback::{self, Category};

type Flight = Shared<BoxFuture<'static, FetchOutcome>>;

/// Cache-aside client for the content API.
///
/// A fetch is served from the cache while its entry is younger than the TTL.
/// Otherwise the source is queried once, and concurrent fetches for the same
/// key wait on that single query. Failed queries resolve to fallback data for
/// the category named in the params, and that fallback is cached like a live
/// result, so an outage costs at most one query per key per TTL window.
pub struct ContentClient {
    source: Arc<dyn ContentSource>,
    store: Arc<dyn CacheStore<FetchOutcome>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    default_category: Category,
    in_flight: Arc<Mutex<HashMap<CacheKey, Flight>>>,
}

impl ContentClient {
    pub fn new(source: Arc<dyn ContentSource>, store: Arc<dyn CacheStore<FetchOutcome>>) -> Self {
        Self {
            source,
            store,
            clock: Arc::new(SystemClock),
            ttl: DEFAULT_CACHE_TTL,
            default_category: Category::default(),
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Live client over HTTP with an in-memory cache.
    pub fn from_config(content: &ContentConfig, cache: &CacheConfig) -> Result<Self, ContentError> {
        info!("content api endpoint: {}", content.endpoint);
        let source = HttpContentSource::new(content)?;
        Ok(Self::new(Arc::new(source), memory_store(cache)).with_cache_config(cache))
    }

    pub fn with_cache_config(self, cache: &CacheConfig) -> Self {
        self.with_ttl(cache.ttl)
            .with_default_category(cache.default_category)
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_default_category(mut self, category: Category) -> Self {
        self.default_category = category;
        self
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Payload for `query`, live or fallback. Never fails.
    pub async fn fetch(&self, query: &str, params: Option<&Value>) -> Payload {
        self.fetch_outcome(query, params).await.into_payload()
    }

    pub async fn fetch_outcome(&self, query: &str, params: Option<&Value>) -> FetchOutcome {
        let key = CacheKey::derive(query, params);

        if let Some(outcome) = self.cached(&key).await {
            debug!("cache hit: {}", key);
            return outcome;
        }

        let flight = {
            let mut in_flight = self.in_flight.lock().await;
            let joined = in_flight.get(&key).cloned();

            if let Some(flight) = joined {
                debug!("joining in-flight query: {}", key);
                flight
            } else if let Some(outcome) = self.cached(&key).await {
                // finished between the first lookup and taking the lock
                return outcome;
            } else {
                debug!("cache miss: {}", key);
                let category = self.category_for(params);
                // detached so the query completes and is cached even if every caller goes away
                let task = tokio::spawn(self.resolve(
                    key.clone(),
                    query.to_string(),
                    params.cloned(),
                    category,
                ));

                let flights = Arc::clone(&self.in_flight);
                let flight_key = key.clone();
                let flight = async move {
                    match task.await {
                        Ok(outcome) => outcome,
                        Err(e) => {
                            warn!(
                                "content query task failed ({}), serving {} fallback",
                                e, category
                            );
                            flights.lock().await.remove(&flight_key);
                            fallback_outcome(category, ContentError::Task(e))
                        }
                    }
                }
                .boxed()
                .shared();
                in_flight.insert(key, flight.clone());
                flight
            }
        };

        flight.await
    }

    async fn cached(&self, key: &CacheKey) -> Option<FetchOutcome> {
        let entry = self.store.get(key).await?;
        entry
            .is_fresh(self.clock.now(), self.ttl)
            .then_some(entry.data)
    }

    fn category_for(&self, params: Option<&Value>) -> Category {
        Category::from_params(params).unwrap_or(self.default_category)
    }

    fn resolve(
        &self,
        key: CacheKey,
        query: String,
        params: Option<Value>,
        category: Category,
    ) -> impl Future<Output = FetchOutcome> + Send + 'static {
        let source = Arc::clone(&self.source);
        let store = Arc::clone(&self.store);
        let clock = Arc::clone(&self.clock);
        let in_flight = Arc::clone(&self.in_flight);

        async move {
            let outcome = match source.query(&query, params.as_ref()).await {
                Ok(body) => FetchOutcome::Live(Arc::new(body)),
                Err(e) => {
                    warn!("content query failed ({}), serving {} fallback", e, category);
                    fallback_outcome(category, e)
                }
            };

            store
                .put(key.clone(), CacheEntry::new(outcome.clone(), clock.now()))
                .await;
            in_flight.lock().await.remove(&key);

            outcome
        }
    }
}

fn fallback_outcome(category: Category, reason: ContentError) -> FetchOutcome {
    FetchOutcome::Fallback {
        payload: fallback::articles(category),
        category,
        reason: Arc::new(reason),
    }
}

pub fn memory_store(cache: &CacheConfig) -> Arc<dyn CacheStore<FetchOutcome>> {
    match cache.max_entries {
        Some(max) => Arc::new(MemoryStore::<FetchOutcome>::with_capacity(max)),
        None => Arc::new(MemoryStore::<FetchOutcome>::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::ManualClock;
    use crate::content::mock::MockContentSource;
    use crate::fallback::fallback_for;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const GET_ARTICLES: &str = "getArticles";

    fn client_with(source: Arc<MockContentSource>, clock: &ManualClock) -> ContentClient {
        ContentClient::new(source, Arc::new(MemoryStore::<FetchOutcome>::new()))
            .with_clock(Arc::new(clock.clone()))
    }

    fn live_source() -> Arc<MockContentSource> {
        Arc::new(MockContentSource::new().with_response(GET_ARTICLES, remote_articles()))
    }

    fn remote_articles() -> Value {
        json!([
            {
                "_id": "a1", "title": "Staking",
                "slug": {"current": "staking"}, "category": "academy"
            },
            {
                "_id": "a2", "title": "Gas fees",
                "slug": {"current": "gas-fees"}, "category": "academy"
            }
        ])
    }

    #[tokio::test]
    async fn test_second_fetch_within_ttl_is_served_from_cache() {
        let source = live_source();
        let clock = ManualClock::new();
        let client = client_with(Arc::clone(&source), &clock);
        let params = json!({"category": "academy"});

        let first = client.fetch(GET_ARTICLES, Some(&params)).await;
        clock.advance(Duration::from_secs(299));
        let second = client.fetch(GET_ARTICLES, Some(&params)).await;

        assert_eq!(*first, remote_articles());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_exactly_one_new_query() {
        let source = live_source();
        let clock = ManualClock::new();
        let client = client_with(Arc::clone(&source), &clock);

        client.fetch(GET_ARTICLES, None).await;
        clock.advance(DEFAULT_CACHE_TTL);
        client.fetch(GET_ARTICLES, None).await;
        client.fetch(GET_ARTICLES, None).await;

        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_failure_serves_fallback_for_params_category() {
        let source = Arc::new(MockContentSource::failing());
        let client = client_with(Arc::clone(&source), &ManualClock::new());

        let outcome = client
            .fetch_outcome(GET_ARTICLES, Some(&json!({"category": "news"})))
            .await;

        assert!(outcome.is_fallback());
        assert_eq!(**outcome.payload(), *fallback_for("news"));
        match outcome {
            FetchOutcome::Fallback { category, reason, .. } => {
                assert_eq!(category, Category::News);
                assert!(matches!(*reason, ContentError::Unavailable(_)));
            }
            FetchOutcome::Live(_) => panic!("expected fallback"),
        }
    }

    #[tokio::test]
    async fn test_academy_fallback_when_remote_fails() {
        let client = client_with(Arc::new(MockContentSource::failing()), &ManualClock::new());

        let payload = client
            .fetch(GET_ARTICLES, Some(&json!({"category": "academy"})))
            .await;

        assert_eq!(*payload, *fallback_for("academy"));
    }

    #[tokio::test]
    async fn test_missing_or_unknown_category_uses_default() {
        let client = client_with(Arc::new(MockContentSource::failing()), &ManualClock::new());

        let missing = client.fetch(GET_ARTICLES, None).await;
        let unknown = client
            .fetch(GET_ARTICLES, Some(&json!({"category": "memes"})))
            .await;

        assert_eq!(*missing, *fallback::articles(Category::default()));
        assert_eq!(*unknown, *fallback::articles(Category::default()));
    }

    #[tokio::test]
    async fn test_configured_default_category() {
        let client = client_with(Arc::new(MockContentSource::failing()), &ManualClock::new())
            .with_default_category(Category::Analysis);

        let payload = client.fetch(GET_ARTICLES, None).await;

        assert_eq!(*payload, *fallback::articles(Category::Analysis));
    }

    #[tokio::test]
    async fn test_fallback_is_cached_for_the_ttl() {
        let source = live_source();
        source.set_failing(true);
        let clock = ManualClock::new();
        let client = client_with(Arc::clone(&source), &clock);

        assert!(client.fetch_outcome(GET_ARTICLES, None).await.is_fallback());
        source.set_failing(false);
        clock.advance(Duration::from_secs(60));
        assert!(client.fetch_outcome(GET_ARTICLES, None).await.is_fallback());
        assert_eq!(source.calls(), 1);

        clock.advance(DEFAULT_CACHE_TTL);
        let outcome = client.fetch_outcome(GET_ARTICLES, None).await;
        assert!(!outcome.is_fallback());
        assert_eq!(**outcome.payload(), remote_articles());
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_fetches_share_one_query() {
        let source = slow_source();
        let client = client_with(Arc::clone(&source), &ManualClock::new());

        let (first, second, third) = tokio::join!(
            client.fetch(GET_ARTICLES, None),
            client.fetch(GET_ARTICLES, None),
            client.fetch(GET_ARTICLES, None),
        );

        assert_eq!(source.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert!(Arc::ptr_eq(&second, &third));
        assert!(client.in_flight.lock().await.is_empty());
    }

    fn slow_source() -> Arc<MockContentSource> {
        Arc::new(
            MockContentSource::new()
                .with_response(GET_ARTICLES, remote_articles())
                .with_delay(Duration::from_millis(50)),
        )
    }

    #[tokio::test]
    async fn test_abandoned_fetch_still_completes_and_caches() {
        let source = slow_source();
        let store = Arc::new(MemoryStore::<FetchOutcome>::new());
        let client = ContentClient::new(source.clone(), store.clone());

        let abandoned =
            tokio::time::timeout(Duration::from_millis(10), client.fetch(GET_ARTICLES, None)).await;
        assert!(abandoned.is_err());

        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(source.calls(), 1);
        assert_eq!(store.len().await, 1);
        assert!(client.in_flight.lock().await.is_empty());

        let payload = client.fetch(GET_ARTICLES, None).await;
        assert_eq!(*payload, remote_articles());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_waiter_gets_result_after_first_caller_gives_up() {
        let source = slow_source();
        let client = client_with(Arc::clone(&source), &ManualClock::new());

        let abandoned =
            tokio::time::timeout(Duration::from_millis(10), client.fetch(GET_ARTICLES, None)).await;
        assert!(abandoned.is_err());

        let outcome = client.fetch_outcome(GET_ARTICLES, None).await;

        assert!(!outcome.is_fallback());
        assert_eq!(**outcome.payload(), remote_articles());
        assert_eq!(source.calls(), 1);
        assert!(client.in_flight.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_distinct_params_are_fetched_separately() {
        let source = live_source();
        let client = client_with(Arc::clone(&source), &ManualClock::new());

        client
            .fetch(GET_ARTICLES, Some(&json!({"category": "academy"})))
            .await;
        client
            .fetch(GET_ARTICLES, Some(&json!({"category": "news"})))
            .await;

        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_ttl_is_configurable() {
        let source = live_source();
        let clock = ManualClock::new();
        let client = client_with(Arc::clone(&source), &clock).with_ttl(Duration::from_secs(10));

        client.fetch(GET_ARTICLES, None).await;
        clock.advance(Duration::from_secs(10));
        client.fetch(GET_ARTICLES, None).await;

        assert_eq!(client.ttl(), Duration::from_secs(10));
        assert_eq!(source.calls(), 2);
    }
}
