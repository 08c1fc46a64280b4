use chrono::{DateTime, Utc};
use log::{debug, info};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

use crate::domain::RawSplitRecord;
use crate::errors::ServiceError;
use crate::fetchers::RecordSource;

struct CachedRecords {
    loaded_at: Instant,
    records: Arc<Vec<RawSplitRecord>>,
}

/// Keeps the last fetched record set for a short while so bursts of page views
/// share one upstream request. Lives outside the transformer.
pub struct RecordCache {
    ttl: Duration,
    entry: RwLock<Option<CachedRecords>>,
    last_fetch: RwLock<Option<DateTime<Utc>>>,
}

impl RecordCache {
    pub fn new(ttl_secs: u64) -> Self {
        Self {
            ttl: Duration::from_secs(ttl_secs),
            entry: RwLock::new(None),
            last_fetch: RwLock::new(None),
        }
    }

    /// Cached records if still fresh, otherwise a new fetch from `source`.
    pub async fn get_or_fetch(
        &self,
        source: &dyn RecordSource,
    ) -> Result<Arc<Vec<RawSplitRecord>>, ServiceError> {
        if let Some(records) = self.fresh().await {
            debug!("Serving {} cached records", records.len());
            return Ok(records);
        }

        let mut entry = self.entry.write().await;
        // Another request may have refilled it while we waited for the lock
        if let Some(cached) = entry.as_ref().filter(|c| self.is_fresh(c)) {
            return Ok(Arc::clone(&cached.records));
        }

        let records = Arc::new(source.fetch_raw_records().await?);
        info!("Fetched {} records from {}", records.len(), source.describe());

        if !self.ttl.is_zero() {
            *entry = Some(CachedRecords {
                loaded_at: Instant::now(),
                records: Arc::clone(&records),
            });
        }
        *self.last_fetch.write().await = Some(Utc::now());

        Ok(records)
    }

    /// Wall-clock time of the last successful upstream fetch.
    pub async fn last_fetch(&self) -> Option<DateTime<Utc>> {
        *self.last_fetch.read().await
    }

    async fn fresh(&self) -> Option<Arc<Vec<RawSplitRecord>>> {
        let entry = self.entry.read().await;
        entry
            .as_ref()
            .filter(|c| self.is_fresh(c))
            .map(|c| Arc::clone(&c.records))
    }

    fn is_fresh(&self, cached: &CachedRecords) -> bool {
        cached.loaded_at.elapsed() < self.ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl RecordSource for CountingSource {
        async fn fetch_raw_records(&self) -> Result<Vec<RawSplitRecord>, ServiceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![RawSplitRecord::default()])
        }

        fn describe(&self) -> String {
            "counting".to_string()
        }
    }

    struct FailingSource;

    #[async_trait]
    impl RecordSource for FailingSource {
        async fn fetch_raw_records(&self) -> Result<Vec<RawSplitRecord>, ServiceError> {
            Err(ServiceError::MissingInput("nothing".to_string()))
        }

        fn describe(&self) -> String {
            "failing".to_string()
        }
    }

    #[tokio::test]
    async fn test_reuses_fresh_records() {
        let cache = RecordCache::new(60);
        let source = CountingSource {
            calls: AtomicUsize::new(0),
        };

        cache.get_or_fetch(&source).await.unwrap();
        cache.get_or_fetch(&source).await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert!(cache.last_fetch().await.is_some());
    }

    #[tokio::test]
    async fn test_zero_ttl_always_fetches() {
        let cache = RecordCache::new(0);
        let source = CountingSource {
            calls: AtomicUsize::new(0),
        };

        cache.get_or_fetch(&source).await.unwrap();
        cache.get_or_fetch(&source).await.unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let cache = RecordCache::new(60);

        let err = cache.get_or_fetch(&FailingSource).await.unwrap_err();

        assert!(err.is_missing_input());
        assert!(cache.last_fetch().await.is_none());
    }
}
