//! In-memory report cache.
//!
//! The engine is a pure function of its validated input, so reports can be
//! memoised by input hash. Hit and miss counters back `/health/cache`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;

use crate::soil::AnalysisReport;

/// Cache statistics.
#[derive(Debug, Serialize)]
pub struct CacheStats {
    pub report_entries: u64,
    pub hits: u64,
    pub misses: u64,
}

#[derive(Clone)]
pub struct AppCache {
    reports: Cache<String, Arc<AnalysisReport>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl AppCache {
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        Self {
            reports: Cache::builder()
                .max_capacity(capacity)
                .time_to_live(ttl)
                .build(),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Return the cached report for `input_hash`, computing it on a miss.
    /// Failed computations are not cached.
    pub async fn get_or_compute<F, E>(
        &self,
        input_hash: String,
        compute: F,
    ) -> Result<Arc<AnalysisReport>, E>
    where
        F: FnOnce() -> Result<AnalysisReport, E>,
    {
        if let Some(report) = self.reports.get(&input_hash).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            tracing::debug!("Report cache hit for {}", input_hash);
            return Ok(report);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let report = Arc::new(compute()?);
        self.reports.insert(input_hash, report.clone()).await;
        Ok(report)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            report_entries: self.reports.entry_count(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reference::RequirementTable;
    use crate::soil::models::AnalysisRequest;
    use crate::soil::DosingError;

    fn report() -> AnalysisReport {
        let request = AnalysisRequest {
            nitrogen: Some(80.0),
            phosphorus: Some(30.0),
            potassium: Some(20.0),
            ph: Some(6.8),
            plot_area: Some(1.0),
            crop_id: Some(1),
            state_id: Some(14),
            district: Some("Pune".to_string()),
            ..AnalysisRequest::default()
        };
        crate::soil::analyze(&request, &RequirementTable::builtin()).unwrap()
    }

    #[tokio::test]
    async fn test_second_lookup_is_a_hit() {
        let cache = AppCache::new(10, Duration::from_secs(60));
        let expected = report();
        let key = expected.input_hash.clone();

        let first = cache
            .get_or_compute(key.clone(), || Ok::<_, DosingError>(expected.clone()))
            .await
            .unwrap();
        let second = cache
            .get_or_compute(key, || -> Result<AnalysisReport, DosingError> {
                panic!("report should come from the cache")
            })
            .await
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }

    #[tokio::test]
    async fn test_different_inputs_miss() {
        let cache = AppCache::new(10, Duration::from_secs(60));

        for key in ["a", "b"] {
            cache
                .get_or_compute(key.to_string(), || Ok::<_, DosingError>(report()))
                .await
                .unwrap();
        }

        assert_eq!(cache.stats().misses, 2);
        assert_eq!(cache.stats().hits, 0);
    }

    #[tokio::test]
    async fn test_failed_computation_is_not_cached() {
        let cache = AppCache::new(10, Duration::from_secs(60));

        let err = cache
            .get_or_compute("k".to_string(), || Err(DosingError::TotalCostOverflow))
            .await
            .unwrap_err();
        assert_eq!(err, DosingError::TotalCostOverflow);

        cache
            .get_or_compute("k".to_string(), || Ok::<_, DosingError>(report()))
            .await
            .unwrap();
        assert_eq!(cache.stats().misses, 2);
    }
}
