mod insights;
mod types;

pub use insights::{applications_by_month, status_breakdown, top_companies, CountEntry};
pub use types::ApplicationStats;

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::Mutex;

use crate::models::{ApplicationRecord, ApplicationStatus};

/// How long a computed result keeps being served without recomputation.
pub const STATS_FRESHNESS_WINDOW: Duration = Duration::from_millis(5 * 60 * 1000);

pub struct StatsAggregator {
    inner: Arc<Mutex<StatsCache>>,
}

struct StatsCache {
    stats: Option<ApplicationStats>,
    computed_at: Option<Instant>,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(StatsCache {
                stats: None,
                computed_at: None,
            })),
        }
    }

    /// Per-status counts over `records`.
    ///
    /// A result computed less than [`STATS_FRESHNESS_WINDOW`] ago is returned
    /// unconditionally, even when `records` differs from the sequence the
    /// retained result was computed from. The cache is keyed by time alone;
    /// callers that change the underlying sequence must [`clear`](Self::clear)
    /// first or they will be served stale counts for up to the window.
    pub async fn compute_stats(&self, records: &[ApplicationRecord]) -> ApplicationStats {
        self.compute_stats_at(records, Instant::now()).await
    }

    async fn compute_stats_at(
        &self,
        records: &[ApplicationRecord],
        now: Instant,
    ) -> ApplicationStats {
        let mut cache = self.inner.lock().await;

        if let (Some(stats), Some(computed_at)) = (&cache.stats, cache.computed_at) {
            if now.duration_since(computed_at) < STATS_FRESHNESS_WINDOW {
                return stats.clone();
            }
        }

        let stats = count_statuses(records);
        cache.stats = Some(stats.clone());
        cache.computed_at = Some(now);
        stats
    }

    /// Drops the retained result so the next call recomputes.
    pub async fn clear(&self) {
        let mut cache = self.inner.lock().await;
        cache.stats = None;
        cache.computed_at = None;
    }
}

impl Default for StatsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for StatsAggregator {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// One pass over the sequence. Unrecognized statuses land in no bucket.
fn count_statuses(records: &[ApplicationRecord]) -> ApplicationStats {
    let mut stats = ApplicationStats {
        total: records.len(),
        ..ApplicationStats::default()
    };

    for record in records {
        match ApplicationStatus::from_label(&record.status) {
            Some(ApplicationStatus::Applied) => stats.applied += 1,
            Some(ApplicationStatus::Interview) => stats.interviews += 1,
            Some(ApplicationStatus::Offer) => stats.offers += 1,
            Some(ApplicationStatus::Rejected) => stats.rejections += 1,
            Some(ApplicationStatus::OnHold) => stats.on_hold += 1,
            None => {}
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mock_applications;

    fn custom_status_record(id: i64, status: &str) -> ApplicationRecord {
        let mut record = mock_applications().remove(0);
        record.id = id;
        record.status = status.to_string();
        record
    }

    #[tokio::test]
    async fn empty_sequence_yields_all_zero_counts() {
        let aggregator = StatsAggregator::new();
        let stats = aggregator.compute_stats(&[]).await;
        assert_eq!(stats, ApplicationStats::default());
    }

    #[tokio::test]
    async fn default_dataset_counts() {
        let aggregator = StatsAggregator::new();
        let stats = aggregator.compute_stats(&mock_applications()).await;

        assert_eq!(stats.total, 12);
        assert_eq!(stats.applied, 5);
        assert_eq!(stats.interviews, 3);
        assert_eq!(stats.offers, 1);
        assert_eq!(stats.rejections, 2);
        assert_eq!(stats.on_hold, 1);
        assert_eq!(stats.bucketed(), stats.total);
    }

    #[tokio::test]
    async fn total_counts_every_record_buckets_only_recognized() {
        let mut records = mock_applications();
        records.push(custom_status_record(100, "Ghosted"));
        records.push(custom_status_record(101, "Ghosted"));

        let aggregator = StatsAggregator::new();
        let stats = aggregator.compute_stats(&records).await;

        assert_eq!(stats.total, records.len());
        assert_eq!(stats.bucketed(), stats.total - 2);
    }

    // The freshness window is a contract, not a bug: a second call inside the
    // window returns the retained result even for a different input sequence.
    #[tokio::test]
    async fn second_call_within_window_ignores_new_input() {
        let aggregator = StatsAggregator::new();
        let first = aggregator.compute_stats(&mock_applications()).await;
        let second = aggregator.compute_stats(&[]).await;

        assert_eq!(second, first);
        assert_eq!(second.total, 12);
    }

    #[tokio::test]
    async fn stale_result_is_recomputed_after_the_window() {
        let aggregator = StatsAggregator::new();
        let start = Instant::now();

        let first = aggregator
            .compute_stats_at(&mock_applications(), start)
            .await;
        assert_eq!(first.total, 12);

        let later = start + STATS_FRESHNESS_WINDOW;
        let second = aggregator.compute_stats_at(&[], later).await;
        assert_eq!(second.total, 0);
    }

    #[tokio::test]
    async fn clear_forces_recomputation() {
        let aggregator = StatsAggregator::new();
        let first = aggregator.compute_stats(&mock_applications()).await;
        assert_eq!(first.total, 12);

        aggregator.clear().await;

        let second = aggregator.compute_stats(&[]).await;
        assert_eq!(second.total, 0);
    }
}
