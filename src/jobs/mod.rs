use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU8, AtomicUsize, Ordering};
use std::sync::Arc;

/// State of the scrape batch
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScrapeStatus {
    Idle,
    Running,
    Completed,
}

impl ScrapeStatus {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => ScrapeStatus::Running,
            2 => ScrapeStatus::Completed,
            _ => ScrapeStatus::Idle,
        }
    }

    fn as_u8(self) -> u8 {
        match self {
            ScrapeStatus::Idle => 0,
            ScrapeStatus::Running => 1,
            ScrapeStatus::Completed => 2,
        }
    }
}

/// Point-in-time view returned by a progress query
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub completed: usize,
    pub total: usize,
    /// Percentage, 0 to 100
    pub progress: u8,
    pub status: ScrapeStatus,
}

/// Progress of a scrape batch, shared between the scrape loop and status
/// queries. Clones observe the same counters.
#[derive(Debug, Clone, Default)]
pub struct ScrapeProgress {
    completed: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
    status: Arc<AtomicU8>,
}

impl ScrapeProgress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new batch of `total` units.
    pub fn reset(&self, total: usize) {
        self.completed.store(0, Ordering::SeqCst);
        self.total.store(total, Ordering::SeqCst);
        self.status.store(ScrapeStatus::Running.as_u8(), Ordering::SeqCst);
    }

    /// Record one completed unit, successful or not.
    pub fn advance(&self) {
        let total = self.total.load(Ordering::SeqCst);
        let _ = self
            .completed
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |done| {
                (done < total).then_some(done + 1)
            });
    }

    pub fn finish(&self) {
        self.completed
            .store(self.total.load(Ordering::SeqCst), Ordering::SeqCst);
        self.status.store(ScrapeStatus::Completed.as_u8(), Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ProgressSnapshot {
        let completed = self.completed.load(Ordering::SeqCst);
        let total = self.total.load(Ordering::SeqCst);
        let status = ScrapeStatus::from_u8(self.status.load(Ordering::SeqCst));
        let progress = match (status, total) {
            (ScrapeStatus::Completed, _) => 100,
            (_, 0) => 0,
            _ => (completed * 100 / total) as u8,
        };
        ProgressSnapshot {
            completed,
            total,
            progress,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_progress_is_idle() {
        let snapshot = ScrapeProgress::new().snapshot();
        assert_eq!(snapshot.status, ScrapeStatus::Idle);
        assert_eq!(snapshot.progress, 0);
        assert_eq!(snapshot.total, 0);
    }

    #[test]
    fn test_advance_and_percentage() {
        let progress = ScrapeProgress::new();
        progress.reset(4);
        progress.advance();
        assert_eq!(progress.snapshot().progress, 25);
        progress.advance();
        progress.advance();
        let snapshot = progress.snapshot();
        assert_eq!(snapshot.completed, 3);
        assert_eq!(snapshot.progress, 75);
        assert_eq!(snapshot.status, ScrapeStatus::Running);
    }

    #[test]
    fn test_advance_never_exceeds_total() {
        let progress = ScrapeProgress::new();
        progress.reset(1);
        progress.advance();
        progress.advance();
        assert_eq!(progress.snapshot().completed, 1);
    }

    #[test]
    fn test_reset_starts_over() {
        let progress = ScrapeProgress::new();
        progress.reset(2);
        progress.advance();
        progress.finish();
        assert_eq!(progress.snapshot().progress, 100);

        progress.reset(5);
        let snapshot = progress.snapshot();
        assert_eq!(snapshot.completed, 0);
        assert_eq!(snapshot.total, 5);
        assert_eq!(snapshot.status, ScrapeStatus::Running);
    }

    #[test]
    fn test_clones_share_counters() {
        let progress = ScrapeProgress::new();
        let reader = progress.clone();
        progress.reset(2);
        progress.advance();
        assert_eq!(reader.snapshot().progress, 50);
    }

    #[test]
    fn test_empty_batch_finishes_at_100() {
        let progress = ScrapeProgress::new();
        progress.reset(0);
        assert_eq!(progress.snapshot().progress, 0);
        progress.finish();
        assert_eq!(progress.snapshot().progress, 100);
    }
}
