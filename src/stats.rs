// Counters for availability construction, shared by every worker of a transaction

use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Debug, Default)]
pub struct AvailabilityStats {
    pub windows_partitioned: AtomicUsize,
    pub cache_reuses: AtomicUsize,
    pub rejected_candidates: AtomicUsize,
    pub local_builds: AtomicUsize,
    pub local_misses: AtomicUsize,
    pub ground_placeholders: AtomicUsize,
    pub duplicate_copies: AtomicUsize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AvailabilityStatsReport {
    pub windows_partitioned: usize,
    pub cache_reuses: usize,
    pub rejected_candidates: usize,
    pub local_builds: usize,
    pub local_misses: usize,
    pub ground_placeholders: usize,
    pub duplicate_copies: usize,
}

impl AvailabilityStats {
    pub(crate) fn bump(counter: &AtomicUsize) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> AvailabilityStatsReport {
        AvailabilityStatsReport {
            windows_partitioned: self.windows_partitioned.load(Ordering::Relaxed),
            cache_reuses: self.cache_reuses.load(Ordering::Relaxed),
            rejected_candidates: self.rejected_candidates.load(Ordering::Relaxed),
            local_builds: self.local_builds.load(Ordering::Relaxed),
            local_misses: self.local_misses.load(Ordering::Relaxed),
            ground_placeholders: self.ground_placeholders.load(Ordering::Relaxed),
            duplicate_copies: self.duplicate_copies.load(Ordering::Relaxed),
        }
    }
}
