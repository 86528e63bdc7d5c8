// Per-transaction allocation budget for cloned class of service records.
// Storage lives as long as the fare markets of the transaction.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::class_of_service::{ClassOfService, ClassOfServiceList};

#[derive(Debug, Default)]
pub struct TransactionArena {
    record_limit: Option<usize>,
    records_allocated: AtomicUsize,
    records_refused: AtomicUsize,
    lists_allocated: AtomicUsize,
}

impl TransactionArena {
    pub fn new(record_limit: Option<usize>) -> Self {
        Self {
            record_limit,
            ..Default::default()
        }
    }

    // Clone a record into transaction storage, or None once the budget is spent
    pub fn allocate_record(&self, source: &ClassOfService) -> Option<ClassOfService> {
        let reserved = match self.record_limit {
            None => {
                self.records_allocated.fetch_add(1, Ordering::Relaxed);
                true
            }
            Some(limit) => self
                .records_allocated
                .fetch_update(Ordering::AcqRel, Ordering::Acquire, |count| {
                    (count < limit).then_some(count + 1)
                })
                .is_ok(),
        };

        if reserved {
            Some(source.clone())
        } else {
            self.records_refused.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    // Per-segment entries are never refused so positions stay aligned
    pub fn allocate_list(&self, capacity: usize) -> ClassOfServiceList {
        self.lists_allocated.fetch_add(1, Ordering::Relaxed);
        Vec::with_capacity(capacity)
    }

    // Clone every record the budget allows; refused records are skipped
    pub fn clone_list(&self, source: &[ClassOfService]) -> ClassOfServiceList {
        let mut list = self.allocate_list(source.len());
        list.extend(source.iter().filter_map(|cos| self.allocate_record(cos)));
        list
    }

    pub fn records_allocated(&self) -> usize {
        self.records_allocated.load(Ordering::Relaxed)
    }

    pub fn records_refused(&self) -> usize {
        self.records_refused.load(Ordering::Relaxed)
    }

    pub fn lists_allocated(&self) -> usize {
        self.lists_allocated.load(Ordering::Relaxed)
    }
}
