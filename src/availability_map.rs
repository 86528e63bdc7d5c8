// Transaction availability map: availability already fetched from the carrier
// feed, keyed by the span of segments it was requested for

use std::sync::Arc;

use dashmap::DashMap;

use crate::class_of_service::ClassOfServiceList;
use crate::segment::TravelSegment;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AvailabilityKey(pub u64);

impl AvailabilityKey {
    // Packs each segment id into its own 16-bit lane. Feed windows hold at
    // most three flights, so the lanes never overlap.
    pub fn for_span(span: &[Arc<TravelSegment>]) -> Self {
        let key = span.iter().enumerate().fold(0u64, |key, (lane, segment)| {
            let shifted = u64::from(segment.id.0)
                .checked_shl((lane * 16) as u32)
                .unwrap_or(0);
            key.wrapping_add(shifted)
        });
        AvailabilityKey(key)
    }
}

#[derive(Debug, Default)]
pub struct TransactionAvailabilityMap {
    entries: DashMap<AvailabilityKey, Vec<ClassOfServiceList>>,
}

impl TransactionAvailabilityMap {
    pub fn new() -> Self {
        Self::default()
    }

    // Record the feed's answer for a span; one list per segment of the span
    pub fn insert(&self, key: AvailabilityKey, availability: Vec<ClassOfServiceList>) {
        self.entries.insert(key, availability);
    }

    pub fn insert_span(&self, span: &[Arc<TravelSegment>], availability: Vec<ClassOfServiceList>) {
        self.insert(AvailabilityKey::for_span(span), availability);
    }

    pub fn contains(&self, key: AvailabilityKey) -> bool {
        self.entries.contains_key(&key)
    }

    pub fn contains_span(&self, span: &[Arc<TravelSegment>]) -> bool {
        self.contains(AvailabilityKey::for_span(span))
    }

    pub fn get(&self, key: AvailabilityKey) -> Option<Vec<ClassOfServiceList>> {
        self.entries.get(&key).map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_of_service::{Cabin, ClassOfService};
    use crate::fixtures::{at, flight};

    fn span(ids: &[u16]) -> Vec<Arc<TravelSegment>> {
        ids.iter()
            .map(|&id| Arc::new(flight(id, "AA", "AAA", "BBB", at(0), at(1))))
            .collect()
    }

    #[test]
    fn test_key_packs_ids_into_lanes() {
        assert_eq!(AvailabilityKey::for_span(&span(&[])).0, 0);
        assert_eq!(AvailabilityKey::for_span(&span(&[5])).0, 5);
        assert_eq!(
            AvailabilityKey::for_span(&span(&[1, 2, 3])).0,
            1 + (2 << 16) + (3 << 32)
        );
    }

    #[test]
    fn test_key_depends_on_order() {
        assert_ne!(
            AvailabilityKey::for_span(&span(&[1, 2])),
            AvailabilityKey::for_span(&span(&[2, 1]))
        );
    }

    #[test]
    fn test_lookup_by_span() {
        let map = TransactionAvailabilityMap::new();
        let thru = span(&[1, 2]);
        let cos = vec![
            vec![ClassOfService::new("Y", 3, Cabin::Economy)],
            vec![ClassOfService::new("Y", 1, Cabin::Economy)],
        ];

        assert!(map.is_empty());
        map.insert_span(&thru, cos.clone());

        assert_eq!(map.len(), 1);
        assert!(map.contains_span(&thru));
        assert!(!map.contains_span(&thru[..1]));
        assert_eq!(map.get(AvailabilityKey::for_span(&thru)), Some(cos));
    }
}
