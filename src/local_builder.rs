// Builds availability for a run of segments from each segment's own records

use tracing::debug;

use crate::context::TransactionContext;
use crate::fare_market::FareMarket;
use crate::segment::{SegmentId, SegmentKind};
use crate::stats::AvailabilityStats;

// Every segment of the run becomes its own availability window. Leaves the
// target untouched when `first` is not one of its segments.
pub fn build_using_local(
    ctx: &TransactionContext,
    target: &mut FareMarket,
    first: SegmentId,
    len: usize,
    with_cos: bool,
) {
    let Some(position) = target.position_of(first) else {
        debug!(segment = first.0, "segment not in target market, skipping local build");
        AvailabilityStats::bump(&ctx.stats().local_misses);
        return;
    };

    let end = position.saturating_add(len).min(target.len());
    for index in position..end {
        target.set_break(index);

        if with_cos {
            let list = match &target.travel_segments[index].kind {
                SegmentKind::Flight(flight) => ctx.arena().clone_list(&flight.class_of_service),
                SegmentKind::Ground => ctx.arena().allocate_list(0),
            };
            target.class_of_service.push(list);
        }
    }

    AvailabilityStats::bump(&ctx.stats().local_builds);
    debug!(
        segment = first.0,
        position,
        len = end - position,
        with_cos,
        "built availability from local records"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class_of_service::{Cabin, ClassOfService};
    use crate::config::EngineConfig;
    use crate::fixtures::{at, context, default_cos, flight, flight_with_cos};
    use crate::segment::TravelSegment;
    use std::sync::Arc;

    fn market() -> FareMarket {
        let segments = vec![
            Arc::new(flight(0, "AA", "JFK", "ORD", at(8), at(10))),
            Arc::new(TravelSegment::ground(1, "ORD", "MDW")),
            Arc::new(flight_with_cos(
                2,
                "AA",
                "MDW",
                "LAX",
                at(11),
                at(14),
                vec![ClassOfService::new("Y", 1, Cabin::Economy)],
            )),
        ];
        FareMarket::new(segments, false)
    }

    #[test]
    fn test_one_entry_per_segment_with_empty_ground_entry() {
        let ctx = context();
        let mut target = market();

        build_using_local(&ctx, &mut target, SegmentId(0), 3, true);

        assert_eq!(target.class_of_service.len(), 3);
        assert_eq!(target.class_of_service[0], default_cos());
        assert!(target.class_of_service[1].is_empty());
        assert_eq!(target.class_of_service[2].len(), 1);
        assert_eq!(target.avail_breaks, vec![true, true, true]);
        assert_eq!(ctx.stats_report().local_builds, 1);
    }

    #[test]
    fn test_run_starting_mid_market() {
        let ctx = context();
        let mut target = market();

        build_using_local(&ctx, &mut target, SegmentId(1), 2, true);

        assert_eq!(target.class_of_service.len(), 2);
        assert!(target.class_of_service[0].is_empty());
        assert_eq!(target.avail_breaks, vec![false, true, true]);
    }

    #[test]
    fn test_breaks_only_mode_leaves_cos_untouched() {
        let ctx = context();
        let mut target = market();

        build_using_local(&ctx, &mut target, SegmentId(0), 2, false);

        assert!(target.class_of_service.is_empty());
        assert_eq!(target.avail_breaks, vec![true, true, false]);
    }

    #[test]
    fn test_unknown_first_segment_is_a_no_op() {
        let ctx = context();
        let mut target = market();
        let before = target.clone();

        build_using_local(&ctx, &mut target, SegmentId(42), 2, true);

        assert_eq!(target, before);
        assert_eq!(ctx.stats_report().local_misses, 1);
    }

    #[test]
    fn test_length_past_market_end_is_clamped() {
        let ctx = context();
        let mut target = market();

        build_using_local(&ctx, &mut target, SegmentId(2), 3, true);

        assert_eq!(target.class_of_service.len(), 1);
        assert_eq!(target.avail_breaks, vec![false, false, true]);
    }

    #[test]
    fn test_record_budget_skips_records_not_entries() {
        let config = EngineConfig {
            max_cos_records: Some(2),
            ..Default::default()
        };
        let ctx = TransactionContext::new(config).unwrap();
        let mut target = market();

        build_using_local(&ctx, &mut target, SegmentId(0), 3, true);

        assert_eq!(target.class_of_service.len(), 3);
        assert_eq!(target.class_of_service[0].len(), 2);
        assert!(target.class_of_service[2].is_empty());
        assert_eq!(ctx.arena().records_refused(), 2);
    }
}
