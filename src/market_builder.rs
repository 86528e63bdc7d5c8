// Builds availability for one sub-range of a fare market, reusing another
// market's availability when it is still valid

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::context::TransactionContext;
use crate::fare_market::{FareMarket, FareMarketId};
use crate::itinerary::Itinerary;
use crate::local_builder::build_using_local;
use crate::segment::TravelSegment;
use crate::stats::AvailabilityStats;
use crate::validity::{check_candidate, CandidateVerdict};

pub struct MarketAvailabilityBuilder<'a> {
    itinerary: &'a Itinerary,
    ctx: &'a TransactionContext,
    with_cos: bool,
    // Markets whose availability was already copied during this pass
    reused: HashSet<FareMarketId>,
}

impl<'a> MarketAvailabilityBuilder<'a> {
    pub fn new(itinerary: &'a Itinerary, ctx: &'a TransactionContext) -> Self {
        Self {
            itinerary,
            ctx,
            with_cos: ctx.config().request_class_of_service,
            reused: HashSet::new(),
        }
    }

    pub fn with_class_of_service(mut self, with_cos: bool) -> Self {
        self.with_cos = with_cos;
        self
    }

    pub fn itinerary(&self) -> &'a Itinerary {
        self.itinerary
    }

    pub fn context(&self) -> &'a TransactionContext {
        self.ctx
    }

    pub fn requests_class_of_service(&self) -> bool {
        self.with_cos
    }

    pub fn reused_markets(&self) -> &HashSet<FareMarketId> {
        &self.reused
    }

    // Either the whole sub-range comes from one cached market or all of it
    // is built from local records
    pub fn build(&mut self, target: &mut FareMarket, start: usize, len: usize) {
        let end = start.saturating_add(len).min(target.len());
        let span: Vec<Arc<TravelSegment>> = target
            .travel_segments
            .get(start..end)
            .map(<[_]>::to_vec)
            .unwrap_or_default();

        let Some(first) = span.first().map(|segment| segment.id) else {
            debug!(start, len, "empty sub-range, nothing to build");
            return;
        };

        if let Some((candidate_id, candidate)) = self.itinerary.find_market(&span) {
            if self.accepts(candidate_id, candidate, &span) {
                self.copy_from(target, start, candidate);
                self.reused.insert(candidate_id);
                AvailabilityStats::bump(&self.ctx.stats().cache_reuses);
                debug!(
                    candidate = candidate_id.0,
                    start,
                    len = span.len(),
                    "reused cached availability"
                );
                return;
            }
            AvailabilityStats::bump(&self.ctx.stats().rejected_candidates);
        }

        build_using_local(self.ctx, target, first, len, self.with_cos);
    }

    fn accepts(&self, id: FareMarketId, candidate: &FareMarket, span: &[Arc<TravelSegment>]) -> bool {
        let verdict = check_candidate(self.ctx, id, span, &self.reused);
        if verdict != CandidateVerdict::Accepted {
            debug!(candidate = id.0, ?verdict, "cached availability rejected");
            return false;
        }

        // Copied lists must line up one-to-one with the span
        if self.with_cos && candidate.class_of_service.len() != span.len() {
            debug!(
                candidate = id.0,
                entries = candidate.class_of_service.len(),
                segments = span.len(),
                "cached market has no usable class of service"
            );
            return false;
        }

        true
    }

    fn copy_from(&self, target: &mut FareMarket, start: usize, candidate: &FareMarket) {
        for offset in 0..candidate.len() {
            target.set_break_value(start + offset, candidate.is_break(offset));
        }

        if self.with_cos {
            for list in &candidate.class_of_service {
                let copy = self.ctx.arena().clone_list(list);
                target.class_of_service.push(copy);
            }
        }
    }

    // Placeholder for a ground segment: it has no availability of its own
    pub fn record_ground(&self, target: &mut FareMarket) {
        record_ground_segment(self.ctx, target, self.with_cos);
    }
}

// Appends an empty class of service entry so later positions stay aligned.
// The break flag is the caller's concern.
pub fn record_ground_segment(ctx: &TransactionContext, target: &mut FareMarket, with_cos: bool) {
    if with_cos {
        target.class_of_service.push(ctx.arena().allocate_list(0));
    }
    AvailabilityStats::bump(&ctx.stats().ground_placeholders);
}
