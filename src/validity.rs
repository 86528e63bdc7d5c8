// Decides whether a fare market's availability may be reused for a span

use std::collections::HashSet;
use std::sync::Arc;

use crate::context::TransactionContext;
use crate::fare_market::FareMarketId;
use crate::segment::TravelSegment;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateVerdict {
    Accepted,
    AlreadyReused,
    Flown,
    NotFetched,
}

pub fn check_candidate(
    ctx: &TransactionContext,
    candidate: FareMarketId,
    span: &[Arc<TravelSegment>],
    reused: &HashSet<FareMarketId>,
) -> CandidateVerdict {
    if reused.contains(&candidate) {
        return CandidateVerdict::AlreadyReused;
    }

    // Flown travel keeps its booked availability, never a cached one
    if !span.first().map_or(false, |segment| segment.unflown) {
        return CandidateVerdict::Flown;
    }

    if !ctx.availability().contains_span(span) {
        return CandidateVerdict::NotFetched;
    }

    CandidateVerdict::Accepted
}

pub fn is_reusable(
    ctx: &TransactionContext,
    candidate: FareMarketId,
    span: &[Arc<TravelSegment>],
    reused: &HashSet<FareMarketId>,
) -> bool {
    check_candidate(ctx, candidate, span, reused) == CandidateVerdict::Accepted
}
