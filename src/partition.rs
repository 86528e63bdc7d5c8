// Splits one window of up to three segments into sub-ranges the availability
// feed can answer, and places the breaks between them

use tracing::debug;

use crate::fare_market::FareMarket;
use crate::flight_counter::MAX_WINDOW_SEGMENTS;
use crate::itinerary::Itinerary;
use crate::market_builder::MarketAvailabilityBuilder;
use crate::stats::AvailabilityStats;

// Offsets are relative to the window start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowStep {
    Build { offset: usize, len: usize },
    Ground { offset: usize },
    Break { offset: usize },
}

// How carriers line up across a three-flight window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarrierPattern {
    NoAdjacentShare,
    FirstTwoShare,
    // First two share a carrier but already form a flow market; grouped like LastTwoShare
    FirstTwoFlow,
    LastTwoShare,
}

use WindowStep::{Break, Build, Ground};

const THREE_AS_ONE: &[WindowStep] = &[Build { offset: 0, len: 3 }, Break { offset: 2 }];
const TWO_THEN_ONE: &[WindowStep] = &[
    Build { offset: 0, len: 2 },
    Break { offset: 1 },
    Build { offset: 2, len: 1 },
    Break { offset: 2 },
];
const ONE_THEN_TWO: &[WindowStep] = &[
    Build { offset: 0, len: 1 },
    Break { offset: 0 },
    Build { offset: 1, len: 2 },
    Break { offset: 2 },
];
const GROUND_THEN_TWO: &[WindowStep] = &[
    Ground { offset: 0 },
    Break { offset: 0 },
    Build { offset: 1, len: 2 },
    Break { offset: 2 },
];
const ONE_GROUND_ONE: &[WindowStep] = &[
    Build { offset: 0, len: 1 },
    Break { offset: 0 },
    Ground { offset: 1 },
    Break { offset: 1 },
    Build { offset: 2, len: 1 },
    Break { offset: 2 },
];
const TWO_THEN_GROUND: &[WindowStep] = &[
    Build { offset: 0, len: 2 },
    Break { offset: 1 },
    Ground { offset: 2 },
    Break { offset: 2 },
];
const TWO: &[WindowStep] = &[Build { offset: 0, len: 2 }, Break { offset: 1 }];
const GROUND_THEN_ONE: &[WindowStep] = &[
    Ground { offset: 0 },
    Break { offset: 0 },
    Build { offset: 1, len: 1 },
    Break { offset: 1 },
];
const ONE_THEN_GROUND: &[WindowStep] = &[
    Build { offset: 0, len: 1 },
    Break { offset: 0 },
    Ground { offset: 1 },
    Break { offset: 1 },
];
const ONE: &[WindowStep] = &[Build { offset: 0, len: 1 }, Break { offset: 0 }];
const GROUND: &[WindowStep] = &[Ground { offset: 0 }, Break { offset: 0 }];

// Steps for a window of `flights` segments whose first ground sits at
// `ground` (1-based, 0 when the window is all flights). The carrier pattern
// only matters for three flights without ground. Combinations that cannot
// occur map to no steps.
pub fn window_plan(flights: usize, ground: usize, pattern: CarrierPattern) -> &'static [WindowStep] {
    match (flights, ground, pattern) {
        (3, 0, CarrierPattern::NoAdjacentShare) => THREE_AS_ONE,
        (3, 0, CarrierPattern::FirstTwoShare) => TWO_THEN_ONE,
        (3, 0, CarrierPattern::FirstTwoFlow | CarrierPattern::LastTwoShare) => ONE_THEN_TWO,
        (3, 1, _) => GROUND_THEN_TWO,
        (3, 2, _) => ONE_GROUND_ONE,
        (3, 3, _) => TWO_THEN_GROUND,
        (2, 0, _) => TWO,
        (2, 1, _) => GROUND_THEN_ONE,
        (2, 2, _) => ONE_THEN_GROUND,
        (1, 0, _) => ONE,
        (1, 1, _) => GROUND,
        _ => &[],
    }
}

// 1-based position of the first ground segment in the window, 0 if none
pub fn ground_position(target: &FareMarket, start: usize, covered: usize) -> usize {
    target
        .travel_segments
        .iter()
        .skip(start)
        .take(covered)
        .position(|segment| segment.is_ground())
        .map_or(0, |index| index + 1)
}

pub fn carrier_pattern(itinerary: &Itinerary, target: &FareMarket, start: usize) -> CarrierPattern {
    let window = target
        .travel_segments
        .get(start..start + MAX_WINDOW_SEGMENTS)
        .unwrap_or_default();
    if window.len() < MAX_WINDOW_SEGMENTS {
        return CarrierPattern::NoAdjacentShare;
    }

    let carriers: Vec<Option<&str>> = window.iter().map(|segment| segment.carrier()).collect();
    let shares = |a: usize, b: usize| carriers[a].is_some() && carriers[a] == carriers[b];

    if shares(0, 1) {
        if itinerary.is_flow_market(&window[..2]) {
            return CarrierPattern::FirstTwoFlow;
        }
        return CarrierPattern::FirstTwoShare;
    }
    if shares(1, 2) {
        return CarrierPattern::LastTwoShare;
    }
    CarrierPattern::NoAdjacentShare
}

// Builds availability for the window of `flights_covered` segments starting at `start`
pub fn group_window(
    builder: &mut MarketAvailabilityBuilder<'_>,
    target: &mut FareMarket,
    start: usize,
    flights_covered: usize,
) {
    let covered = flights_covered.min(target.len().saturating_sub(start));
    if covered == 0 {
        return;
    }

    let ground = ground_position(target, start, covered);
    let pattern = if covered == MAX_WINDOW_SEGMENTS && ground == 0 {
        carrier_pattern(builder.itinerary(), target, start)
    } else {
        CarrierPattern::NoAdjacentShare
    };
    let plan = window_plan(covered, ground, pattern);

    AvailabilityStats::bump(&builder.context().stats().windows_partitioned);
    debug!(start, covered, ground, ?pattern, steps = plan.len(), "partitioning window");

    for step in plan {
        match *step {
            Build { offset, len } => builder.build(target, start + offset, len),
            Ground { .. } => builder.record_ground(target),
            Break { offset } => target.set_break(start + offset),
        }
    }
}
