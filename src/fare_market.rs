// Fare markets: a pricing unit over a contiguous span of travel segments,
// annotated with per-segment availability and availability breaks

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::class_of_service::ClassOfServiceList;
use crate::segment::{SegmentId, TravelSegment};

// Stable handle of a fare market inside its itinerary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FareMarketId(pub usize);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FareMarket {
    pub travel_segments: Vec<Arc<TravelSegment>>,
    // One flag per travel segment; true marks the last segment of an availability window
    pub avail_breaks: Vec<bool>,
    // One entry per travel segment once populated; ground segments hold an empty list
    pub class_of_service: Vec<ClassOfServiceList>,
    pub flow_market: bool,
}

impl FareMarket {
    pub fn new(travel_segments: Vec<Arc<TravelSegment>>, flow_market: bool) -> Self {
        let avail_breaks = vec![false; travel_segments.len()];
        Self {
            travel_segments,
            avail_breaks,
            class_of_service: Vec::new(),
            flow_market,
        }
    }

    pub fn len(&self) -> usize {
        self.travel_segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.travel_segments.is_empty()
    }

    pub fn segment_ids(&self) -> impl Iterator<Item = SegmentId> + '_ {
        self.travel_segments.iter().map(|segment| segment.id)
    }

    // True when this market spans exactly the given segments, in order
    pub fn covers(&self, span: &[Arc<TravelSegment>]) -> bool {
        self.travel_segments.len() == span.len()
            && self
                .travel_segments
                .iter()
                .zip(span)
                .all(|(own, other)| own.id == other.id)
    }

    pub fn position_of(&self, id: SegmentId) -> Option<usize> {
        self.travel_segments.iter().position(|segment| segment.id == id)
    }

    pub fn set_break(&mut self, position: usize) {
        self.set_break_value(position, true);
    }

    pub fn set_break_value(&mut self, position: usize, value: bool) {
        if self.avail_breaks.len() <= position {
            let size = self.travel_segments.len().max(position + 1);
            self.avail_breaks.resize(size, false);
        }
        self.avail_breaks[position] = value;
    }

    pub fn is_break(&self, position: usize) -> bool {
        self.avail_breaks.get(position).copied().unwrap_or(false)
    }

    // A market with any class of service data has been processed already
    pub fn is_populated(&self) -> bool {
        !self.class_of_service.is_empty()
    }

    // Unflown when the first segment is future travel
    pub fn is_unflown(&self) -> bool {
        self.travel_segments
            .first()
            .map_or(false, |segment| segment.unflown)
    }
}
