// Itinerary: the ordered travel segments of a journey and the fare markets built over them

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::ConnectionRules;
use crate::error::ItineraryError;
use crate::fare_market::{FareMarket, FareMarketId};
use crate::segment::{GeoTravelType, SegmentId, TravelSegment};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareMarketSpec {
    pub segments: Vec<SegmentId>,
    #[serde(default)]
    pub flow_market: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDocument {
    pub segments: Vec<TravelSegment>,
    #[serde(default)]
    pub fare_markets: Vec<FareMarketSpec>,
}

#[derive(Debug, Clone)]
pub struct Itinerary {
    segments: Vec<Arc<TravelSegment>>,
    fare_markets: Vec<FareMarket>,
    rules: ConnectionRules,
}

impl Itinerary {
    pub fn new(
        segments: Vec<TravelSegment>,
        markets: Vec<FareMarketSpec>,
        rules: ConnectionRules,
    ) -> Result<Self, ItineraryError> {
        let mut positions: HashMap<SegmentId, usize> = HashMap::with_capacity(segments.len());
        for (position, segment) in segments.iter().enumerate() {
            if positions.insert(segment.id, position).is_some() {
                return Err(ItineraryError::DuplicateSegment(segment.id));
            }
        }

        let segments: Vec<Arc<TravelSegment>> = segments.into_iter().map(Arc::new).collect();

        let mut fare_markets = Vec::with_capacity(markets.len());
        for (index, spec) in markets.into_iter().enumerate() {
            if spec.segments.is_empty() {
                return Err(ItineraryError::EmptyMarket(index));
            }

            let mut span = Vec::with_capacity(spec.segments.len());
            let mut previous: Option<usize> = None;
            for id in spec.segments {
                let position = *positions
                    .get(&id)
                    .ok_or(ItineraryError::UnknownSegment {
                        market: index,
                        segment: id,
                    })?;

                if previous.map_or(false, |prev| prev + 1 != position) {
                    return Err(ItineraryError::NonContiguousMarket(index));
                }
                previous = Some(position);
                span.push(Arc::clone(&segments[position]));
            }

            fare_markets.push(FareMarket::new(span, spec.flow_market));
        }

        Ok(Self {
            segments,
            fare_markets,
            rules,
        })
    }

    pub fn from_document(
        document: ItineraryDocument,
        rules: ConnectionRules,
    ) -> Result<Self, ItineraryError> {
        Self::new(document.segments, document.fare_markets, rules)
    }

    pub fn from_json(json: &str, rules: ConnectionRules) -> Result<Self, ItineraryError> {
        let document: ItineraryDocument = serde_json::from_str(json)
            .map_err(|e| ItineraryError::JsonParseError(e.to_string()))?;
        Self::from_document(document, rules)
    }

    pub fn segments(&self) -> &[Arc<TravelSegment>] {
        &self.segments
    }

    pub fn fare_markets(&self) -> &[FareMarket] {
        &self.fare_markets
    }

    pub fn fare_market(&self, id: FareMarketId) -> Option<&FareMarket> {
        self.fare_markets.get(id.0)
    }

    pub fn fare_market_mut(&mut self, id: FareMarketId) -> Option<&mut FareMarket> {
        self.fare_markets.get_mut(id.0)
    }

    pub fn connection_rules(&self) -> &ConnectionRules {
        &self.rules
    }

    // First fare market whose span is exactly `span`
    pub fn find_market(&self, span: &[Arc<TravelSegment>]) -> Option<(FareMarketId, &FareMarket)> {
        self.fare_markets
            .iter()
            .enumerate()
            .find(|(_, market)| market.covers(span))
            .map(|(index, market)| (FareMarketId(index), market))
    }

    pub fn is_flow_market(&self, span: &[Arc<TravelSegment>]) -> bool {
        self.fare_markets
            .iter()
            .any(|market| market.flow_market && market.covers(span))
    }

    // Whether `next` continues the journey of `current` for availability purposes.
    // `hop` is the number of flights already in the journey before `next`.
    pub fn journey_connection(
        &self,
        next: &TravelSegment,
        current: &TravelSegment,
        hop: usize,
    ) -> bool {
        let (Some(next_flight), Some(current_flight)) = (next.as_flight(), current.as_flight())
        else {
            return false;
        };

        let limit = if next_flight.geo_travel_type.is_domestic_or_transborder()
            && current_flight.geo_travel_type.is_domestic_or_transborder()
        {
            if hop != 0
                && self.rules.has_extended_connection(&next_flight.carrier)
                && self.journey_has_international(next.id, hop)
            {
                self.rules.extended_connection()
            } else {
                self.rules.domestic_connection()
            }
        } else if next_flight.carrier == self.rules.special_carrier {
            self.rules.special_carrier_connection()
        } else {
            self.rules.international_connection()
        };

        !next_flight.is_stopover(current_flight, limit)
    }

    // Looks back over the `hop` flights preceding `next` for international travel
    fn journey_has_international(&self, next: SegmentId, hop: usize) -> bool {
        let Some(position) = self.segments.iter().position(|segment| segment.id == next) else {
            return false;
        };

        self.segments[..position]
            .iter()
            .rev()
            .filter_map(|segment| segment.as_flight())
            .take(hop)
            .any(|flight| flight.geo_travel_type == GeoTravelType::International)
    }

    // The market being built is moved out so it can be mutated while the
    // rest of the itinerary is read as a cache
    pub(crate) fn take_market(&mut self, id: FareMarketId) -> FareMarket {
        std::mem::take(&mut self.fare_markets[id.0])
    }

    pub(crate) fn restore_market(&mut self, id: FareMarketId, market: FareMarket) {
        self.fare_markets[id.0] = market;
    }
}
