// Shared builders for unit tests

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::class_of_service::{Cabin, ClassOfService};
use crate::config::EngineConfig;
use crate::context::TransactionContext;
use crate::itinerary::FareMarketSpec;
use crate::segment::{FlightSegment, GeoTravelType, SegmentId, TravelSegment};

// Hours after midnight on the travel day
pub(crate) fn at(hour: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 2, 0, 0, 0).unwrap() + Duration::hours(hour)
}

pub(crate) fn default_cos() -> Vec<ClassOfService> {
    vec![
        ClassOfService::new("J", 2, Cabin::Business),
        ClassOfService::new("Y", 9, Cabin::Economy),
        ClassOfService::new("B", 4, Cabin::Economy),
    ]
}

pub(crate) fn flight_with_cos(
    id: u16,
    carrier: &str,
    origin: &str,
    destination: &str,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    class_of_service: Vec<ClassOfService>,
) -> TravelSegment {
    TravelSegment::flight(
        id,
        origin,
        destination,
        FlightSegment {
            carrier: carrier.to_string(),
            flight_number: 100 + u32::from(id),
            geo_travel_type: GeoTravelType::Domestic,
            departure,
            arrival,
            class_of_service,
        },
    )
}

pub(crate) fn flight(
    id: u16,
    carrier: &str,
    origin: &str,
    destination: &str,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
) -> TravelSegment {
    flight_with_cos(id, carrier, origin, destination, departure, arrival, default_cos())
}

pub(crate) fn intl_flight(
    id: u16,
    carrier: &str,
    origin: &str,
    destination: &str,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
) -> TravelSegment {
    let mut segment = flight(id, carrier, origin, destination, departure, arrival);
    if let crate::segment::SegmentKind::Flight(air) = &mut segment.kind {
        air.geo_travel_type = GeoTravelType::International;
    }
    segment
}

pub(crate) fn market_spec(ids: &[u16], flow_market: bool) -> FareMarketSpec {
    FareMarketSpec {
        segments: ids.iter().map(|&id| SegmentId(id)).collect(),
        flow_market,
    }
}

pub(crate) fn context() -> TransactionContext {
    TransactionContext::new(EngineConfig::default()).unwrap()
}
