// Travel segments of an itinerary: carrier-operated flights and ground connections

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::class_of_service::ClassOfServiceList;

// Stable position of a segment in its itinerary. Sixteen bits wide so that a
// window of segments packs into a single availability key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(pub u16);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeoTravelType {
    #[default]
    Domestic,
    Transborder,
    International,
}

impl GeoTravelType {
    // Domestic and transborder travel share the short connection limit
    pub fn is_domestic_or_transborder(self) -> bool {
        matches!(self, GeoTravelType::Domestic | GeoTravelType::Transborder)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightSegment {
    pub carrier: String,
    pub flight_number: u32,
    #[serde(default)]
    pub geo_travel_type: GeoTravelType,
    pub departure: DateTime<Utc>,
    pub arrival: DateTime<Utc>,
    // Local availability returned for this flight alone
    #[serde(default)]
    pub class_of_service: ClassOfServiceList,
}

impl FlightSegment {
    // A stopover is a connection longer than the allowed limit
    pub fn is_stopover(&self, previous: &FlightSegment, max_connection: Duration) -> bool {
        self.departure - previous.arrival > max_connection
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SegmentKind {
    Flight(FlightSegment),
    Ground,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelSegment {
    pub id: SegmentId,
    pub origin: String,
    pub destination: String,
    #[serde(default = "default_unflown")]
    pub unflown: bool,
    pub kind: SegmentKind,
}

fn default_unflown() -> bool {
    true
}

impl TravelSegment {
    pub fn flight(id: u16, origin: &str, destination: &str, flight: FlightSegment) -> Self {
        Self {
            id: SegmentId(id),
            origin: origin.to_string(),
            destination: destination.to_string(),
            unflown: true,
            kind: SegmentKind::Flight(flight),
        }
    }

    pub fn ground(id: u16, origin: &str, destination: &str) -> Self {
        Self {
            id: SegmentId(id),
            origin: origin.to_string(),
            destination: destination.to_string(),
            unflown: true,
            kind: SegmentKind::Ground,
        }
    }

    pub fn as_flight(&self) -> Option<&FlightSegment> {
        match &self.kind {
            SegmentKind::Flight(flight) => Some(flight),
            SegmentKind::Ground => None,
        }
    }

    pub fn is_ground(&self) -> bool {
        matches!(self.kind, SegmentKind::Ground)
    }

    pub fn carrier(&self) -> Option<&str> {
        self.as_flight().map(|flight| flight.carrier.as_str())
    }
}
