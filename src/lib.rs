// Fare market availability: groups flights into availability windows and
// propagates seat-class data and availability breaks into fare markets

pub mod arena;
pub mod availability_map;
pub mod class_of_service;
pub mod config;
pub mod context;
pub mod error;
pub mod fare_market;
pub mod flight_counter;
pub mod itinerary;
pub mod local_builder;
pub mod market_builder;
pub mod partition;
pub mod populate;
pub mod query;
pub mod segment;
pub mod stats;
pub mod validity;

#[cfg(test)]
mod fixtures;

// Re-export key types for convenience
pub use availability_map::{AvailabilityKey, TransactionAvailabilityMap};
pub use class_of_service::{Cabin, ClassOfService, ClassOfServiceList};
pub use config::{ConnectionRules, EngineConfig};
pub use context::TransactionContext;
pub use error::{ConfigError, ItineraryError};
pub use fare_market::{FareMarket, FareMarketId};
pub use flight_counter::count_flights;
pub use itinerary::{FareMarketSpec, Itinerary, ItineraryDocument};
pub use market_builder::MarketAvailabilityBuilder;
pub use partition::{group_window, WindowStep};
pub use populate::{populate_fare_markets, populate_itineraries};
pub use query::{first_unavailable_segment, is_available};
pub use segment::{FlightSegment, GeoTravelType, SegmentId, SegmentKind, TravelSegment};
pub use stats::AvailabilityStatsReport;
