use thiserror::Error;

use crate::segment::SegmentId;

// Errors raised while assembling an itinerary from caller input
#[derive(Error, Debug)]
pub enum ItineraryError {
    #[error("Duplicate segment id: {0:?}")]
    DuplicateSegment(SegmentId),

    #[error("Fare market {market} references unknown segment {segment:?}")]
    UnknownSegment { market: usize, segment: SegmentId },

    #[error("Fare market {0} has no travel segments")]
    EmptyMarket(usize),

    #[error("Fare market {0} is not a contiguous run of the itinerary")]
    NonContiguousMarket(usize),

    #[error("JSON parse error: {0}")]
    JsonParseError(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid configuration value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}
