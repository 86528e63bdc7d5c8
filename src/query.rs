// Seat availability questions against an assembled fare market

use tracing::trace;

use crate::fare_market::FareMarket;

// Position of the first segment with no record offering `seats` seats in
// `booking_code`. Ground segments carry no records and are skipped. A market
// whose class of service is incomplete fails at position 0.
pub fn first_unavailable_segment(market: &FareMarket, booking_code: &str, seats: u16) -> Option<usize> {
    if market.len() > market.class_of_service.len() {
        trace!(
            segments = market.len(),
            entries = market.class_of_service.len(),
            "class of service incomplete"
        );
        return Some(0);
    }

    market
        .travel_segments
        .iter()
        .zip(&market.class_of_service)
        .position(|(segment, records)| {
            !segment.is_ground()
                && !records
                    .iter()
                    .any(|record| record.is_available(booking_code, seats))
        })
}

pub fn is_available(market: &FareMarket, booking_code: &str, seats: u16) -> bool {
    first_unavailable_segment(market, booking_code, seats).is_none()
}
