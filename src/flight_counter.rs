// Counts how many segments of a fare market can share one availability window

use tracing::trace;

use crate::fare_market::FareMarket;
use crate::itinerary::Itinerary;
use crate::segment::TravelSegment;

// Carrier availability feeds answer for at most three segments at once
pub const MAX_WINDOW_SEGMENTS: usize = 3;

// Number of segments (0..=3) groupable from `start`. Ground segments always
// join the window; a flight joins only when it continues the journey of the
// previous flight on the same carrier.
pub fn count_flights(itinerary: &Itinerary, market: &FareMarket, start: usize) -> usize {
    let segments = &market.travel_segments;
    let Some(first) = segments.get(start) else {
        return 0;
    };

    let mut count = 1;
    let mut current: Option<&TravelSegment> = first.as_flight().map(|_| first.as_ref());
    let mut flights = usize::from(current.is_some());

    for segment in &segments[start + 1..] {
        if count == MAX_WINDOW_SEGMENTS {
            break;
        }

        if segment.is_ground() {
            count += 1;
            continue;
        }

        if let Some(previous) = current {
            if segment.carrier() != previous.carrier() {
                trace!(segment = segment.id.0, "carrier change closes window");
                break;
            }
            if !itinerary.journey_connection(segment, previous, flights) {
                trace!(segment = segment.id.0, "no journey connection closes window");
                break;
            }
        }

        count += 1;
        flights += 1;
        current = Some(segment.as_ref());
    }

    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConnectionRules;
    use crate::fixtures::{at, flight, market_spec};
    use crate::itinerary::Itinerary;

    fn itinerary(segments: Vec<TravelSegment>) -> Itinerary {
        let ids: Vec<u16> = segments.iter().map(|segment| segment.id.0).collect();
        Itinerary::new(
            segments,
            vec![market_spec(&ids, false)],
            ConnectionRules::default(),
        )
        .unwrap()
    }

    fn count(itin: &Itinerary, start: usize) -> usize {
        count_flights(itin, &itin.fare_markets()[0], start)
    }

    // Hourly connected flights on the given carriers
    fn connected(carriers: &[&str]) -> Vec<TravelSegment> {
        carriers
            .iter()
            .enumerate()
            .map(|(i, carrier)| {
                let hour = 2 * i as i64;
                flight(i as u16, carrier, "AAA", "BBB", at(hour), at(hour + 1))
            })
            .collect()
    }

    #[test]
    fn test_same_carrier_run_is_capped_at_three() {
        for len in 1..=5 {
            let itin = itinerary(connected(&vec!["AA"; len]));
            for start in 0..len {
                assert_eq!(count(&itin, start), (len - start).min(3));
            }
        }
    }

    #[test]
    fn test_out_of_range_start_counts_nothing() {
        let itin = itinerary(connected(&["AA", "AA"]));
        assert_eq!(count(&itin, 2), 0);
        assert_eq!(count(&itin, 10), 0);
    }

    #[test]
    fn test_carrier_change_stops_count() {
        let itin = itinerary(connected(&["CO", "CO", "AA", "AA"]));
        assert_eq!(count(&itin, 0), 2);
        assert_eq!(count(&itin, 2), 2);

        let itin = itinerary(connected(&["CO", "CO", "CO", "AA"]));
        assert_eq!(count(&itin, 0), 3);
        assert_eq!(count(&itin, 3), 1);
    }

    #[test]
    fn test_stopover_stops_count() {
        let segments = vec![
            flight(0, "AA", "JFK", "ORD", at(0), at(2)),
            flight(1, "AA", "ORD", "DFW", at(3), at(5)),
            flight(2, "AA", "DFW", "PHX", at(15), at(17)),
            flight(3, "AA", "PHX", "LAX", at(18), at(19)),
        ];
        let itin = itinerary(segments);
        assert_eq!(count(&itin, 0), 2);
        assert_eq!(count(&itin, 2), 2);
    }

    #[test]
    fn test_ground_segments_join_the_window() {
        let segments = vec![
            flight(0, "AA", "JFK", "ORD", at(0), at(2)),
            TravelSegment::ground(1, "ORD", "MDW"),
            flight(2, "AA", "MDW", "DFW", at(3), at(5)),
            flight(3, "AA", "DFW", "LAX", at(6), at(8)),
        ];
        let itin = itinerary(segments);
        assert_eq!(count(&itin, 0), 3);
        assert_eq!(count(&itin, 1), 3);
    }

    #[test]
    fn test_consecutive_grounds_fill_the_window() {
        let segments = vec![
            flight(0, "AA", "JFK", "ORD", at(0), at(2)),
            TravelSegment::ground(1, "ORD", "MDW"),
            TravelSegment::ground(2, "MDW", "ORD"),
            flight(3, "AA", "ORD", "LAX", at(3), at(5)),
        ];
        let itin = itinerary(segments);
        assert_eq!(count(&itin, 0), 3);
    }

    #[test]
    fn test_ground_does_not_hide_carrier_change() {
        let segments = vec![
            flight(0, "AA", "JFK", "ORD", at(0), at(2)),
            TravelSegment::ground(1, "ORD", "MDW"),
            flight(2, "UA", "MDW", "DEN", at(3), at(5)),
        ];
        let itin = itinerary(segments);
        assert_eq!(count(&itin, 0), 2);
    }
}
