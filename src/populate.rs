// Itinerary-wide availability population: every fare market of an itinerary
// gets its class of service and availability breaks

use std::thread;

use tracing::{debug, info};

use crate::context::TransactionContext;
use crate::fare_market::{FareMarket, FareMarketId};
use crate::flight_counter::count_flights;
use crate::itinerary::Itinerary;
use crate::local_builder::build_using_local;
use crate::market_builder::MarketAvailabilityBuilder;
use crate::partition::group_window;
use crate::stats::AvailabilityStats;

// Markets of up to this many segments are built whole from local records
const LOCAL_MARKET_SEGMENTS: usize = 2;

pub fn populate_fare_markets(itinerary: &mut Itinerary, ctx: &TransactionContext) {
    let with_cos = ctx.config().request_class_of_service;
    let market_count = itinerary.fare_markets().len();

    // Markets already carrying availability, from an earlier stage or this run
    let mut done: Vec<bool> = itinerary
        .fare_markets()
        .iter()
        .map(|market| with_cos && market.is_populated())
        .collect();

    // Duplicates and short markets first
    for index in 0..market_count {
        if done[index] {
            continue;
        }
        let id = FareMarketId(index);
        let mut target = itinerary.take_market(id);

        if copy_duplicate(itinerary, &done, &mut target, with_cos) {
            AvailabilityStats::bump(&ctx.stats().duplicate_copies);
            debug!(market = index, "copied availability from duplicate market");
            done[index] = true;
        } else if (1..=LOCAL_MARKET_SEGMENTS).contains(&target.len()) {
            let first = target.travel_segments[0].id;
            let len = target.len();
            build_using_local(ctx, &mut target, first, len, with_cos);
            done[index] = true;
        }

        itinerary.restore_market(id, target);
    }

    // Longer markets window by window
    for index in 0..market_count {
        if done[index] {
            continue;
        }
        let id = FareMarketId(index);
        let mut target = itinerary.take_market(id);
        populate_windows(itinerary, ctx, &mut target, with_cos);
        itinerary.restore_market(id, target);
        done[index] = true;
    }

    debug!(markets = market_count, "fare markets populated");
}

fn copy_duplicate(itinerary: &Itinerary, done: &[bool], target: &mut FareMarket, with_cos: bool) -> bool {
    let source = itinerary
        .fare_markets()
        .iter()
        .enumerate()
        .find(|(index, market)| {
            done[*index]
                && market.covers(&target.travel_segments)
                && (!with_cos || market.is_populated())
        })
        .map(|(_, market)| market);

    let Some(source) = source else {
        return false;
    };

    target.avail_breaks = source.avail_breaks.clone();
    if with_cos {
        target.class_of_service = source.class_of_service.clone();
    }
    true
}

fn populate_windows(
    itinerary: &Itinerary,
    ctx: &TransactionContext,
    target: &mut FareMarket,
    with_cos: bool,
) {
    let mut start = 0;
    while start < target.len() {
        let covered = count_flights(itinerary, target, start);
        if covered == 0 {
            break;
        }

        // Reuse bookkeeping is per window
        let mut builder = MarketAvailabilityBuilder::new(itinerary, ctx).with_class_of_service(with_cos);
        group_window(&mut builder, target, start, covered);
        start += covered;
    }
}

// Each itinerary is populated on its own worker; the context is shared
pub fn populate_itineraries(itineraries: &mut [Itinerary], ctx: &TransactionContext) {
    thread::scope(|scope| {
        for itinerary in itineraries.iter_mut() {
            scope.spawn(move || populate_fare_markets(itinerary, ctx));
        }
    });

    let report = ctx.stats_report();
    info!(
        itineraries = itineraries.len(),
        windows = report.windows_partitioned,
        cache_reuses = report.cache_reuses,
        local_builds = report.local_builds,
        "itineraries populated"
    );
}
