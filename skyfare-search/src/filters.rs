use skyfare_core::{FilterState, SortKey};
use skyfare_inventory::Flight;

/// Stages two and three of the pipeline: keep flights inside the price range
/// and airline selection, then apply exactly one of the five total orderings.
/// Every sort is stable, so equal keys keep their original relative order.
pub fn filter_and_sort(flights: &[Flight], filter: &FilterState, sort: SortKey) -> Vec<Flight> {
    let mut results: Vec<Flight> = flights
        .iter()
        .filter(|flight| {
            filter.allows_price(flight.price) && filter.allows_airline(&flight.airline.code)
        })
        .cloned()
        .collect();

    match sort {
        SortKey::PriceAsc => results.sort_by_key(|f| f.price),
        SortKey::PriceDesc => results.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::DurationAsc => results.sort_by_key(|f| f.duration_hours()),
        SortKey::DepartureAsc => results.sort_by_key(|f| f.departure_time),
        SortKey::ArrivalAsc => results.sort_by_key(|f| f.arrival_time),
    }

    tracing::debug!(sort = %sort, "filter kept {} of {} flights", results.len(), flights.len());
    results
}

/// Min and max fare over a candidate set, for seeding the price range
/// control. An empty set clamps to (0, 0) so no unbounded sentinel reaches
/// the slider.
pub fn price_bounds(flights: &[Flight]) -> (i32, i32) {
    flights
        .iter()
        .map(|flight| flight.price)
        .fold(None, |bounds, price| match bounds {
            None => Some((price, price)),
            Some((min, max)) => Some((min.min(price), max.max(price))),
        })
        .unwrap_or((0, 0))
}
