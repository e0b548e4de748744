use skyfare_core::SearchCriteria;
use skyfare_inventory::Flight;

/// Stage one of the pipeline: narrow the full table by the traveller's
/// criteria. Matching flights come back in their original order; an empty
/// origin/destination or absent date widens rather than fails.
pub fn search_flights(flights: &[Flight], criteria: &SearchCriteria) -> Vec<Flight> {
    let matches: Vec<Flight> = flights
        .iter()
        .filter(|flight| matches_criteria(flight, criteria))
        .cloned()
        .collect();

    tracing::debug!(
        origin = %criteria.origin,
        destination = %criteria.destination,
        "criteria matched {} of {} flights",
        matches.len(),
        flights.len()
    );

    matches
}

fn matches_criteria(flight: &Flight, criteria: &SearchCriteria) -> bool {
    let matches_origin =
        criteria.origin.is_empty() || flight.departure_airport.code == criteria.origin;
    let matches_destination =
        criteria.destination.is_empty() || flight.arrival_airport.code == criteria.destination;
    // Date criteria match on the calendar day, not the exact instant
    let matches_date = criteria
        .departure_date
        .map_or(true, |date| flight.departure_time.date_naive() == date);

    matches_origin && matches_destination && matches_date
}
