use chrono::{TimeZone, Utc};
use rand::rngs::StdRng;
use rand::SeedableRng;
use skyfare_core::{FilterState, SearchCriteria, SortKey};
use skyfare_inventory::{Flight, FlightGenerator, GeneratorConfig};
use skyfare_search::{filter_and_sort, price_bounds, search_flights};

fn schedule(seed: u64) -> Vec<Flight> {
    let generator = FlightGenerator::new(GeneratorConfig::default());
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    generator
        .generate_with(now, &mut StdRng::seed_from_u64(seed))
        .expect("bundled catalog is large enough")
}

#[test]
fn test_search_to_results_flow() {
    let flights = schedule(99);

    // The results view is addressed through the query string
    let criteria = SearchCriteria::from_query_string("passengers=2&class=business").unwrap();
    let matches = search_flights(&flights, &criteria);
    assert_eq!(
        matches.len(),
        flights.len(),
        "wildcard criteria keep the whole table"
    );

    let bounds = price_bounds(&matches);
    assert!(bounds.0 <= bounds.1);
    assert!(bounds.0 >= 200);

    let results = filter_and_sort(&matches, &FilterState::new(bounds), SortKey::PriceAsc);
    assert_eq!(
        results.len(),
        matches.len(),
        "a bounds-wide price filter drops nothing"
    );
    assert!(results.windows(2).all(|pair| pair[0].price <= pair[1].price));
}

#[test]
fn test_narrowed_search_round_trips_through_query_string() {
    let flights = schedule(7);
    let wanted = &flights[0];

    let criteria = SearchCriteria::route(
        wanted.departure_airport.code.clone(),
        wanted.arrival_airport.code.clone(),
    )
    .on_date(wanted.departure_time.date_naive());

    let reparsed = SearchCriteria::from_query_string(&criteria.to_query_string()).unwrap();
    assert_eq!(reparsed, criteria);

    let matches = search_flights(&flights, &reparsed);
    assert!(matches.iter().any(|f| f.id == wanted.id));
    for flight in &matches {
        assert_eq!(flight.departure_airport.code, wanted.departure_airport.code);
        assert_eq!(flight.arrival_airport.code, wanted.arrival_airport.code);
        assert_eq!(
            flight.departure_time.date_naive(),
            wanted.departure_time.date_naive()
        );
    }
}

#[test]
fn test_airline_filter_narrows_results() {
    let flights = schedule(13);
    let matches = search_flights(&flights, &SearchCriteria::default());

    let carrier = matches[0].airline.code.clone();
    let filter = FilterState::new(price_bounds(&matches)).with_airlines([carrier.clone()]);
    let results = filter_and_sort(&matches, &filter, SortKey::DepartureAsc);

    assert!(!results.is_empty());
    assert!(results.iter().all(|f| f.airline.code == carrier));
    assert!(results
        .windows(2)
        .all(|pair| pair[0].departure_time <= pair[1].departure_time));
}
