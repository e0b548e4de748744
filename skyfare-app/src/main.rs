mod app_config;

use anyhow::Context;
use skyfare_catalog::find_airport;
use skyfare_core::{FilterState, SearchCriteria};
use skyfare_inventory::FlightGenerator;
use skyfare_search::{filter_and_sort, format_date, format_time, price_bounds, search_flights};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "skyfare_app=debug,skyfare_search=debug,skyfare_inventory=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = app_config::Config::load().context("Failed to load config")?;
    tracing::info!(
        "Starting Skyfare with a {}-flight schedule",
        config.generator.flight_count
    );

    // The search form round-trips its criteria through a query string
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let json_output = match args.iter().position(|arg| arg == "--json") {
        Some(pos) => {
            args.remove(pos);
            true
        }
        None => false,
    };
    let query = args.into_iter().next().unwrap_or_default();
    let criteria =
        SearchCriteria::from_query_string(&query).context("Malformed search query string")?;

    let generator = FlightGenerator::new(config.generator);
    let flights = generator.generate()?;

    if config.results.simulated_delay_ms > 0 {
        // Plain timer standing in for a network round trip
        std::thread::sleep(std::time::Duration::from_millis(
            config.results.simulated_delay_ms,
        ));
    }

    let matches = search_flights(&flights, &criteria);
    let filter = FilterState::new(price_bounds(&matches));
    let results = filter_and_sort(&matches, &filter, config.results.sort);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{} to {}", route_label(&criteria.origin), route_label(&criteria.destination));
    if let Some(date) = criteria.departure_date {
        println!(
            "{} | {} passenger(s) | {}",
            date.format("%Y-%m-%d"),
            criteria.passengers,
            criteria.cabin_class
        );
    }
    println!("{} flights found", results.len());

    for flight in &results {
        println!(
            "{:<7} {}  {} {} to {} {}  {:>7}  ${:<5} {:>2} seats  {}",
            flight.flight_number,
            format_date(flight.departure_time),
            flight.departure_airport.code,
            format_time(flight.departure_time),
            flight.arrival_airport.code,
            format_time(flight.arrival_time),
            flight.duration,
            flight.price,
            flight.seats_available,
            flight.aircraft,
        );
    }

    Ok(())
}

fn route_label(code: &str) -> String {
    if code.is_empty() {
        return "Anywhere".to_string();
    }
    find_airport(code).map_or_else(|| code.to_string(), |airport| airport.display_name())
}
