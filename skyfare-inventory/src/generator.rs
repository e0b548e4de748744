use crate::models::Flight;
use chrono::{DateTime, Duration, NaiveTime, Utc};
use rand::Rng;
use serde::Deserialize;
use skyfare_catalog::{airlines, airports, Airline, Airport, AIRCRAFT};

/// Shape of the synthetic schedule
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratorConfig {
    /// How many flight records to produce
    #[serde(default = "default_flight_count")]
    pub flight_count: usize,

    /// Departures fall 1..=horizon_days days out from the reference time
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,

    #[serde(default = "default_min_duration_hours")]
    pub min_duration_hours: u32,
    #[serde(default = "default_max_duration_hours")]
    pub max_duration_hours: u32,

    /// Fares are drawn from [min_price, max_price)
    #[serde(default = "default_min_price")]
    pub min_price: i32,
    #[serde(default = "default_max_price")]
    pub max_price: i32,

    #[serde(default = "default_max_seats")]
    pub max_seats: i32,

    /// Pin the schedule to a reproducible sequence; absent means a fresh
    /// table on every run
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_flight_count() -> usize {
    20
}
fn default_horizon_days() -> u32 {
    7
}
fn default_min_duration_hours() -> u32 {
    2
}
fn default_max_duration_hours() -> u32 {
    12
}
fn default_min_price() -> i32 {
    200
}
fn default_max_price() -> i32 {
    2000
}
fn default_max_seats() -> i32 {
    50
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            flight_count: default_flight_count(),
            horizon_days: default_horizon_days(),
            min_duration_hours: default_min_duration_hours(),
            max_duration_hours: default_max_duration_hours(),
            min_price: default_min_price(),
            max_price: default_max_price(),
            max_seats: default_max_seats(),
            seed: None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("Need at least two airports to build a route, have {0}")]
    NotEnoughAirports(usize),

    #[error("No airlines in the reference catalog")]
    NoAirlines,
}

/// Produces the in-memory flight table at process start
pub struct FlightGenerator {
    config: GeneratorConfig,
    airports: Vec<Airport>,
    airlines: Vec<Airline>,
}

impl FlightGenerator {
    /// Generator over the bundled reference catalog
    pub fn new(config: GeneratorConfig) -> Self {
        Self::with_catalog(config, airports(), airlines())
    }

    /// Generator over an explicit catalog, for callers that narrow or stub
    /// the reference lists
    pub fn with_catalog(
        config: GeneratorConfig,
        airports: Vec<Airport>,
        airlines: Vec<Airline>,
    ) -> Self {
        Self {
            config,
            airports,
            airlines,
        }
    }

    /// Generate the table against the current wall clock, honoring the
    /// configured seed when one is set
    pub fn generate(&self) -> Result<Vec<Flight>, GeneratorError> {
        match self.config.seed {
            Some(seed) => {
                use rand::SeedableRng;
                self.generate_with(Utc::now(), &mut rand::rngs::StdRng::seed_from_u64(seed))
            }
            None => self.generate_with(Utc::now(), &mut rand::thread_rng()),
        }
    }

    /// Generate `flight_count` records departing after `now`, drawing every
    /// random field from `rng`. Same reference time and seed, same table.
    pub fn generate_with<R: Rng>(
        &self,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Result<Vec<Flight>, GeneratorError> {
        if self.airports.len() < 2 {
            return Err(GeneratorError::NotEnoughAirports(self.airports.len()));
        }
        if self.airlines.is_empty() {
            return Err(GeneratorError::NoAirlines);
        }

        let midnight = now.date_naive().and_time(NaiveTime::MIN).and_utc();
        let mut flights = Vec::with_capacity(self.config.flight_count);

        for i in 0..self.config.flight_count {
            let departure_airport = self.airports[rng.gen_range(0..self.airports.len())].clone();

            // Resample until the route has two distinct endpoints
            let arrival_airport = loop {
                let candidate = &self.airports[rng.gen_range(0..self.airports.len())];
                if candidate.code != departure_airport.code {
                    break candidate.clone();
                }
            };

            let airline = self.airlines[rng.gen_range(0..self.airlines.len())].clone();
            let flight_number = format!("{}{}", airline.code, rng.gen_range(100..1000));

            // Departures land on the half hour, 1..=horizon_days days out
            let day_offset = rng.gen_range(1..=self.config.horizon_days);
            let hour = rng.gen_range(0..24u32);
            let minute = rng.gen_range(0..2u32) * 30;
            let departure_time = midnight
                + Duration::days(i64::from(day_offset))
                + Duration::hours(i64::from(hour))
                + Duration::minutes(i64::from(minute));

            let duration_hours =
                rng.gen_range(self.config.min_duration_hours..=self.config.max_duration_hours);
            let duration_minutes = rng.gen_range(0..2u32) * 30;
            let arrival_time = departure_time
                + Duration::hours(i64::from(duration_hours))
                + Duration::minutes(i64::from(duration_minutes));

            flights.push(Flight {
                id: format!("flight-{}", i + 1),
                airline,
                flight_number,
                departure_airport,
                arrival_airport,
                departure_time,
                arrival_time,
                duration: format!("{}h {}m", duration_hours, duration_minutes),
                price: rng.gen_range(self.config.min_price..self.config.max_price),
                seats_available: rng.gen_range(1..=self.config.max_seats),
                aircraft: AIRCRAFT[rng.gen_range(0..AIRCRAFT.len())].to_string(),
            });
        }

        tracing::info!("generated {} synthetic flights", flights.len());
        Ok(flights)
    }
}

impl Default for FlightGenerator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_generated_table_invariants() {
        use chrono::Timelike;

        let generator = FlightGenerator::default();
        let mut rng = StdRng::seed_from_u64(7);
        let flights = generator.generate_with(reference_time(), &mut rng).unwrap();

        assert_eq!(flights.len(), 20);

        for (i, flight) in flights.iter().enumerate() {
            assert_eq!(flight.id, format!("flight-{}", i + 1));
            assert_ne!(
                flight.departure_airport.code, flight.arrival_airport.code,
                "route endpoints must differ"
            );
            assert!(flight.arrival_time > flight.departure_time);
            assert!((200..2000).contains(&flight.price));
            assert!((1..=50).contains(&flight.seats_available));
            assert!(flight.flight_number.starts_with(&flight.airline.code));
            assert_eq!(flight.flight_number.len(), flight.airline.code.len() + 3);

            // Schedule lands on the half hour with no second component
            for ts in [flight.departure_time, flight.arrival_time] {
                assert!(ts.minute() == 0 || ts.minute() == 30);
                assert_eq!(ts.second(), 0);
            }

            let horizon = flight.departure_time - reference_time();
            assert!(horizon > Duration::zero());
            assert!(horizon <= Duration::days(8));
        }
    }

    #[test]
    fn test_duration_label_matches_schedule() {
        let generator = FlightGenerator::default();
        let mut rng = StdRng::seed_from_u64(11);
        let flights = generator.generate_with(reference_time(), &mut rng).unwrap();

        for flight in flights {
            let delta = flight.arrival_time - flight.departure_time;
            let expected = format!(
                "{}h {}m",
                delta.num_hours(),
                delta.num_minutes() - delta.num_hours() * 60
            );
            assert_eq!(flight.duration, expected);
            assert!((2..=12).contains(&flight.duration_hours()));
        }
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let generator = FlightGenerator::default();
        let first = generator
            .generate_with(reference_time(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        let second = generator
            .generate_with(reference_time(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_catalog_too_small() {
        let one_airport = skyfare_catalog::airports().into_iter().take(1).collect();
        let generator = FlightGenerator::with_catalog(
            GeneratorConfig::default(),
            one_airport,
            skyfare_catalog::airlines(),
        );
        assert!(matches!(
            generator.generate_with(reference_time(), &mut StdRng::seed_from_u64(1)),
            Err(GeneratorError::NotEnoughAirports(1))
        ));

        let generator = FlightGenerator::with_catalog(
            GeneratorConfig::default(),
            skyfare_catalog::airports(),
            Vec::new(),
        );
        assert!(matches!(
            generator.generate_with(reference_time(), &mut StdRng::seed_from_u64(1)),
            Err(GeneratorError::NoAirlines)
        ));
    }

    #[test]
    fn test_flight_count_follows_config() {
        let config = GeneratorConfig {
            flight_count: 5,
            ..GeneratorConfig::default()
        };
        let generator = FlightGenerator::new(config);
        let flights = generator
            .generate_with(reference_time(), &mut StdRng::seed_from_u64(3))
            .unwrap();
        assert_eq!(flights.len(), 5);
    }
}
