use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skyfare_catalog::{Airline, Airport};

/// One synthetic itinerary entry with carrier, route, schedule, price and
/// capacity fields. Created once by the generator and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flight {
    pub id: String,
    pub airline: Airline,
    pub flight_number: String,
    pub departure_airport: Airport,
    pub arrival_airport: Airport,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    /// Preformatted "{h}h {m}m" label derived from the schedule delta
    pub duration: String,
    pub price: i32,
    pub seats_available: i32,
    pub aircraft: String,
}

impl Flight {
    /// Leading hour count of the duration label. The minute component is
    /// ignored, which keeps duration ordering consistent with the label the
    /// traveller actually sees.
    pub fn duration_hours(&self) -> i64 {
        self.duration
            .split('h')
            .next()
            .and_then(|hours| hours.trim().parse().ok())
            .unwrap_or(0)
    }
}
