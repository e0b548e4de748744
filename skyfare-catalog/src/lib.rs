pub mod aircraft;
pub mod airline;
pub mod airport;

pub use aircraft::AIRCRAFT;
pub use airline::{airlines, find_airline, Airline};
pub use airport::{airports, find_airport, Airport};
