pub mod generator;
pub mod models;

pub use generator::{FlightGenerator, GeneratorConfig, GeneratorError};
pub use models::Flight;
