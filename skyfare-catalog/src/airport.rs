use serde::{Deserialize, Serialize};

/// One entry of the static airport reference list, immutable after load
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airport {
    /// IATA location identifier, unique across the list
    pub code: String,
    pub name: String,
    pub city: String,
    pub country: String,
}

impl Airport {
    fn new(code: &str, name: &str, city: &str, country: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            country: country.to_string(),
        }
    }

    /// "City (CODE)", as shown by the airport pickers
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.city, self.code)
    }
}

/// The airports sold in the demo inventory
pub fn airports() -> Vec<Airport> {
    vec![
        Airport::new(
            "JFK",
            "John F. Kennedy International Airport",
            "New York",
            "United States",
        ),
        Airport::new(
            "LAX",
            "Los Angeles International Airport",
            "Los Angeles",
            "United States",
        ),
        Airport::new("LHR", "London Heathrow Airport", "London", "United Kingdom"),
        Airport::new("CDG", "Charles de Gaulle Airport", "Paris", "France"),
        Airport::new("FRA", "Frankfurt Airport", "Frankfurt", "Germany"),
        Airport::new(
            "SFO",
            "San Francisco International Airport",
            "San Francisco",
            "United States",
        ),
        Airport::new("SIN", "Singapore Changi Airport", "Singapore", "Singapore"),
        Airport::new(
            "DXB",
            "Dubai International Airport",
            "Dubai",
            "United Arab Emirates",
        ),
        Airport::new("HND", "Tokyo Haneda Airport", "Tokyo", "Japan"),
        Airport::new("SYD", "Sydney Airport", "Sydney", "Australia"),
    ]
}

/// Look an airport up by its IATA code
pub fn find_airport(code: &str) -> Option<Airport> {
    airports().into_iter().find(|airport| airport.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_codes_are_unique() {
        let list = airports();
        let codes: HashSet<_> = list.iter().map(|a| a.code.clone()).collect();
        assert_eq!(codes.len(), list.len());
        assert!(list.len() >= 2, "generation needs a distinct arrival airport");
    }

    #[test]
    fn test_lookup() {
        let jfk = find_airport("JFK").expect("JFK should exist");
        assert_eq!(jfk.city, "New York");
        assert_eq!(jfk.display_name(), "New York (JFK)");
        assert!(find_airport("XXX").is_none());
    }
}
