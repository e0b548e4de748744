use serde::{Deserialize, Serialize};

/// One entry of the static airline reference list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Airline {
    /// Carrier designator, unique across the list
    pub code: String,
    pub name: String,
    pub logo_url: String,
}

impl Airline {
    fn new(code: &str, name: &str, logo_url: &str) -> Self {
        Self {
            code: code.to_string(),
            name: name.to_string(),
            logo_url: logo_url.to_string(),
        }
    }
}

/// The carriers operating the demo inventory
pub fn airlines() -> Vec<Airline> {
    vec![
        Airline::new(
            "AA",
            "American Airlines",
            "https://logos-world.net/wp-content/uploads/2020/10/American-Airlines-Logo-700x394.png",
        ),
        Airline::new(
            "DL",
            "Delta Air Lines",
            "https://logos-world.net/wp-content/uploads/2021/08/Delta-Logo-700x394.png",
        ),
        Airline::new(
            "UA",
            "United Airlines",
            "https://logos-world.net/wp-content/uploads/2021/08/United-Airlines-Logo-700x394.png",
        ),
        Airline::new(
            "LH",
            "Lufthansa",
            "https://logos-world.net/wp-content/uploads/2021/08/Lufthansa-Logo-700x394.png",
        ),
        Airline::new(
            "BA",
            "British Airways",
            "https://logos-world.net/wp-content/uploads/2021/08/British-Airways-Logo-700x394.png",
        ),
    ]
}

/// Look a carrier up by its code
pub fn find_airline(code: &str) -> Option<Airline> {
    airlines().into_iter().find(|airline| airline.code == code)
}
