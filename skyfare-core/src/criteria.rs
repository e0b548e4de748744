use crate::CoreError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cabin class requested by the traveller
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CabinClass {
    #[default]
    Economy,
    Business,
    First,
}

impl CabinClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            CabinClass::Economy => "economy",
            CabinClass::Business => "business",
            CabinClass::First => "first",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CabinClass {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "economy" => Ok(CabinClass::Economy),
            "business" => Ok(CabinClass::Business),
            "first" => Ok(CabinClass::First),
            other => Err(CoreError::ValidationError(format!(
                "unknown cabin class '{}'",
                other
            ))),
        }
    }
}

/// Total ordering applied to a filtered result set
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Price: low to high (the results page default)
    #[default]
    PriceAsc,
    /// Price: high to low
    PriceDesc,
    /// Duration: shortest first
    DurationAsc,
    /// Departure: earliest first
    DepartureAsc,
    /// Arrival: earliest first
    ArrivalAsc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::DurationAsc => "duration-asc",
            SortKey::DepartureAsc => "departure-asc",
            SortKey::ArrivalAsc => "arrival-asc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price-asc" => Ok(SortKey::PriceAsc),
            "price-desc" => Ok(SortKey::PriceDesc),
            "duration-asc" => Ok(SortKey::DurationAsc),
            "departure-asc" => Ok(SortKey::DepartureAsc),
            "arrival-asc" => Ok(SortKey::ArrivalAsc),
            other => Err(CoreError::ValidationError(format!(
                "unknown sort key '{}'",
                other
            ))),
        }
    }
}

/// What the traveller typed into the search form. Passed by value to the
/// pipeline on every invocation; an empty origin/destination or an absent
/// date acts as a wildcard, not an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchCriteria {
    #[serde(default)]
    pub origin: String,
    #[serde(default)]
    pub destination: String,
    #[serde(default)]
    pub departure_date: Option<NaiveDate>,
    #[serde(default)]
    pub return_date: Option<NaiveDate>,
    #[serde(default = "default_passengers")]
    pub passengers: u32,
    #[serde(default)]
    pub cabin_class: CabinClass,
}

fn default_passengers() -> u32 {
    1
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            departure_date: None,
            return_date: None,
            passengers: 1,
            cabin_class: CabinClass::Economy,
        }
    }
}

impl SearchCriteria {
    /// One-way criteria for an origin/destination pair
    pub fn route(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.departure_date = Some(date);
        self
    }
}

/// Secondary narrowing owned by the results view: price bounds and an
/// airline selection. An empty selection means no airline filter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FilterState {
    pub price_range: (i32, i32),
    pub selected_airlines: Vec<String>,
}

impl FilterState {
    pub fn new(price_range: (i32, i32)) -> Self {
        Self {
            price_range,
            selected_airlines: Vec::new(),
        }
    }

    pub fn with_airlines<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_airlines = codes.into_iter().map(Into::into).collect();
        self
    }

    /// Price bounds are inclusive on both ends
    pub fn allows_price(&self, price: i32) -> bool {
        price >= self.price_range.0 && price <= self.price_range.1
    }

    pub fn allows_airline(&self, code: &str) -> bool {
        self.selected_airlines.is_empty() || self.selected_airlines.iter().any(|c| c == code)
    }
}
