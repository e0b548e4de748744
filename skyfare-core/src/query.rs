use crate::criteria::{CabinClass, SearchCriteria};
use chrono::{DateTime, NaiveDate};
use std::str::FromStr;

const KEY_ORIGIN: &str = "origin";
const KEY_DESTINATION: &str = "destination";
const KEY_DEPARTURE_DATE: &str = "departureDate";
const KEY_RETURN_DATE: &str = "returnDate";
const KEY_PASSENGERS: &str = "passengers";
const KEY_CLASS: &str = "class";

#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Passenger count out of range (1-9): {0}")]
    PassengerCount(u32),

    #[error("Malformed query pair: {0}")]
    MalformedPair(String),
}

impl SearchCriteria {
    /// Encode into the `origin=JFK&destination=LHR&...` form used to address
    /// the results view. Empty route fields and absent dates are omitted.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if !self.origin.is_empty() {
            pairs.push((KEY_ORIGIN, self.origin.clone()));
        }
        if !self.destination.is_empty() {
            pairs.push((KEY_DESTINATION, self.destination.clone()));
        }
        if let Some(date) = self.departure_date {
            pairs.push((KEY_DEPARTURE_DATE, date.format("%Y-%m-%d").to_string()));
        }
        if let Some(date) = self.return_date {
            pairs.push((KEY_RETURN_DATE, date.format("%Y-%m-%d").to_string()));
        }
        pairs.push((KEY_PASSENGERS, self.passengers.to_string()));
        pairs.push((KEY_CLASS, self.cabin_class.to_string()));

        pairs
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Decode a query string back into criteria. A leading `?` is tolerated
    /// and unknown keys are skipped; missing optional keys take their
    /// defaults (1 passenger, economy).
    pub fn from_query_string(query: &str) -> Result<Self, QueryError> {
        let mut criteria = SearchCriteria::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|p| !p.is_empty()) {
            let (key, raw) = pair
                .split_once('=')
                .ok_or_else(|| QueryError::MalformedPair(pair.to_string()))?;
            let value = urlencoding::decode(raw)
                .map_err(|_| QueryError::InvalidValue {
                    key: key.to_string(),
                    value: raw.to_string(),
                })?
                .into_owned();

            match key {
                KEY_ORIGIN => criteria.origin = value,
                KEY_DESTINATION => criteria.destination = value,
                KEY_DEPARTURE_DATE => criteria.departure_date = Some(parse_date(key, &value)?),
                KEY_RETURN_DATE => criteria.return_date = Some(parse_date(key, &value)?),
                KEY_PASSENGERS => {
                    let count: u32 = value.parse().map_err(|_| QueryError::InvalidValue {
                        key: key.to_string(),
                        value: value.clone(),
                    })?;
                    if !(1..=9).contains(&count) {
                        return Err(QueryError::PassengerCount(count));
                    }
                    criteria.passengers = count;
                }
                KEY_CLASS => {
                    criteria.cabin_class =
                        CabinClass::from_str(&value).map_err(|_| QueryError::InvalidValue {
                            key: key.to_string(),
                            value: value.clone(),
                        })?;
                }
                other => {
                    tracing::debug!("ignoring unknown query key '{}'", other);
                }
            }
        }

        Ok(criteria)
    }
}

/// Accepts a bare ISO date or a full RFC 3339 timestamp, as older links
/// carry `Date.toISOString()` output for the date keys.
fn parse_date(key: &str, value: &str) -> Result<NaiveDate, QueryError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| QueryError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        })
}
