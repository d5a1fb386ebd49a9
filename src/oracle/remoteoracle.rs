use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use reqwest::blocking::Client;

use crate::error::{HolidayError, Result};
use crate::oracle::holidayoracle::HolidayOracle;

pub const DEFAULT_ENDPOINT: &str = "https://holidays.abstractapi.com/v1/";
pub const DEFAULT_COUNTRY: &str = "EC";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Oracle delegating to an online holiday API (Abstract API wire format).
///
/// `GET {endpoint}?api_key=..&country=..&year=..&month=..&day=..` answers a
/// JSON array: empty means "not a holiday", anything else means "holiday".
pub struct RemoteOracle {
    client: Client,
    endpoint: String,
    api_key: String,
    country: String
}

fn lookup_error(error: reqwest::Error) -> HolidayError {
    HolidayError::Lookup(error.to_string())
}

impl RemoteOracle {
    pub fn new(endpoint: &str, api_key: &str, country: &str, timeout: Duration) -> Result<RemoteOracle> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(lookup_error)?;

        Ok(RemoteOracle {
            client,
            endpoint: endpoint.to_owned(),
            api_key: api_key.to_owned(),
            country: country.to_owned()
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl HolidayOracle for RemoteOracle {
    fn is_holiday(&self, d: NaiveDate) -> Result<bool> {
        let year = d.year().to_string();
        let month = d.month().to_string();
        let day = d.day().to_string();

        let response = self.client
            .get(&self.endpoint)
            .query(&[
                ("api_key", self.api_key.as_str()),
                ("country", self.country.as_str()),
                ("year", year.as_str()),
                ("month", month.as_str()),
                ("day", day.as_str()),
            ])
            .send()
            .map_err(lookup_error)?;

        let status = response.status();
        tracing::debug!(date = %d, endpoint = %self.endpoint, %status, "remote holiday lookup");
        if !status.is_success() {
            return Err(HolidayError::Lookup(format!("{} answered HTTP {}", self.endpoint, status)));
        }

        let body: serde_json::Value = response.json().map_err(lookup_error)?;
        match body {
            serde_json::Value::Array(holidays) => Ok(!holidays.is_empty()),
            other => Err(HolidayError::Lookup(format!("expected a JSON array, got {}", other)))
        }
    }
}
