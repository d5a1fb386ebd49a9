use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::HolidayError;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Date on which a beneficiary wants to collect the transfer.
///
/// Only accepts ISO 8601 `YYYY-MM-DD`, zero padded (exactly 10 characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WithdrawalDate(NaiveDate);

impl WithdrawalDate {
    pub fn parse(s: &str) -> Result<WithdrawalDate, HolidayError> {
        if s.chars().count() != 10 {
            return Err(HolidayError::Format(s.to_owned()));
        }
        NaiveDate::parse_from_str(s, ISO_DATE_FORMAT)
            .map(WithdrawalDate)
            .map_err(|_| HolidayError::Format(s.to_owned()))
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for WithdrawalDate {
    fn from(d: NaiveDate) -> Self {
        WithdrawalDate(d)
    }
}

impl FromStr for WithdrawalDate {
    type Err = HolidayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WithdrawalDate::parse(s)
    }
}

impl fmt::Display for WithdrawalDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(ISO_DATE_FORMAT))
    }
}

impl Serialize for WithdrawalDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WithdrawalDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        WithdrawalDate::parse(&s).map_err(serde::de::Error::custom)
    }
}
