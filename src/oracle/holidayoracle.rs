use chrono::NaiveDate;

use crate::error::Result;

/// Answers "is this date a holiday?".
///
/// A failed lookup is an `Err`, never `Ok(false)`.
pub trait HolidayOracle: Send + Sync {
    fn is_holiday(&self, d: NaiveDate) -> Result<bool>;
}
