use std::sync::Arc;

use chrono::NaiveDate;

use crate::error::Result;
use crate::oracle::holidayoracle::HolidayOracle;
use crate::time::calendar::cachedcalendar::CachedCalendar;
use crate::time::calendar::ecuadorcalendar::EcuadorCalendar;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::province::Province;

/// Oracle backed by an in-process holiday calendar.
pub struct LocalOracle {
    calendar: Arc<dyn HolidayCalendar>
}

impl LocalOracle {
    pub fn new(calendar: Arc<dyn HolidayCalendar>) -> LocalOracle {
        LocalOracle { calendar }
    }

    /// Cached Ecuador calendar for `province`.
    pub fn for_province(province: Province) -> LocalOracle {
        LocalOracle::new(Arc::new(CachedCalendar::new(EcuadorCalendar::new(province))))
    }

    pub fn calendar(&self) -> &Arc<dyn HolidayCalendar> {
        &self.calendar
    }
}

impl HolidayOracle for LocalOracle {
    fn is_holiday(&self, d: NaiveDate) -> Result<bool> {
        let holiday = self.calendar.is_holiday(d)?;
        tracing::debug!(date = %d, holiday, province = %self.calendar.province(), "local holiday lookup");
        Ok(holiday)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn answers_from_calendar() {
        let oracle = LocalOracle::for_province(Province::National);
        assert!(oracle.is_holiday(date(2021, 4, 30)).unwrap());
        assert!(!oracle.is_holiday(date(2021, 5, 1)).unwrap());
        assert!(oracle.is_holiday(date(2020, 4, 12)).unwrap());
    }

    #[test]
    fn province_matters() {
        // 2023-12-06 is a Wednesday, observed Friday 2023-12-08
        let quito = LocalOracle::for_province(Province::Pichincha);
        let guayaquil = LocalOracle::for_province(Province::Guayas);
        assert!(quito.is_holiday(date(2023, 12, 8)).unwrap());
        assert!(!guayaquil.is_holiday(date(2023, 12, 8)).unwrap());
        assert_eq!(quito.calendar().province(), Province::Pichincha);
    }
}
