use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::time::calendar::holidaymap::HolidayMap;
use crate::time::province::Province;

pub trait HolidayCalendar: Send + Sync {
    fn province(&self) -> Province;

    fn get_holiday_map(&self, year: i32) -> Result<Arc<HolidayMap>>;

    fn get_holiday_set(&self, year: i32) -> Result<HashSet<NaiveDate>> {
        Ok(self.get_holiday_map(year)?.iter().map(|(d, _)| *d).collect())
    }

    fn is_holiday(&self, d: NaiveDate) -> Result<bool> {
        Ok(self.get_holiday_map(d.year())?.contains(&d))
    }

    fn holiday_name(&self, d: NaiveDate) -> Result<Option<String>> {
        Ok(self.get_holiday_map(d.year())?.get(&d).map(str::to_owned))
    }
}
