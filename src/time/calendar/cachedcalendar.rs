use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::error::{HolidayError, Result};
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaymap::HolidayMap;
use crate::time::province::Province;

/// Per-year memoizing wrapper around another calendar.
///
/// A year is resolved at most once even when several threads ask for it at
/// the same time: lookups take the read lock, and a miss re-checks and
/// computes while holding the write lock.
pub struct CachedCalendar<C: HolidayCalendar> {
    raw_calendar: C,
    cache: RwLock<HashMap<i32, Arc<HolidayMap>>>
}

impl<C: HolidayCalendar> CachedCalendar<C> {
    pub fn new(raw_calendar: C) -> CachedCalendar<C> {
        CachedCalendar {
            raw_calendar,
            cache: RwLock::new(HashMap::new())
        }
    }

    pub fn raw_calendar(&self) -> &C {
        &self.raw_calendar
    }

    pub fn cached_years(&self) -> Result<Vec<i32>> {
        let cache = self.cache.read().map_err(|_| poisoned())?;
        let mut years: Vec<i32> = cache.keys().copied().collect();
        years.sort_unstable();
        Ok(years)
    }
}

fn poisoned() -> HolidayError {
    HolidayError::Lookup("holiday cache lock poisoned".to_owned())
}

impl<C: HolidayCalendar> HolidayCalendar for CachedCalendar<C> {
    fn province(&self) -> Province {
        self.raw_calendar.province()
    }

    fn get_holiday_map(&self, year: i32) -> Result<Arc<HolidayMap>> {
        if let Some(map) = self.cache.read().map_err(|_| poisoned())?.get(&year) {
            return Ok(Arc::clone(map));
        }

        let mut cache = self.cache.write().map_err(|_| poisoned())?;
        if let Some(map) = cache.get(&year) {
            return Ok(Arc::clone(map));
        }

        let map = self.raw_calendar.get_holiday_map(year)?;
        cache.insert(year, Arc::clone(&map));
        tracing::debug!(year, province = %self.province(), "cached holiday calendar");
        Ok(map)
    }
}
