use chrono::{Days, NaiveDate};

use crate::time::province::Province;
use super::recurringholiday::RecurringHoliday;

/// Western (Gregorian) Easter Sunday, by the anonymous Gregorian algorithm
/// (Meeus/Jones/Butcher). Valid for every year of the proleptic calendar.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

#[derive(Clone)]
pub struct EasterRelatedHoliday {
    label: String,
    shift_days: i64
}

impl EasterRelatedHoliday {
    pub fn new(label: &str, shift_days: i64) -> EasterRelatedHoliday {
        EasterRelatedHoliday {
            label: label.to_owned(),
            shift_days
        }
    }

    pub fn shift_days(&self) -> i64 {
        self.shift_days
    }
}

impl RecurringHoliday for EasterRelatedHoliday {
    fn label(&self) -> &str {
        &self.label
    }

    fn get_holiday(&self, year: i32, _province: Province) -> Option<NaiveDate> {
        let easter_day = easter_sunday(year)?;
        if self.shift_days >= 0 {
            easter_day.checked_add_days(Days::new(self.shift_days as u64))
        } else {
            easter_day.checked_sub_days(Days::new(self.shift_days.unsigned_abs()))
        }
    }
}
