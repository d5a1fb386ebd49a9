use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::time::province::Province;
use super::recurringholiday::RecurringHoliday;

/// Día de los Difuntos (November 2).
///
/// The observed day is chosen from the weekday of November 3 (Cuenca's
/// independence day), so the two holidays form one bridge:
///
/// | Nov 3     | observed |
/// |-----------|----------|
/// | Sunday    | Nov 1    |
/// | Monday    | Nov 4    |
/// | Thursday  | Nov 4    |
/// | otherwise | Nov 2    |
#[derive(Clone)]
pub struct DayOfTheDeadHoliday {
    label: String
}

impl DayOfTheDeadHoliday {
    pub fn new(label: &str) -> DayOfTheDeadHoliday {
        DayOfTheDeadHoliday { label: label.to_owned() }
    }
}

impl RecurringHoliday for DayOfTheDeadHoliday {
    fn label(&self) -> &str {
        &self.label
    }

    fn get_holiday(&self, year: i32, _province: Province) -> Option<NaiveDate> {
        let nov_2 = NaiveDate::from_ymd_opt(year, 11, 2)?;
        let nov_3 = NaiveDate::from_ymd_opt(year, 11, 3)?;

        match (nov_2.weekday(), nov_3.weekday()) {
            (Weekday::Sat, Weekday::Sun) => nov_2.checked_sub_days(Days::new(1)),
            (_, Weekday::Thu) | (_, Weekday::Mon) => nov_2.checked_add_days(Days::new(2)),
            // Wednesday, Saturday, Tuesday and Friday keep the calendar date.
            _ => Some(nov_2)
        }
    }
}
