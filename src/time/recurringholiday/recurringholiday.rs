use chrono::{Datelike, NaiveDate};

use crate::time::province::Province;


pub trait RecurringHoliday: Send + Sync {

    fn label(&self) -> &str;

    /// Observed date of the holiday in `year` for `province`, or `None` when
    /// the rule does not apply there.
    fn get_holiday(&self, year: i32, province: Province) -> Option<NaiveDate>;

    fn is_holiday(&self, d: &NaiveDate, province: Province) -> bool {
        self.get_holiday(d.year(), province) == Some(*d)
    }
}
