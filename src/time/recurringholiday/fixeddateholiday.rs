use chrono::NaiveDate;

use crate::time::province::Province;
use crate::time::utility::is_valid_month_day;
use super::recurringholiday::RecurringHoliday;
use super::weekendadjustment::WeekendAdjustmentRule;

#[derive(Clone)]
pub struct FixedDateHoliday {
    label: String,
    month: u32,
    day: u32,
    weekend_adjustment_rule: Option<WeekendAdjustmentRule>,
    province: Option<Province>
}

impl FixedDateHoliday {
    /// Unshifted, nationwide holiday. Returns `None` for a month/day that never exists.
    pub fn new(label: &str, month: u32, day: u32) -> Option<FixedDateHoliday> {
        if !is_valid_month_day(month, day) {
            return None;
        }

        Some(FixedDateHoliday {
            label: label.to_owned(),
            month,
            day,
            weekend_adjustment_rule: None,
            province: None
        })
    }

    pub fn with_weekend_adjustment(mut self, rule: WeekendAdjustmentRule) -> FixedDateHoliday {
        self.weekend_adjustment_rule = Some(rule);
        self
    }

    /// Restricts the holiday to a single province.
    pub fn only_in(mut self, province: Province) -> FixedDateHoliday {
        self.province = Some(province);
        self
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn weekend_adjustment_rule(&self) -> Option<&WeekendAdjustmentRule> {
        self.weekend_adjustment_rule.as_ref()
    }

    pub fn province(&self) -> Option<Province> {
        self.province
    }
}

impl RecurringHoliday for FixedDateHoliday {
    fn label(&self) -> &str {
        &self.label
    }

    fn get_holiday(&self, year: i32, province: Province) -> Option<NaiveDate> {
        if self.province.is_some_and(|p| p != province) {
            return None;
        }

        let raw = NaiveDate::from_ymd_opt(year, self.month, self.day)?;
        Some(match &self.weekend_adjustment_rule {
            Some(rule) => rule.adjust(raw),
            None => raw
        })
    }
}
