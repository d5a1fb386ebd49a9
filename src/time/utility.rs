use std::ops::RangeInclusive;

use crate::error::{HolidayError, Result};

/// Years the holiday engine accepts.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

#[inline]
pub const fn is_leap (year: i32) -> bool {
    ((year % 4 == 0) && (year % 100!= 0)) || (year % 400 == 0)
}


pub const fn days_of_month (year: i32, month: u32) -> u32 {
    const NO_LEAP_EOM: [u32; 13] = [
        0, 31, 28, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    const LEAP_EOM: [u32; 13] = [
        0, 31, 29, 31, 30,
        31, 30, 31, 31, 30,
        31, 30, 31
    ];

    if is_leap(year) {
        LEAP_EOM[month as usize]
    } else {
        NO_LEAP_EOM[month as usize]
    }
}

/// True when `month`/`day` names a day that exists in at least one year.
pub const fn is_valid_month_day (month: u32, day: u32) -> bool {
    month >= 1 && month <= 12 && day >= 1 && day <= days_of_month(2000, month)
}

pub fn check_year (year: i32) -> Result<i32> {
    if SUPPORTED_YEARS.contains(&year) {
        Ok(year)
    } else {
        Err(HolidayError::YearOutOfRange(year))
    }
}
