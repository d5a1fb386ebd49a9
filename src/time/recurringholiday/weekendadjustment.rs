use std::collections::HashMap;

use chrono::{
    Datelike,
    Days,
    NaiveDate,
    Weekday
};
use serde::{
    Serialize,
    Deserialize
};


/// First calendar year in which the LOSEP reform moves civic holidays next to a weekend.
pub const LOSEP_EFFECTIVE_YEAR: i32 = 2016;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum WeekendAdjustment {
    Unadjusted,
    PreviousDay,
    NextDay,
    FollowingFriday
}

impl WeekendAdjustment {
    fn shift_days(&self, weekday: Weekday) -> i64 {
        match self {
            WeekendAdjustment::Unadjusted => 0,
            WeekendAdjustment::PreviousDay => -1,
            WeekendAdjustment::NextDay => 1,
            WeekendAdjustment::FollowingFriday => {
                let from = weekday.num_days_from_monday() as i64;
                let friday = Weekday::Fri.num_days_from_monday() as i64;
                (friday - from).rem_euclid(7)
            }
        }
    }
}

/// Array-based weekend adjustment rule.
/// Uses a fixed-size array of day offsets indexed by weekday (0=Monday, 6=Sunday).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekendAdjustmentRule {
    rule: [i64; 7],
    effective_from_year: i32
}

impl WeekendAdjustmentRule {
    /// Builds the offset table from a map. Weekdays missing from the map stay unadjusted.
    pub fn new(adjustment_map: &HashMap<Weekday, WeekendAdjustment>, effective_from_year: i32) -> WeekendAdjustmentRule {
        let mut rule = [0i64; 7];

        for (&weekday, adj) in adjustment_map {
            let idx = weekday.num_days_from_monday() as usize;
            rule[idx] = adj.shift_days(weekday);
        }

        WeekendAdjustmentRule { rule, effective_from_year }
    }

    /// Ecuador's rule: Saturday and Tuesday go back one day, Sunday goes
    /// forward one day, Wednesday and Thursday move to that week's Friday.
    pub fn losep() -> WeekendAdjustmentRule {
        let adjustment_map = HashMap::from([
            (Weekday::Mon, WeekendAdjustment::Unadjusted),
            (Weekday::Tue, WeekendAdjustment::PreviousDay),
            (Weekday::Wed, WeekendAdjustment::FollowingFriday),
            (Weekday::Thu, WeekendAdjustment::FollowingFriday),
            (Weekday::Fri, WeekendAdjustment::Unadjusted),
            (Weekday::Sat, WeekendAdjustment::PreviousDay),
            (Weekday::Sun, WeekendAdjustment::NextDay),
        ]);
        WeekendAdjustmentRule::new(&adjustment_map, LOSEP_EFFECTIVE_YEAR)
    }

    pub fn effective_from_year(&self) -> i32 {
        self.effective_from_year
    }

    pub fn shift_days(&self, weekday: Weekday) -> i64 {
        self.rule[weekday.num_days_from_monday() as usize]
    }

    #[inline]
    pub fn adjust(&self, d: NaiveDate) -> NaiveDate {
        if d.year() < self.effective_from_year {
            return d;
        }

        let shift = self.shift_days(d.weekday());
        let moved = if shift >= 0 {
            d.checked_add_days(Days::new(shift as u64))
        } else {
            d.checked_sub_days(Days::new(shift.unsigned_abs()))
        };
        moved.unwrap_or(d)
    }
}

/// Observed date of a shiftable civic holiday whose raw date is `d`.
pub fn shift_for_weekend_adjacency(d: NaiveDate, effective_from_year: i32) -> NaiveDate {
    let mut rule = WeekendAdjustmentRule::losep();
    rule.effective_from_year = effective_from_year;
    rule.adjust(d)
}
