use std::sync::Arc;

use crate::error::Result;
use crate::time::calendar::holidaycalendar::HolidayCalendar;
use crate::time::calendar::holidaymap::{HolidayMap, HolidayMapBuilder};
use crate::time::province::Province;
use crate::time::recurringholiday::dayofthedeadholiday::DayOfTheDeadHoliday;
use crate::time::recurringholiday::easterrelatedholiday::EasterRelatedHoliday;
use crate::time::recurringholiday::fixeddateholiday::FixedDateHoliday;
use crate::time::recurringholiday::recurringholiday::RecurringHoliday;
use crate::time::recurringholiday::weekendadjustment::WeekendAdjustmentRule;
use crate::time::utility::check_year;

pub const SANTO_DOMINGO_CANTON: &str = "Cantonalización de Santo Domingo";
pub const SANTO_DOMINGO_PROVINCE: &str = "Provincialización de Santo Domingo";
pub const PATRON_SAINT_FESTIVITIES: &str = "Fiestas patronales";
pub const NEW_YEAR: &str = "Año Nuevo [New Year's Day]";
pub const CHRISTMAS: &str = "Navidad [Christmas]";
pub const GOOD_FRIDAY: &str = "Semana Santa (Viernes Santo) [Good Friday]";
pub const EASTER_DAY: &str = "Día de Pascuas [Easter Day]";
pub const CARNIVAL_MONDAY: &str = "Lunes de carnaval [Carnival of Monday]";
pub const CARNIVAL_TUESDAY: &str = "Martes de carnaval [Tuesday of Carnival]";
pub const LABOUR_DAY: &str = "Día Nacional del Trabajo [Labour Day]";
pub const PICHINCHA_BATTLE: &str = "Batalla del Pichincha [Pichincha Battle]";
pub const FIRST_CRY_OF_INDEPENDENCE: &str = "Primer Grito de la Independencia [First Cry of Independence]";
pub const GUAYAQUIL_INDEPENDENCE: &str = "Independencia de Guayaquil [Guayaquil's Independence]";
pub const DAY_OF_THE_DEAD: &str = "Día de los difuntos [Day of the Dead]";
pub const FOUNDATION_OF_QUITO: &str = "Fundación de Quito [Foundation of Quito]";

const LENT_DAYS: i64 = 46;

fn fixed(label: &str, month: u32, day: u32) -> FixedDateHoliday {
    // Month/day pairs below are literals that always exist.
    FixedDateHoliday::new(label, month, day)
        .unwrap_or_else(|| panic!("invalid built-in holiday {}/{}", month, day))
}

fn shifted(label: &str, month: u32, day: u32) -> FixedDateHoliday {
    fixed(label, month, day).with_weekend_adjustment(WeekendAdjustmentRule::losep())
}

/// Ecuador's recurring holidays, in the order they are applied.
pub fn ecuador_rules() -> Vec<Arc<dyn RecurringHoliday>> {
    vec![
        // Santo Domingo de los Tsáchilas festivities
        Arc::new(fixed(SANTO_DOMINGO_CANTON, 7, 3)),
        Arc::new(fixed(SANTO_DOMINGO_PROVINCE, 11, 6)),
        // parish feast of Luz de América
        Arc::new(fixed(PATRON_SAINT_FESTIVITIES, 8, 2)),

        Arc::new(fixed(NEW_YEAR, 1, 1)),
        Arc::new(fixed(CHRISTMAS, 12, 25)),

        Arc::new(EasterRelatedHoliday::new(GOOD_FRIDAY, -2)),
        Arc::new(EasterRelatedHoliday::new(EASTER_DAY, 0)),
        Arc::new(EasterRelatedHoliday::new(CARNIVAL_MONDAY, -(LENT_DAYS + 2))),
        Arc::new(EasterRelatedHoliday::new(CARNIVAL_TUESDAY, -(LENT_DAYS + 1))),

        Arc::new(shifted(LABOUR_DAY, 5, 1)),
        Arc::new(shifted(PICHINCHA_BATTLE, 5, 24)),
        Arc::new(shifted(FIRST_CRY_OF_INDEPENDENCE, 8, 10)),
        Arc::new(shifted(GUAYAQUIL_INDEPENDENCE, 10, 9)),

        Arc::new(DayOfTheDeadHoliday::new(DAY_OF_THE_DEAD)),

        Arc::new(shifted(FOUNDATION_OF_QUITO, 12, 6).only_in(Province::Pichincha)),
    ]
}

/// Holiday resolution engine for one province.
pub struct EcuadorCalendar {
    province: Province,
    recurring_holidays: Vec<Arc<dyn RecurringHoliday>>
}

impl EcuadorCalendar {
    pub fn new(province: Province) -> EcuadorCalendar {
        EcuadorCalendar {
            province,
            recurring_holidays: ecuador_rules()
        }
    }

    pub fn recurring_holidays(&self) -> &[Arc<dyn RecurringHoliday>] {
        &self.recurring_holidays
    }

    pub fn resolve(&self, year: i32) -> Result<HolidayMap> {
        let year = check_year(year)?;
        let mut builder = HolidayMapBuilder::new();

        for rule in self.recurring_holidays.iter() {
            if let Some(d) = rule.get_holiday(year, self.province) {
                builder.insert(d, rule.label());
            }
        }

        let holiday_map = builder.build();
        tracing::debug!(year, province = %self.province, holidays = holiday_map.len(), "resolved holiday calendar");
        Ok(holiday_map)
    }
}

impl HolidayCalendar for EcuadorCalendar {
    fn province(&self) -> Province {
        self.province
    }

    fn get_holiday_map(&self, year: i32) -> Result<Arc<HolidayMap>> {
        self.resolve(year).map(Arc::new)
    }
}

/// Holidays observed in `year` for `province`.
pub fn resolve(year: i32, province: Province) -> Result<HolidayMap> {
    EcuadorCalendar::new(province).resolve(year)
}
