use chrono::{Datelike, Days, NaiveDate, Weekday};

use feriados_ec::time::calendar::ecuadorcalendar::{
    CARNIVAL_MONDAY, CARNIVAL_TUESDAY, CHRISTMAS, DAY_OF_THE_DEAD, EASTER_DAY,
    FIRST_CRY_OF_INDEPENDENCE, FOUNDATION_OF_QUITO, GOOD_FRIDAY, GUAYAQUIL_INDEPENDENCE,
    LABOUR_DAY, NEW_YEAR, PICHINCHA_BATTLE,
};
use feriados_ec::time::recurringholiday::easterrelatedholiday::easter_sunday;
use feriados_ec::{resolve, Province};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn expected_shift(raw: NaiveDate) -> NaiveDate {
    match raw.weekday() {
        Weekday::Sat | Weekday::Tue => raw - Days::new(1),
        Weekday::Sun => raw + Days::new(1),
        Weekday::Wed => raw + Days::new(2),
        Weekday::Thu => raw + Days::new(1),
        Weekday::Mon | Weekday::Fri => raw,
    }
}

#[test]
fn new_year_and_christmas_unshifted_every_year() {
    for year in 1990..=2060 {
        let map = resolve(year, Province::National).unwrap();
        assert_eq!(map.dates_of(NEW_YEAR), vec![date(year, 1, 1)]);
        assert_eq!(map.dates_of(CHRISTMAS), vec![date(year, 12, 25)]);
    }
}

#[test]
fn movable_feasts_follow_easter() {
    for year in 1990..=2060 {
        let map = resolve(year, Province::National).unwrap();
        let easter = easter_sunday(year).unwrap();
        assert_eq!(map.get(&easter), Some(EASTER_DAY));
        assert_eq!(map.dates_of(GOOD_FRIDAY), vec![easter - Days::new(2)]);
        assert_eq!(map.dates_of(CARNIVAL_MONDAY), vec![easter - Days::new(48)]);
        assert_eq!(map.dates_of(CARNIVAL_TUESDAY), vec![easter - Days::new(47)]);
        assert_eq!((easter - Days::new(48)).weekday(), Weekday::Mon);
    }
}

#[test]
fn civic_holidays_shift_from_2016() {
    let civic = [
        (LABOUR_DAY, 5, 1),
        (PICHINCHA_BATTLE, 5, 24),
        (FIRST_CRY_OF_INDEPENDENCE, 8, 10),
        (GUAYAQUIL_INDEPENDENCE, 10, 9),
    ];
    for year in 2016..=2060 {
        let map = resolve(year, Province::National).unwrap();
        for (label, month, day) in civic {
            let observed = map.dates_of(label);
            assert_eq!(observed, vec![expected_shift(date(year, month, day))], "{} {}", label, year);
            let weekday = observed[0].weekday();
            assert!(weekday == Weekday::Mon || weekday == Weekday::Fri, "{} {}", label, year);
        }
    }
}

#[test]
fn civic_holidays_literal_until_2015() {
    for year in 1990..=2015 {
        let map = resolve(year, Province::National).unwrap();
        assert_eq!(map.dates_of(LABOUR_DAY), vec![date(year, 5, 1)]);
        assert_eq!(map.dates_of(PICHINCHA_BATTLE), vec![date(year, 5, 24)]);
        assert_eq!(map.dates_of(FIRST_CRY_OF_INDEPENDENCE), vec![date(year, 8, 10)]);
        assert_eq!(map.dates_of(GUAYAQUIL_INDEPENDENCE), vec![date(year, 10, 9)]);
    }
}

#[test]
fn labour_day_scenarios() {
    // Saturday, Sunday, Wednesday, Thursday, Monday, Friday
    let cases = [
        (2021, date(2021, 4, 30)),
        (2022, date(2022, 5, 2)),
        (2019, date(2019, 5, 3)),
        (2025, date(2025, 5, 2)),
        (2023, date(2023, 5, 1)),
        (2020, date(2020, 5, 1)),
    ];
    for (year, observed) in cases {
        let map = resolve(year, Province::National).unwrap();
        assert_eq!(map.dates_of(LABOUR_DAY), vec![observed], "{}", year);
    }
}

#[test]
fn pichincha_battle_saturday_goes_to_friday() {
    // 2025-05-24 is a Saturday
    let map = resolve(2025, Province::National).unwrap();
    assert_eq!(map.dates_of(PICHINCHA_BATTLE), vec![date(2025, 5, 23)]);
}

#[test]
fn foundation_of_quito_is_province_gated() {
    for year in 2010..=2040 {
        let pichincha = resolve(year, Province::Pichincha).unwrap();
        let raw = date(year, 12, 6);
        let expected = if year > 2015 { expected_shift(raw) } else { raw };
        assert_eq!(pichincha.dates_of(FOUNDATION_OF_QUITO), vec![expected]);

        for province in [Province::National, Province::Guayas, Province::SantoDomingo] {
            let map = resolve(year, province).unwrap();
            assert!(map.dates_of(FOUNDATION_OF_QUITO).is_empty());
        }
    }
}

#[test]
fn non_pichincha_provinces_share_the_national_calendar() {
    let national = resolve(2024, Province::National).unwrap();
    for province in Province::ALL {
        if province != Province::Pichincha {
            assert_eq!(resolve(2024, province).unwrap(), national, "{}", province);
        }
    }
}

#[test]
fn day_of_the_dead_on_nov_4_when_nov_3_is_thursday() {
    for year in 1990..=2060 {
        if date(year, 11, 3).weekday() == Weekday::Thu {
            let map = resolve(year, Province::National).unwrap();
            assert_eq!(map.dates_of(DAY_OF_THE_DEAD), vec![date(year, 11, 4)], "{}", year);
        }
    }
}

#[test]
fn every_rule_fires_once() {
    for year in [1995, 2015, 2016, 2021, 2024, 2038] {
        assert_eq!(resolve(year, Province::National).unwrap().len(), 14, "{}", year);
        assert_eq!(resolve(year, Province::Pichincha).unwrap().len(), 15, "{}", year);
    }
}
