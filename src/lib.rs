pub mod configuration;

pub mod error;

pub mod logger;

pub mod eligibility {
    pub mod withdrawaldate;
    pub mod beneficiary;
    pub mod creditapplicant;
}

pub mod oracle {
    pub mod holidayoracle;
    pub mod localoracle;
    pub mod remoteoracle;
}

pub mod time {
    pub mod utility;
    pub mod province;

    pub mod recurringholiday {
        pub mod recurringholiday;
        pub mod weekendadjustment;
        pub mod fixeddateholiday;
        pub mod easterrelatedholiday;
        pub mod dayofthedeadholiday;
    }

    pub mod calendar {
        pub mod holidaymap;
        pub mod holidaycalendar;
        pub mod ecuadorcalendar;
        pub mod cachedcalendar;
    }
}

pub use error::{HolidayError, Result};
pub use time::calendar::ecuadorcalendar::{resolve, EcuadorCalendar};
pub use time::calendar::holidaymap::HolidayMap;
pub use time::province::Province;
