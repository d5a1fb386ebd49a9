use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::eligibility::withdrawaldate::WithdrawalDate;
use crate::error::Result;
use crate::oracle::holidayoracle::HolidayOracle;

/// Minimum age for the senior branch of the Bono de Desarrollo Humano.
pub const SENIOR_AGE: u32 = 65;

/// Applicant to the Bono de Desarrollo Humano.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Beneficiary {
    pub name: String,
    pub sex: String,
    pub age: u32,
    pub withdrawal_date: WithdrawalDate,
    pub occupation: String,
    pub income: Decimal,
    pub has_disease: bool,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub social_security: Option<String>
}

impl Beneficiary {
    pub fn is_senior(&self) -> bool {
        self.age >= SENIOR_AGE
    }

    pub fn has_disability(&self) -> bool {
        self.has_disease
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.children.iter().any(|c| c == name)
    }

    pub fn is_withdrawal_on_holiday(&self, oracle: &dyn HolidayOracle) -> Result<bool> {
        let holiday = oracle.is_holiday(self.withdrawal_date.date())?;
        tracing::info!(beneficiary = %self.name, date = %self.withdrawal_date, holiday, "withdrawal date checked");
        Ok(holiday)
    }
}


#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::error::HolidayError;

    struct FixedOracle(Option<bool>);

    impl HolidayOracle for FixedOracle {
        fn is_holiday(&self, _d: NaiveDate) -> Result<bool> {
            self.0.ok_or_else(|| HolidayError::Lookup("offline".to_owned()))
        }
    }

    fn beneficiary(age: u32, has_disease: bool) -> Beneficiary {
        Beneficiary {
            name: "María".to_owned(),
            sex: "F".to_owned(),
            age,
            withdrawal_date: WithdrawalDate::parse("2021-04-30").unwrap(),
            occupation: "Agricultora".to_owned(),
            income: Decimal::new(15000, 2),
            has_disease,
            children: vec!["Ana".to_owned()],
            social_security: None
        }
    }

    #[test]
    fn senior_threshold_is_inclusive() {
        assert!(beneficiary(65, false).is_senior());
        assert!(!beneficiary(64, false).is_senior());
    }

    #[test]
    fn disability_and_children() {
        let b = beneficiary(30, true);
        assert!(b.has_disability());
        assert!(b.has_child("Ana"));
        assert!(!b.has_child("Luis"));
        assert!(!beneficiary(30, false).has_disability());
    }

    #[test]
    fn lookup_failure_is_not_a_verdict() {
        let b = beneficiary(30, false);
        assert!(b.is_withdrawal_on_holiday(&FixedOracle(Some(true))).unwrap());
        assert!(!b.is_withdrawal_on_holiday(&FixedOracle(Some(false))).unwrap());
        assert!(matches!(b.is_withdrawal_on_holiday(&FixedOracle(None)), Err(HolidayError::Lookup(_))));
    }
}
