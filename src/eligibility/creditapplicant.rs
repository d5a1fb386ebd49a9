use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::eligibility::beneficiary::Beneficiary;

/// Monthly Bono de Desarrollo Humano amount at or below which the
/// Crédito de Desarrollo Humano is not granted (USD 28.20).
pub fn bdh_credit_floor() -> Decimal {
    Decimal::new(2820, 2)
}

/// Same floor for "Pensión Toda una Vida" / "Mis Mejores Años" (USD 34.67).
pub fn pension_credit_floor() -> Decimal {
    Decimal::new(3467, 2)
}

/// Beneficiary applying for the Crédito de Desarrollo Humano.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditApplicant {
    pub beneficiary: Beneficiary,
    pub bonus: Decimal,
    pub id_number: String,
    pub residence: String
}

impl CreditApplicant {
    pub fn qualifies_for_bdh_credit(&self) -> bool {
        self.bonus > bdh_credit_floor()
    }

    pub fn qualifies_for_pension_credit(&self) -> bool {
        self.bonus > pension_credit_floor()
    }
}
