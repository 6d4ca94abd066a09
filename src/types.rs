use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::{round_half_away, Money, Rate};

/// identifier of the user a saved calculation belongs to
pub type UserId = Uuid;

/// identifier of a government loan scheme
pub type LoanSchemeId = Uuid;

/// identifier of a saved calculation
pub type CalculationId = Uuid;

/// inputs of a single EMI calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanParameters {
    pub principal: Money,
    pub annual_rate: Rate,
    /// signed so that a cleared or negative form field stays representable
    pub tenure_months: i64,
}

impl LoanParameters {
    pub fn new(principal: Money, annual_rate: Rate, tenure_months: i64) -> Self {
        Self {
            principal,
            annual_rate,
            tenure_months,
        }
    }

    /// build from raw form values; non-finite numbers become zero and
    /// therefore produce the zero result
    pub fn from_raw(principal: f64, annual_rate_percent: f64, tenure_months: i64) -> Self {
        Self {
            principal: Money::from_f64(principal),
            annual_rate: Rate::from_f64_percent(annual_rate_percent),
            tenure_months,
        }
    }
}

/// aggregate totals of a fixed-rate amortizing loan, in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AmortizationResult {
    pub monthly_installment: Money,
    /// always `monthly_installment * tenure_months`
    pub total_payment: Money,
    /// always `total_payment - principal`
    pub total_interest: Money,
}

impl AmortizationResult {
    pub const ZERO: AmortizationResult = AmortizationResult {
        monthly_installment: Money::ZERO,
        total_payment: Money::ZERO,
        total_interest: Money::ZERO,
    };

    pub fn is_zero(&self) -> bool {
        self.monthly_installment.is_zero() && self.total_payment.is_zero()
    }
}

/// principal vs interest share of the total payment, in percent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Breakdown {
    pub principal_percent: Decimal,
    pub interest_percent: Decimal,
}

impl Breakdown {
    pub const ZERO: Breakdown = Breakdown {
        principal_percent: Decimal::ZERO,
        interest_percent: Decimal::ZERO,
    };

    /// one decimal place, as shown next to the breakdown bar
    pub fn rounded(&self) -> Breakdown {
        self.round_dp(1)
    }

    pub fn round_dp(&self, dp: u32) -> Breakdown {
        Breakdown {
            principal_percent: round_half_away(self.principal_percent, dp),
            interest_percent: round_half_away(self.interest_percent, dp),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.principal_percent.is_zero() && self.interest_percent.is_zero()
    }
}
