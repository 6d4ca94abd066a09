use log::{debug, warn};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::decimal::{round_half_away, Money, Rate};
use crate::types::{AmortizationResult, Breakdown, LoanParameters};

/// how a zero annual rate is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ZeroRatePolicy {
    /// zero rate yields the zero result, like any other non-positive input
    #[default]
    Degenerate,
    /// zero rate splits the principal evenly over the tenure
    StraightLine,
}

/// EMI calculator for fixed-rate, fixed-term loans.
///
/// Total over its input domain: non-positive, non-finite or overflowing
/// inputs produce [`AmortizationResult::ZERO`] instead of an error, so the
/// calculator can be driven directly by half-edited form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AmortizationCalculator {
    zero_rate_policy: ZeroRatePolicy,
}

impl AmortizationCalculator {
    pub fn new(zero_rate_policy: ZeroRatePolicy) -> Self {
        Self { zero_rate_policy }
    }

    pub fn zero_rate_policy(&self) -> ZeroRatePolicy {
        self.zero_rate_policy
    }

    /// monthly installment, total payment and total interest
    pub fn compute(&self, params: &LoanParameters) -> AmortizationResult {
        if !self.is_valid(params) {
            debug!(
                "zero result for principal {}, rate {}, tenure {}",
                params.principal, params.annual_rate, params.tenure_months
            );
            return AmortizationResult::ZERO;
        }

        // is_valid guarantees a positive tenure
        let months = params.tenure_months.unsigned_abs();
        let monthly_rate = params.annual_rate.monthly_rate().as_decimal();

        let emi = if monthly_rate.is_zero() {
            params.principal.as_decimal().checked_div(Decimal::from(months))
        } else {
            equal_installment(params.principal.as_decimal(), monthly_rate, months)
        };

        match emi.and_then(|emi| totals(params.principal, emi, months)) {
            Some(result) => result,
            None => {
                warn!(
                    "emi calculation overflowed for principal {}, rate {}, tenure {}",
                    params.principal, params.annual_rate, params.tenure_months
                );
                AmortizationResult::ZERO
            }
        }
    }

    /// whether the parameters produce a real (non-degenerate) calculation
    pub fn is_valid(&self, params: &LoanParameters) -> bool {
        params.principal.is_positive() && self.accepts_rate(params.annual_rate) && params.tenure_months > 0
    }

    /// whether the rate alone passes the zero-result guard under this policy
    pub fn accepts_rate(&self, rate: Rate) -> bool {
        match self.zero_rate_policy {
            ZeroRatePolicy::Degenerate => rate.is_positive(),
            ZeroRatePolicy::StraightLine => rate >= Rate::ZERO,
        }
    }
}

/// compute with the default (source-compatible) zero-rate policy
pub fn compute(principal: Money, annual_rate: Rate, tenure_months: i64) -> AmortizationResult {
    AmortizationCalculator::default().compute(&LoanParameters::new(principal, annual_rate, tenure_months))
}

/// compute straight from raw form values
pub fn compute_raw(principal: f64, annual_rate_percent: f64, tenure_months: i64) -> AmortizationResult {
    AmortizationCalculator::default().compute(&LoanParameters::from_raw(
        principal,
        annual_rate_percent,
        tenure_months,
    ))
}

/// validity predicate for callers that want to reject rather than zero
pub fn is_valid(params: &LoanParameters) -> bool {
    AmortizationCalculator::default().is_valid(params)
}

/// principal and interest shares of the total payment
pub fn breakdown(result: &AmortizationResult, principal: Money) -> Breakdown {
    let total = result.total_payment.as_decimal();
    if total.is_zero() {
        return Breakdown::ZERO;
    }

    let share = |part: Decimal| {
        part.checked_div(total)
            .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
    };

    match (share(principal.as_decimal()), share(result.total_interest.as_decimal())) {
        (Some(principal_percent), Some(interest_percent)) => Breakdown {
            principal_percent,
            interest_percent,
        },
        _ => Breakdown::ZERO,
    }
}

/// EMI = P * r * (1 + r)^n / ((1 + r)^n - 1)
fn equal_installment(principal: Decimal, monthly_rate: Decimal, months: u64) -> Option<Decimal> {
    let growth = checked_pow(Decimal::ONE + monthly_rate, months)?;
    let denominator = growth.checked_sub(Decimal::ONE)?;
    if denominator <= Decimal::ZERO {
        return None;
    }

    let numerator = principal.checked_mul(monthly_rate)?.checked_mul(growth)?;
    numerator.checked_div(denominator)
}

/// round the installment first so the total is an exact multiple of it
fn totals(principal: Money, emi: Decimal, months: u64) -> Option<AmortizationResult> {
    let installment = round_half_away(emi, 0);
    let total_payment = installment.checked_mul(Decimal::from(months))?;
    let total_interest = round_half_away(total_payment.checked_sub(principal.as_decimal())?, 0);

    Some(AmortizationResult {
        monthly_installment: Money::from_decimal(installment),
        total_payment: Money::from_decimal(total_payment),
        total_interest: Money::from_decimal(total_interest),
    })
}

/// exponentiation by squaring, `None` on overflow
fn checked_pow(base: Decimal, exp: u64) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut square = base;
    let mut remaining = exp;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result = result.checked_mul(square)?;
        }
        remaining >>= 1;
        if remaining > 0 {
            square = square.checked_mul(square)?;
        }
    }

    Some(result)
}
