use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::amortization::{AmortizationCalculator, ZeroRatePolicy};
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::LoanParameters;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CalculatorConfig {
    pub defaults: DefaultParameters,
    pub limits: InputLimits,
    pub zero_rate_policy: ZeroRatePolicy,
    pub display: DisplayConfig,
}

/// values the calculator opens with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultParameters {
    pub loan_amount: Money,
    pub interest_rate_percent: Decimal,
    pub tenure_months: i64,
    /// tenure used when a loan scheme has no maximum tenure
    pub scheme_fallback_tenure_months: i64,
}

/// inclusive bounds accepted by the input fields
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: Decimal,
    pub max: Decimal,
}

/// business-allowed input ranges, checked on top of the calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub loan_amount: Bounds,
    pub interest_rate_percent: Bounds,
    pub tenure_months: Bounds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency_symbol: String,
    pub percent_decimals: u32,
}

impl Default for DefaultParameters {
    fn default() -> Self {
        Self {
            loan_amount: Money::from_major(100_000),
            interest_rate_percent: dec!(10),
            tenure_months: 36,
            scheme_fallback_tenure_months: 60,
        }
    }
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            loan_amount: Bounds::new(dec!(10000), dec!(10000000)),
            interest_rate_percent: Bounds::new(dec!(1), dec!(30)),
            tenure_months: Bounds::new(dec!(1), dec!(360)),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            percent_decimals: 1,
        }
    }
}

impl Bounds {
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// intersect with optional tighter bounds, never widening
    pub fn narrow(&self, min: Option<Decimal>, max: Option<Decimal>) -> Bounds {
        Bounds {
            min: min.map_or(self.min, |m| m.max(self.min)),
            max: max.map_or(self.max, |m| m.min(self.max)),
        }
    }

    fn check(&self, field: &str, value: Decimal) -> Result<()> {
        if self.contains(value) {
            return Ok(());
        }
        Err(CalculatorError::OutOfRange {
            field: field.to_string(),
            value,
            min: self.min,
            max: self.max,
        })
    }
}

impl DefaultParameters {
    pub fn parameters(&self) -> LoanParameters {
        LoanParameters::new(
            self.loan_amount,
            Rate::from_percent(self.interest_rate_percent),
            self.tenure_months,
        )
    }
}

impl InputLimits {
    /// reject parameters `calculator` would zero out or the business
    /// does not allow; reports the first offending field
    pub fn validate(&self, params: &LoanParameters, calculator: &AmortizationCalculator) -> Result<()> {
        let invalid_rate = || CalculatorError::InvalidInterestRate {
            rate: params.annual_rate,
        };

        if !params.principal.is_positive() {
            return Err(CalculatorError::InvalidPrincipal {
                amount: params.principal,
            });
        }
        if !calculator.accepts_rate(params.annual_rate) {
            return Err(invalid_rate());
        }
        if params.tenure_months <= 0 {
            return Err(CalculatorError::InvalidTenure {
                months: params.tenure_months,
            });
        }

        let rate_percent = params.annual_rate.as_percentage().ok_or_else(invalid_rate)?;
        self.loan_amount.check("loan amount", params.principal.as_decimal())?;
        self.interest_rate_percent.check("interest rate", rate_percent)?;
        self.tenure_months
            .check("tenure", Decimal::from(params.tenure_months))?;

        Ok(())
    }

    fn check_consistency(&self) -> Result<()> {
        for (name, bounds) in [
            ("loan amount", &self.loan_amount),
            ("interest rate", &self.interest_rate_percent),
            ("tenure", &self.tenure_months),
        ] {
            if bounds.min > bounds.max {
                return Err(CalculatorError::InvalidConfiguration {
                    message: format!("{} limits inverted: {} > {}", name, bounds.min, bounds.max),
                });
            }
        }
        Ok(())
    }
}

impl CalculatorConfig {
    /// load from json; missing sections fall back to defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig =
            serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        debug!("loaded calculator config: {:?}", config);
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalculatorError::InvalidConfiguration {
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.limits.check_consistency()?;

        let defaults = &self.defaults;
        if !defaults.loan_amount.is_positive() {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!("default loan amount must be positive: {}", defaults.loan_amount),
            });
        }
        if defaults.interest_rate_percent <= Decimal::ZERO {
            return Err(CalculatorError::InvalidConfiguration {
                message: format!(
                    "default interest rate must be positive: {}",
                    defaults.interest_rate_percent
                ),
            });
        }
        if defaults.tenure_months <= 0 || defaults.scheme_fallback_tenure_months <= 0 {
            return Err(CalculatorError::InvalidConfiguration {
                message: "default tenures must be positive".to_string(),
            });
        }

        Ok(())
    }

    pub fn calculator(&self) -> AmortizationCalculator {
        AmortizationCalculator::new(self.zero_rate_policy)
    }
}
