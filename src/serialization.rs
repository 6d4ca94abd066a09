/// serializable views of a calculation
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculator::EmiCalculator;
use crate::format::{format_currency, format_percent, format_tenure};
use crate::types::{AmortizationResult, Breakdown, LoanParameters, LoanSchemeId};

/// serializable view of a calculator's state
#[derive(Debug, Serialize, Deserialize)]
pub struct CalculationView {
    pub loan_scheme_id: Option<LoanSchemeId>,
    pub parameters: ParametersView,
    pub result: AmortizationResult,
    pub breakdown: Breakdown,
    pub display: DisplayView,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ParametersView {
    pub principal: Decimal,
    /// `None` when the stored fraction is too large to express in percent
    pub annual_rate_percent: Option<Decimal>,
    pub tenure_months: i64,
}

/// preformatted strings for the result card
#[derive(Debug, Serialize, Deserialize)]
pub struct DisplayView {
    pub principal: String,
    pub monthly_installment: String,
    pub total_payment: String,
    pub total_interest: String,
    pub tenure: String,
    pub principal_share: String,
    pub interest_share: String,
}

impl ParametersView {
    pub fn from_parameters(params: &LoanParameters) -> Self {
        ParametersView {
            principal: params.principal.as_decimal(),
            annual_rate_percent: params.annual_rate.as_percentage(),
            tenure_months: params.tenure_months,
        }
    }
}

impl CalculationView {
    pub fn from_calculator(calculator: &EmiCalculator) -> Self {
        let display = &calculator.config().display;
        let symbol = display.currency_symbol.as_str();
        let params = calculator.parameters();
        let result = *calculator.result();
        let breakdown = calculator.breakdown().round_dp(display.percent_decimals);

        CalculationView {
            loan_scheme_id: calculator.loan_scheme_id(),
            parameters: ParametersView::from_parameters(params),
            result,
            breakdown,
            display: DisplayView {
                principal: format_currency(params.principal, symbol),
                monthly_installment: format_currency(result.monthly_installment, symbol),
                total_payment: format_currency(result.total_payment, symbol),
                total_interest: format_currency(result.total_interest, symbol),
                tenure: format_tenure(params.tenure_months),
                principal_share: format_percent(breakdown.principal_percent, display.percent_decimals),
                interest_share: format_percent(breakdown.interest_percent, display.percent_decimals),
            },
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;

    #[test]
    fn test_view_of_reference_calculation() {
        let view = EmiCalculator::builder().build().view();

        assert_eq!(view.parameters.tenure_months, 36);
        assert_eq!(view.parameters.annual_rate_percent, Some(Decimal::TEN));
        assert_eq!(view.result.total_interest, Money::from_major(16_172));
        assert_eq!(view.display.principal, "₹1,00,000");
        assert_eq!(view.display.total_interest, "₹16,172");
        assert_eq!(view.display.principal_share, "86.1%");
        assert_eq!(view.display.interest_share, "13.9%");
    }

    #[test]
    fn test_view_of_zero_result() {
        let mut calculator = EmiCalculator::builder().build();
        calculator.set_tenure_months(0);
        let view = calculator.view();

        assert_eq!(view.display.monthly_installment, "₹0");
        assert_eq!(view.display.principal_share, "0.0%");
        assert!(view.to_json_pretty().is_ok());
    }
}
