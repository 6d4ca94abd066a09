use hourglass_rs::SafeTimeProvider;

use crate::amortization::{breakdown, AmortizationCalculator};
use crate::config::{CalculatorConfig, InputLimits};
use crate::decimal::{Money, Rate};
use crate::errors::Result;
use crate::history::{save_calculation, CalculationStore, SavedCalculation};
use crate::schemes::LoanScheme;
use crate::serialization::CalculationView;
use crate::types::{AmortizationResult, Breakdown, LoanParameters, LoanSchemeId, UserId};

/// interactive EMI calculator: three inputs, recomputed on every change
#[derive(Debug, Clone)]
pub struct EmiCalculator {
    config: CalculatorConfig,
    calculator: AmortizationCalculator,
    limits: InputLimits,
    params: LoanParameters,
    result: AmortizationResult,
    loan_scheme_id: Option<LoanSchemeId>,
}

impl EmiCalculator {
    pub fn builder() -> EmiCalculatorBuilder {
        EmiCalculatorBuilder::new()
    }

    /// calculator opened from a loan scheme, with the scheme's defaults
    pub fn for_scheme(scheme: &LoanScheme, config: CalculatorConfig) -> Self {
        EmiCalculatorBuilder::new().config(config).loan_scheme(scheme).build()
    }

    pub fn parameters(&self) -> &LoanParameters {
        &self.params
    }

    pub fn result(&self) -> &AmortizationResult {
        &self.result
    }

    pub fn breakdown(&self) -> Breakdown {
        breakdown(&self.result, self.params.principal)
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// effective limits, narrowed by the scheme when opened from one
    pub fn limits(&self) -> &InputLimits {
        &self.limits
    }

    pub fn loan_scheme_id(&self) -> Option<LoanSchemeId> {
        self.loan_scheme_id
    }

    pub fn set_principal(&mut self, principal: Money) -> &AmortizationResult {
        self.params.principal = principal;
        self.recompute()
    }

    pub fn set_annual_rate(&mut self, rate: Rate) -> &AmortizationResult {
        self.params.annual_rate = rate;
        self.recompute()
    }

    pub fn set_tenure_months(&mut self, months: i64) -> &AmortizationResult {
        self.params.tenure_months = months;
        self.recompute()
    }

    /// replace all inputs at once
    pub fn set_parameters(&mut self, params: LoanParameters) -> &AmortizationResult {
        self.params = params;
        self.recompute()
    }

    /// a zero installment has nothing worth keeping
    pub fn can_save(&self) -> bool {
        !self.result.monthly_installment.is_zero()
    }

    /// check current inputs against the effective limits and the
    /// calculator's zero-rate policy
    pub fn validate(&self) -> Result<()> {
        self.limits.validate(&self.params, &self.calculator)
    }

    pub fn save<S: CalculationStore + ?Sized>(
        &self,
        store: &mut S,
        user_id: Option<UserId>,
        notes: Option<String>,
        time_provider: &SafeTimeProvider,
    ) -> Result<SavedCalculation> {
        save_calculation(
            store,
            user_id,
            &self.calculator,
            &self.params,
            self.loan_scheme_id,
            notes,
            time_provider,
        )
    }

    pub fn view(&self) -> CalculationView {
        CalculationView::from_calculator(self)
    }

    /// pretty json of the current state, empty object if serialization fails
    pub fn json(&self) -> String {
        self.view()
            .to_json_pretty()
            .unwrap_or_else(|_| "{}".to_string())
    }

    fn recompute(&mut self) -> &AmortizationResult {
        self.result = self.calculator.compute(&self.params);
        &self.result
    }
}

/// builder for [`EmiCalculator`]; unset inputs come from the scheme, then the config
#[derive(Debug, Default)]
pub struct EmiCalculatorBuilder {
    config: Option<CalculatorConfig>,
    principal: Option<Money>,
    rate: Option<Rate>,
    tenure_months: Option<i64>,
    scheme: Option<LoanScheme>,
}

impl EmiCalculatorBuilder {
    pub fn new() -> Self {
        Self {
            config: None,
            principal: None,
            rate: None,
            tenure_months: None,
            scheme: None,
        }
    }

    pub fn config(mut self, config: CalculatorConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn principal(mut self, principal: Money) -> Self {
        self.principal = Some(principal);
        self
    }

    pub fn rate(mut self, rate: Rate) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn tenure_months(mut self, months: i64) -> Self {
        self.tenure_months = Some(months);
        self
    }

    pub fn loan_scheme(mut self, scheme: &LoanScheme) -> Self {
        self.scheme = Some(scheme.clone());
        self
    }

    pub fn build(self) -> EmiCalculator {
        let config = self.config.unwrap_or_default();

        let (defaults, limits) = match &self.scheme {
            Some(scheme) => (
                scheme.default_parameters(&config.defaults),
                scheme.input_limits(&config.limits),
            ),
            None => (config.defaults.parameters(), config.limits.clone()),
        };

        let params = LoanParameters::new(
            self.principal.unwrap_or(defaults.principal),
            self.rate.unwrap_or(defaults.annual_rate),
            self.tenure_months.unwrap_or(defaults.tenure_months),
        );

        let calculator = config.calculator();
        let result = calculator.compute(&params);

        EmiCalculator {
            config,
            calculator,
            limits,
            params,
            result,
            loan_scheme_id: self.scheme.map(|s| s.id),
        }
    }
}
