use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{DefaultParameters, InputLimits};
use crate::decimal::{Money, Rate};
use crate::types::{LoanParameters, LoanSchemeId};

/// scheme applicable in every state
pub const ALL_INDIA: &str = "All India";

/// government loan scheme a calculation can be opened from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanScheme {
    pub id: LoanSchemeId,
    pub name: String,
    pub description: Option<String>,
    pub ministry: Option<String>,
    /// annual rate in percent
    pub interest_rate: Decimal,
    pub loan_amount_min: Option<Money>,
    pub loan_amount_max: Option<Money>,
    pub tenure_months_min: Option<i64>,
    pub tenure_months_max: Option<i64>,
    pub subsidy_percentage: Option<Decimal>,
    pub for_women: Option<bool>,
    pub for_shg: Option<bool>,
    pub applicable_business_types: Option<Vec<String>>,
    pub applicable_states: Option<Vec<String>>,
    pub application_url: Option<String>,
    pub documents_required: Option<String>,
    pub eligibility: Option<String>,
    pub is_active: Option<bool>,
}

impl LoanScheme {
    /// minimal active scheme, remaining fields empty
    pub fn new(id: LoanSchemeId, name: impl Into<String>, interest_rate: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            ministry: None,
            interest_rate,
            loan_amount_min: None,
            loan_amount_max: None,
            tenure_months_min: None,
            tenure_months_max: None,
            subsidy_percentage: None,
            for_women: None,
            for_shg: None,
            applicable_business_types: None,
            applicable_states: None,
            application_url: None,
            documents_required: None,
            eligibility: None,
            is_active: Some(true),
        }
    }

    pub fn is_active(&self) -> bool {
        self.is_active == Some(true)
    }

    pub fn annual_rate(&self) -> Rate {
        Rate::from_percent(self.interest_rate)
    }

    /// parameters the calculator opens with for this scheme: the scheme
    /// maximums and rate, with configured fallbacks for missing or zero values
    pub fn default_parameters(&self, defaults: &DefaultParameters) -> LoanParameters {
        let principal = self
            .loan_amount_max
            .filter(Money::is_positive)
            .unwrap_or(defaults.loan_amount);

        let rate = if self.interest_rate > Decimal::ZERO {
            self.interest_rate
        } else {
            defaults.interest_rate_percent
        };

        let tenure = self
            .tenure_months_max
            .filter(|months| *months > 0)
            .unwrap_or(defaults.scheme_fallback_tenure_months);

        LoanParameters::new(principal, Rate::from_percent(rate), tenure)
    }

    /// base limits narrowed to the scheme's amount and tenure ranges
    pub fn input_limits(&self, base: &InputLimits) -> InputLimits {
        InputLimits {
            loan_amount: base.loan_amount.narrow(
                self.loan_amount_min.map(|m| m.as_decimal()),
                self.loan_amount_max.map(|m| m.as_decimal()),
            ),
            interest_rate_percent: base.interest_rate_percent,
            tenure_months: base.tenure_months.narrow(
                self.tenure_months_min.map(Decimal::from),
                self.tenure_months_max.map(Decimal::from),
            ),
        }
    }

    fn applies_to_business(&self, business_type: &str) -> bool {
        self.applicable_business_types
            .as_ref()
            .is_some_and(|types| types.iter().any(|t| t == business_type))
    }

    fn applies_to_state(&self, state: &str) -> bool {
        self.applicable_states
            .as_ref()
            .is_some_and(|states| states.iter().any(|s| s == ALL_INDIA || s == state))
    }
}

/// list filter of the loan scheme page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeFilter {
    /// matched case-insensitively against name, description and ministry
    pub search: String,
    /// `None` means all business types
    pub business_type: Option<String>,
    /// `None` means all states
    pub state: Option<String>,
}

impl SchemeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = query.into();
        self
    }

    pub fn business_type(mut self, business_type: impl Into<String>) -> Self {
        self.business_type = Some(business_type.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn matches(&self, scheme: &LoanScheme) -> bool {
        let query = self.search.to_lowercase();
        let contains = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(&query));

        let matches_search = contains(Some(scheme.name.as_str()))
            || contains(scheme.description.as_deref())
            || contains(scheme.ministry.as_deref());

        let matches_business = self
            .business_type
            .as_deref()
            .map_or(true, |b| scheme.applies_to_business(b));

        let matches_state = self
            .state
            .as_deref()
            .map_or(true, |s| scheme.applies_to_state(s));

        matches_search && matches_business && matches_state
    }
}

/// active schemes, cheapest rate first
pub fn active_schemes(schemes: &[LoanScheme]) -> Vec<&LoanScheme> {
    let mut active: Vec<&LoanScheme> = schemes.iter().filter(|s| s.is_active()).collect();
    active.sort_by(|a, b| a.interest_rate.cmp(&b.interest_rate));
    active
}

/// active schemes matching the filter, cheapest rate first
pub fn filter_schemes<'a>(schemes: &'a [LoanScheme], filter: &SchemeFilter) -> Vec<&'a LoanScheme> {
    active_schemes(schemes)
        .into_iter()
        .filter(|s| filter.matches(s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amortization::AmortizationCalculator;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn mudra() -> LoanScheme {
        let mut scheme = LoanScheme::new(Uuid::new_v4(), "Pradhan Mantri Mudra Yojana", dec!(8.5));
        scheme.ministry = Some("Ministry of Finance".to_string());
        scheme.description = Some("Collateral-free loans for micro enterprises".to_string());
        scheme.loan_amount_min = Some(Money::from_major(50_000));
        scheme.loan_amount_max = Some(Money::from_major(1_000_000));
        scheme.tenure_months_min = Some(12);
        scheme.tenure_months_max = Some(84);
        scheme.applicable_business_types = Some(vec!["tailoring".to_string(), "dairy".to_string()]);
        scheme.applicable_states = Some(vec![ALL_INDIA.to_string()]);
        scheme
    }

    fn stree_shakti() -> LoanScheme {
        let mut scheme = LoanScheme::new(Uuid::new_v4(), "Stree Shakti Package", dec!(7.25));
        scheme.for_women = Some(true);
        scheme.applicable_business_types = Some(vec!["handicrafts".to_string()]);
        scheme.applicable_states = Some(vec!["Karnataka".to_string(), "Maharashtra".to_string()]);
        scheme
    }

    #[test]
    fn test_default_parameters_from_scheme() {
        let params = mudra().default_parameters(&DefaultParameters::default());

        assert_eq!(params.principal, Money::from_major(1_000_000));
        assert_eq!(params.annual_rate, Rate::from_percent(dec!(8.5)));
        assert_eq!(params.tenure_months, 84);
    }

    #[test]
    fn test_default_parameters_fallbacks() {
        let mut scheme = stree_shakti();
        scheme.interest_rate = Decimal::ZERO;
        scheme.loan_amount_max = Some(Money::ZERO);

        let params = scheme.default_parameters(&DefaultParameters::default());
        assert_eq!(params.principal, Money::from_major(100_000));
        assert_eq!(params.annual_rate, Rate::from_percentage(10));
        assert_eq!(params.tenure_months, 60);
    }

    #[test]
    fn test_input_limits_narrowed_by_scheme() {
        let limits = mudra().input_limits(&InputLimits::default());

        assert_eq!(limits.loan_amount.min, dec!(50000));
        assert_eq!(limits.loan_amount.max, dec!(1000000));
        assert_eq!(limits.tenure_months.min, dec!(12));
        assert_eq!(limits.tenure_months.max, dec!(84));

        let too_big = LoanParameters::new(Money::from_major(2_000_000), Rate::from_percent(dec!(8.5)), 36);
        let calculator = AmortizationCalculator::default();
        assert!(limits.validate(&too_big, &calculator).is_err());
        assert!(InputLimits::default().validate(&too_big, &calculator).is_ok());
    }

    #[test]
    fn test_active_schemes_sorted_by_rate() {
        let mut inactive = LoanScheme::new(Uuid::new_v4(), "Closed Scheme", dec!(4));
        inactive.is_active = Some(false);
        let mut unknown = LoanScheme::new(Uuid::new_v4(), "Draft Scheme", dec!(3));
        unknown.is_active = None;

        let schemes = vec![mudra(), inactive, stree_shakti(), unknown];
        let active = active_schemes(&schemes);

        let names: Vec<&str> = active.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Stree Shakti Package", "Pradhan Mantri Mudra Yojana"]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let scheme = mudra();

        assert!(SchemeFilter::new().search("MUDRA").matches(&scheme));
        assert!(SchemeFilter::new().search("ministry of finance").matches(&scheme));
        assert!(SchemeFilter::new().search("collateral-free").matches(&scheme));
        assert!(!SchemeFilter::new().search("dairy cooperative").matches(&scheme));
        assert!(SchemeFilter::new().matches(&scheme));
    }

    #[test]
    fn test_business_and_state_filters() {
        let schemes = vec![mudra(), stree_shakti()];

        let dairy = filter_schemes(&schemes, &SchemeFilter::new().business_type("dairy"));
        assert_eq!(dairy.len(), 1);
        assert_eq!(dairy[0].name, "Pradhan Mantri Mudra Yojana");

        // all india schemes match any state
        let bihar = filter_schemes(&schemes, &SchemeFilter::new().state("Bihar"));
        assert_eq!(bihar.len(), 1);

        let karnataka = filter_schemes(&schemes, &SchemeFilter::new().state("Karnataka"));
        assert_eq!(karnataka.len(), 2);

        let none = filter_schemes(
            &schemes,
            &SchemeFilter::new().business_type("handicrafts").state("Bihar"),
        );
        assert!(none.is_empty());
    }

    #[test]
    fn test_scheme_without_lists_only_matches_unfiltered() {
        let bare = LoanScheme::new(Uuid::new_v4(), "Bare Scheme", dec!(9));

        assert!(SchemeFilter::new().matches(&bare));
        assert!(!SchemeFilter::new().business_type("retail").matches(&bare));
        assert!(!SchemeFilter::new().state("Gujarat").matches(&bare));
    }
}
