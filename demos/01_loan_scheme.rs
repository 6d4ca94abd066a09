/// loan schemes - pick a scheme, open the calculator with its defaults
use emi_calculator_rs::{
    filter_schemes, CalculatorConfig, EmiCalculator, LoanScheme, Money, SchemeFilter, Uuid,
};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut mudra = LoanScheme::new(Uuid::new_v4(), "Pradhan Mantri Mudra Yojana", dec!(8.5));
    mudra.ministry = Some("Ministry of Finance".to_string());
    mudra.loan_amount_max = Some(Money::from_major(1_000_000));
    mudra.tenure_months_max = Some(60);
    mudra.applicable_business_types = Some(vec!["tailoring".to_string(), "dairy".to_string()]);
    mudra.applicable_states = Some(vec!["All India".to_string()]);

    let mut stree_shakti = LoanScheme::new(Uuid::new_v4(), "Stree Shakti Package", dec!(7.25));
    stree_shakti.applicable_business_types = Some(vec!["handicrafts".to_string()]);
    stree_shakti.applicable_states = Some(vec!["Karnataka".to_string()]);

    let schemes = vec![mudra, stree_shakti];
    let filter = SchemeFilter::new().business_type("dairy").state("Bihar");

    for scheme in filter_schemes(&schemes, &filter) {
        let mut calculator = EmiCalculator::for_scheme(scheme, CalculatorConfig::default());
        println!("{} at {}", scheme.name, scheme.annual_rate());
        println!("{}\n", calculator.json());

        // the borrower only needs 3 lakh over two years
        calculator.set_principal(Money::from_major(300_000));
        calculator.set_tenure_months(24);
        calculator.validate()?;
        println!("{}", calculator.json());
    }

    Ok(())
}
