use emi_calculator_rs::{
    breakdown, compute, AmortizationCalculator, AmortizationResult, Decimal, LoanParameters, Money,
    Rate,
};
use rstest::rstest;
use rust_decimal_macros::dec;

const PRINCIPALS: [i64; 5] = [10_000, 75_000, 100_000, 500_000, 5_000_000];
const RATES: [Decimal; 5] = [dec!(1), dec!(7.25), dec!(8.5), dec!(12), dec!(25)];
const TENURES: [i64; 5] = [1, 6, 36, 120, 360];

fn sweep() -> impl Iterator<Item = LoanParameters> {
    PRINCIPALS.into_iter().flat_map(|p| {
        RATES.into_iter().flat_map(move |r| {
            TENURES
                .into_iter()
                .map(move |n| LoanParameters::new(Money::from_major(p), Rate::from_percent(r), n))
        })
    })
}

#[test]
fn total_payment_is_exact_multiple_of_installment() {
    let calculator = AmortizationCalculator::default();
    for params in sweep() {
        let result = calculator.compute(&params);
        let expected = result.monthly_installment.as_decimal() * Decimal::from(params.tenure_months);
        assert_eq!(result.total_payment.as_decimal(), expected, "{:?}", params);
    }
}

#[test]
fn interest_is_total_minus_principal() {
    let calculator = AmortizationCalculator::default();
    for params in sweep() {
        let result = calculator.compute(&params);
        assert_eq!(
            result.total_interest.as_decimal(),
            result.total_payment.as_decimal() - params.principal.as_decimal(),
            "{:?}",
            params
        );
        assert!(!result.total_interest.is_negative(), "{:?}", params);
    }
}

#[test]
fn breakdown_sums_to_hundred() {
    let calculator = AmortizationCalculator::default();
    for params in sweep() {
        let result = calculator.compute(&params);
        let shares = breakdown(&result, params.principal);
        let sum = shares.principal_percent + shares.interest_percent;
        assert!((sum - dec!(100)).abs() <= dec!(0.1), "{:?} summed to {}", params, sum);
    }
}

#[test]
fn longer_tenure_lowers_installment_and_raises_interest() {
    let calculator = AmortizationCalculator::default();
    for principal in [100_000, 500_000, 5_000_000] {
        for rate in [dec!(7.25), dec!(12), dec!(25)] {
            let results: Vec<AmortizationResult> = [12, 36, 60, 120, 240]
                .into_iter()
                .map(|n| calculator.compute(&LoanParameters::new(Money::from_major(principal), Rate::from_percent(rate), n)))
                .collect();

            for pair in results.windows(2) {
                assert!(pair[1].monthly_installment < pair[0].monthly_installment);
                assert!(pair[1].total_interest > pair[0].total_interest);
            }
        }
    }
}

#[rstest]
#[case(100_000, dec!(10), 36, 3_227, 116_172, 16_172)]
#[case(500_000, dec!(8.5), 60, 10_258, 615_480, 115_480)]
#[case(0, dec!(10), 36, 0, 0, 0)]
#[case(100_000, dec!(0), 36, 0, 0, 0)]
fn reference_scenarios(
    #[case] principal: i64,
    #[case] rate: Decimal,
    #[case] months: i64,
    #[case] installment: i64,
    #[case] total: i64,
    #[case] interest: i64,
) {
    let result = compute(Money::from_major(principal), Rate::from_percent(rate), months);

    assert_eq!(result.monthly_installment.to_i64(), Some(installment));
    assert_eq!(result.total_payment.to_i64(), Some(total));
    assert_eq!(result.total_interest.to_i64(), Some(interest));
}
