/// quick start - minimal example to get started
use emi_calculator_rs::{breakdown, compute, Money, Rate};

fn main() {
    // a 1 lakh loan at 10% for three years
    let principal = Money::from_major(100_000);
    let result = compute(principal, Rate::from_percentage(10), 36);

    println!("monthly emi:    {}", result.monthly_installment);
    println!("total payment:  {}", result.total_payment);
    println!("total interest: {}", result.total_interest);

    let shares = breakdown(&result, principal).rounded();
    println!(
        "principal {}% / interest {}%",
        shares.principal_percent, shares.interest_percent
    );
}
