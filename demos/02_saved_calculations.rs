/// saved calculations - keep snapshots for a signed-in user
use chrono::{Duration, TimeZone, Utc};
use emi_calculator_rs::{
    EmiCalculator, InMemoryCalculationStore, CalculationStore, Money, SafeTimeProvider, TimeSource,
    Uuid,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    ));
    let controller = time.test_control().unwrap();

    let mut store = InMemoryCalculationStore::new();
    let user = Uuid::new_v4();

    let mut calculator = EmiCalculator::builder().build();
    calculator.save(&mut store, Some(user), Some("first look".to_string()), &time)?;

    controller.advance(Duration::days(1));
    calculator.set_principal(Money::from_major(250_000));
    calculator.save(&mut store, Some(user), None, &time)?;

    // anonymous visitors can calculate but not save
    if let Err(e) = calculator.save(&mut store, None, None, &time) {
        println!("not saved: {}", e);
    }

    for record in store.for_user(user) {
        println!(
            "{}  {} over {} months -> emi {}",
            record.created_at, record.loan_amount, record.tenure_months, record.monthly_emi
        );
    }

    Ok(())
}
