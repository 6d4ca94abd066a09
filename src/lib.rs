pub mod amortization;
pub mod calculator;
pub mod config;
pub mod decimal;
pub mod errors;
pub mod format;
pub mod history;
pub mod schemes;
pub mod serialization;
pub mod types;

// re-export key types
pub use amortization::{breakdown, compute, compute_raw, is_valid, AmortizationCalculator, ZeroRatePolicy};
pub use calculator::{EmiCalculator, EmiCalculatorBuilder};
pub use config::{Bounds, CalculatorConfig, DefaultParameters, DisplayConfig, InputLimits};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use history::{save_calculation, CalculationStore, InMemoryCalculationStore, SavedCalculation};
pub use schemes::{active_schemes, filter_schemes, LoanScheme, SchemeFilter};
pub use serialization::CalculationView;
pub use types::{
    AmortizationResult, Breakdown, CalculationId, LoanParameters, LoanSchemeId, UserId,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
