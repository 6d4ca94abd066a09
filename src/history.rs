use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::amortization::AmortizationCalculator;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::{AmortizationResult, CalculationId, LoanParameters, LoanSchemeId, UserId};

/// snapshot of a calculation a user chose to keep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCalculation {
    pub id: CalculationId,
    pub user_id: UserId,
    pub loan_scheme_id: Option<LoanSchemeId>,
    pub loan_amount: Money,
    pub interest_rate: Rate,
    pub tenure_months: i64,
    pub monthly_emi: Money,
    pub total_payment: Money,
    pub total_interest: Money,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SavedCalculation {
    pub fn parameters(&self) -> LoanParameters {
        LoanParameters::new(self.loan_amount, self.interest_rate, self.tenure_months)
    }

    pub fn result(&self) -> AmortizationResult {
        AmortizationResult {
            monthly_installment: self.monthly_emi,
            total_payment: self.total_payment,
            total_interest: self.total_interest,
        }
    }
}

/// append-only persistence port for saved calculations
pub trait CalculationStore {
    fn append(&mut self, record: SavedCalculation) -> Result<()>;

    /// records of one user, oldest first
    fn for_user(&self, user_id: UserId) -> Vec<&SavedCalculation>;
}

/// in-memory store, records kept in insertion order
#[derive(Debug, Default)]
pub struct InMemoryCalculationStore {
    records: Vec<SavedCalculation>,
}

impl InMemoryCalculationStore {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[SavedCalculation] {
        &self.records
    }

    pub fn for_scheme(&self, scheme_id: LoanSchemeId) -> Vec<&SavedCalculation> {
        self.records
            .iter()
            .filter(|r| r.loan_scheme_id == Some(scheme_id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl CalculationStore for InMemoryCalculationStore {
    fn append(&mut self, record: SavedCalculation) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn for_user(&self, user_id: UserId) -> Vec<&SavedCalculation> {
        self.records.iter().filter(|r| r.user_id == user_id).collect()
    }
}

/// persist a calculation for a signed-in user.
///
/// The stored figures are computed here from `params`, so a record always
/// pairs inputs with their own result. Nothing the caller displays is
/// touched: a failed save leaves it as it was.
pub fn save_calculation<S: CalculationStore + ?Sized>(
    store: &mut S,
    user_id: Option<UserId>,
    calculator: &AmortizationCalculator,
    params: &LoanParameters,
    loan_scheme_id: Option<LoanSchemeId>,
    notes: Option<String>,
    time_provider: &SafeTimeProvider,
) -> Result<SavedCalculation> {
    let user_id = user_id.ok_or(CalculatorError::LoginRequired)?;

    let result = calculator.compute(params);
    if result.monthly_installment.is_zero() {
        return Err(CalculatorError::NothingToSave);
    }

    let record = SavedCalculation {
        id: Uuid::new_v4(),
        user_id,
        loan_scheme_id,
        loan_amount: params.principal,
        interest_rate: params.annual_rate,
        tenure_months: params.tenure_months,
        monthly_emi: result.monthly_installment,
        total_payment: result.total_payment,
        total_interest: result.total_interest,
        notes,
        created_at: time_provider.now(),
    };

    match store.append(record.clone()) {
        Ok(()) => {
            info!("saved calculation {} for user {}", record.id, user_id);
            Ok(record)
        }
        Err(e) => {
            warn!("failed to save calculation for user {}: {}", user_id, e);
            Err(match e {
                CalculatorError::PersistenceFailed { .. } => e,
                other => CalculatorError::PersistenceFailed {
                    message: other.to_string(),
                },
            })
        }
    }
}
