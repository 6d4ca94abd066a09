use rust_decimal::Decimal;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("invalid loan amount: {amount}")]
    InvalidPrincipal {
        amount: Money,
    },

    #[error("invalid interest rate: {rate}")]
    InvalidInterestRate {
        rate: Rate,
    },

    #[error("invalid tenure: {months} months")]
    InvalidTenure {
        months: i64,
    },

    #[error("{field} out of range: {value} not within {min}..={max}")]
    OutOfRange {
        field: String,
        value: Decimal,
        min: Decimal,
        max: Decimal,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("login required to save calculations")]
    LoginRequired,

    #[error("nothing to save: monthly installment is zero")]
    NothingToSave,

    #[error("failed to save calculation: {message}")]
    PersistenceFailed {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
