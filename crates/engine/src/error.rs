//! The module contains the errors the engine can return.
//!
//! Every error is local and recoverable: callers report it and move on.
//!
//! - [`InvalidAmount`] when an amount is not positive, not numeric or overflows.
//! - [`ExpenseNotFound`] when an expense id does not exist.
//! - [`BudgetNotConfigured`] when a month has no budget. This is distinct
//!   from a budget of zero.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`ExpenseNotFound`]: EngineError::ExpenseNotFound
//!  [`BudgetNotConfigured`]: EngineError::BudgetNotConfigured
use sea_orm::DbErr;
use thiserror::Error;

use crate::Month;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid month: {0}")]
    InvalidMonth(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("expense {0} not found")]
    ExpenseNotFound(i64),
    #[error("no budget configured for {0}")]
    BudgetNotConfigured(Month),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidName(a), Self::InvalidName(b)) => a == b,
            (Self::InvalidMonth(a), Self::InvalidMonth(b)) => a == b,
            (Self::InvalidDate(a), Self::InvalidDate(b)) => a == b,
            (Self::ExpenseNotFound(a), Self::ExpenseNotFound(b)) => a == b,
            (Self::BudgetNotConfigured(a), Self::BudgetNotConfigured(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
