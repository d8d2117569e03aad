//! Internal helpers for input validation.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every write path enforces the same invariants.

use crate::{EngineError, ExpenseDraft, Money, ResultEngine};

/// Expense amounts must be strictly positive.
pub(crate) fn require_positive(amount: Money) -> ResultEngine<Money> {
    if !amount.is_positive() {
        return Err(EngineError::InvalidAmount(format!(
            "expense amount must be > 0, got {amount}"
        )));
    }
    Ok(amount)
}

/// Budgets may be zero (a deliberate "spend nothing" month) but not negative.
pub(crate) fn require_non_negative(amount: Money) -> ResultEngine<Money> {
    if amount.is_negative() {
        return Err(EngineError::InvalidAmount(format!(
            "budget must be >= 0, got {amount}"
        )));
    }
    Ok(amount)
}

pub(crate) fn normalize_category(value: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidName(
            "category must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn normalize_optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

/// Validate and normalize a draft before it reaches the database.
pub(crate) fn validate_expense_draft(draft: ExpenseDraft) -> ResultEngine<ExpenseDraft> {
    Ok(ExpenseDraft {
        date: draft.date,
        amount: require_positive(draft.amount)?,
        category: normalize_category(&draft.category)?,
        note: normalize_optional_text(draft.note.as_deref()),
    })
}
