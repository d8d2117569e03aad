//! Parsing of raw text typed at the interactive prompts.
//!
//! Every helper returns a message suitable for re-prompting on bad input.

use chrono::NaiveDate;
use engine::{Money, Month};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Empty input means `today`.
pub fn parse_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(today);
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| format!("'{trimmed}' is not a date, use YYYY-MM-DD."))
}

/// Empty input means `current`.
pub fn parse_month(raw: &str, current: Month) -> Result<Month, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(current);
    }
    trimmed.parse().map_err(|_| format!("'{trimmed}' is not a month, use YYYY-MM."))
}

/// Expense amounts must be a number greater than zero.
pub fn parse_expense_amount(raw: &str) -> Result<Money, String> {
    let amount = parse_amount(raw)?;
    if !amount.is_positive() {
        return Err("Amount must be greater than zero. Try again.".to_string());
    }
    Ok(amount)
}

/// Budgets may be zero but not negative.
pub fn parse_budget_amount(raw: &str) -> Result<Money, String> {
    let amount = parse_amount(raw)?;
    if amount.is_negative() {
        return Err("Amount cannot be negative. Try again.".to_string());
    }
    Ok(amount)
}

fn parse_amount(raw: &str) -> Result<Money, String> {
    raw.parse::<Money>()
        .map_err(|_| "Invalid input. Please enter a numeric value.".to_string())
}

pub fn parse_id(raw: &str) -> Result<i64, String> {
    raw.trim().parse().map_err(|_| "Invalid ID.".to_string())
}

pub fn parse_required(raw: &str, label: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(format!("{label} must not be empty."));
    }
    Ok(trimmed.to_string())
}
