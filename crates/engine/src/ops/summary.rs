use std::collections::BTreeMap;

use sea_orm::TransactionTrait;

use crate::{EngineError, Expense, Money, Month, MonthSummary, ResultEngine};

use super::{
    Engine,
    budgets::find_budget,
    expenses::{ExpenseListFilter, find_expenses},
    with_tx,
};

/// Groups expenses by exact category label and sums each group.
fn breakdown(expenses: &[Expense]) -> ResultEngine<BTreeMap<String, Money>> {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();
    for expense in expenses {
        let slot = totals.entry(expense.category.clone()).or_default();
        *slot = slot.checked_add(expense.amount).ok_or_else(|| {
            EngineError::InvalidAmount(format!("total for '{}' too large", expense.category))
        })?;
    }
    Ok(totals)
}

fn total(expenses: &[Expense]) -> ResultEngine<Money> {
    Money::try_sum(expenses.iter().map(|expense| expense.amount))
}

fn remaining(budget: Money, total: Money) -> ResultEngine<Money> {
    budget
        .checked_sub(total)
        .ok_or_else(|| EngineError::InvalidAmount("remaining budget out of range".to_string()))
}

impl Engine {
    /// Sum of all expense amounts dated inside `month`.
    ///
    /// A month without expenses totals zero.
    pub async fn monthly_total(&self, month: Month) -> ResultEngine<Money> {
        let expenses = find_expenses(&self.database, &ExpenseListFilter::month(month)).await?;
        total(&expenses)
    }

    /// Budget for `month` minus [`monthly_total`](Self::monthly_total).
    ///
    /// Negative when the month is over budget. Without a stored budget this
    /// fails with [`EngineError::BudgetNotConfigured`] instead of assuming
    /// zero.
    pub async fn remaining_budget(&self, month: Month) -> ResultEngine<Money> {
        with_tx!(self, |db_tx| {
            let budget = find_budget(&db_tx, month)
                .await?
                .ok_or(EngineError::BudgetNotConfigured(month))?;
            let expenses = find_expenses(&db_tx, &ExpenseListFilter::month(month)).await?;
            remaining(budget.amount, total(&expenses)?)
        })
    }

    /// Per-category totals for `month`, grouping labels case-sensitively.
    ///
    /// The group totals always add up to [`monthly_total`](Self::monthly_total).
    pub async fn category_breakdown(&self, month: Month) -> ResultEngine<BTreeMap<String, Money>> {
        let expenses = find_expenses(&self.database, &ExpenseListFilter::month(month)).await?;
        breakdown(&expenses)
    }

    /// Total, budget and category breakdown of `month` read in one transaction.
    pub async fn month_summary(&self, month: Month) -> ResultEngine<MonthSummary> {
        with_tx!(self, |db_tx| {
            let budget = find_budget(&db_tx, month).await?;
            let expenses = find_expenses(&db_tx, &ExpenseListFilter::month(month)).await?;
            Ok(MonthSummary {
                month,
                total: total(&expenses)?,
                budget: budget.map(|b| b.amount),
                categories: breakdown(&expenses)?,
            })
        })
    }
}
