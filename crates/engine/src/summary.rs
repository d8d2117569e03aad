//! Aggregated view of one month: spending, budget and per-category totals.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Money, Month};

/// Where a month stands against its budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BudgetStatus {
    /// No budget stored for the month.
    NotConfigured,
    /// Spending is at or below the budget.
    Within { remaining: Money },
    /// Spending is above the budget by `by` (always positive).
    Exceeded { by: Money },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    pub month: Month,
    pub total: Money,
    pub budget: Option<Money>,
    /// Case-sensitive category label to summed amount.
    pub categories: BTreeMap<String, Money>,
}

impl MonthSummary {
    /// Budget minus total, `None` without a budget.
    #[must_use]
    pub fn remaining(&self) -> Option<Money> {
        self.budget.and_then(|budget| budget.checked_sub(self.total))
    }

    #[must_use]
    pub fn status(&self) -> BudgetStatus {
        match self.remaining() {
            None => BudgetStatus::NotConfigured,
            Some(remaining) if remaining.is_negative() => BudgetStatus::Exceeded {
                by: remaining.abs(),
            },
            Some(remaining) => BudgetStatus::Within { remaining },
        }
    }
}
