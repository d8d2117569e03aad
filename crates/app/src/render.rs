//! Plain-text rendering of expenses, budgets and summaries.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use crossterm::style::Stylize;
use engine::{Budget, BudgetStatus, Expense, Money, Month, MonthSummary};

use crate::settings::Settings;

/// How amounts and status lines are printed.
#[derive(Clone, Debug)]
pub struct Theme {
    pub currency: String,
    pub color: bool,
}

impl Theme {
    pub fn amount(&self, amount: Money) -> String {
        format!("{}{}", self.currency, amount)
    }

    fn good(&self, text: String) -> String {
        if self.color {
            text.green().to_string()
        } else {
            text
        }
    }

    fn bad(&self, text: String) -> String {
        if self.color {
            text.red().bold().to_string()
        } else {
            text
        }
    }

    fn warn(&self, text: String) -> String {
        if self.color {
            text.yellow().to_string()
        } else {
            text
        }
    }
}

impl Theme {
    /// Colour needs both the setting and an interactive terminal on stdout.
    pub fn for_output(settings: &Settings, is_terminal: bool) -> Self {
        Self {
            currency: settings.currency.clone(),
            color: settings.color && is_terminal,
        }
    }
}

pub fn expenses_table(expenses: &[Expense], theme: &Theme) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<5} {:<12} {:<15} {:>12}  {}",
        "ID", "Date", "Category", "Amount", "Note"
    );
    let _ = writeln!(out, "{}", "-".repeat(75));
    for expense in expenses {
        let _ = writeln!(
            out,
            "{:<5} {:<12} {:<15} {:>12}  {}",
            expense.id,
            expense.date.to_string(),
            expense.category,
            theme.amount(expense.amount),
            expense.note.as_deref().unwrap_or("")
        );
    }
    out
}

pub fn categories_table(
    month: Month,
    categories: &BTreeMap<String, Money>,
    theme: &Theme,
) -> String {
    if categories.is_empty() {
        return format!("No expenses found for {month}.\n");
    }

    let mut out = String::new();
    let _ = writeln!(out, "Month: {month}");
    let _ = writeln!(out, "{:<15} {:>14}", "Category", "Total Spent");
    let _ = writeln!(out, "{}", "-".repeat(30));
    for (category, total) in categories {
        let _ = writeln!(out, "{:<15} {:>14}", category, theme.amount(*total));
    }
    out
}

/// The one-line verdict printed under a month summary.
pub fn status_line(status: BudgetStatus, theme: &Theme) -> String {
    match status {
        BudgetStatus::NotConfigured => theme.warn("No budget set for this month.".to_string()),
        BudgetStatus::Within { remaining } => theme.good(format!(
            "You are within budget. Remaining: {}",
            theme.amount(remaining)
        )),
        BudgetStatus::Exceeded { by } => {
            theme.bad(format!("Budget exceeded by: {}", theme.amount(by)))
        }
    }
}

pub fn month_summary(summary: &MonthSummary, theme: &Theme) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Month: {}", summary.month);
    let _ = writeln!(out, "Total expenses this month: {}", theme.amount(summary.total));
    if let Some(budget) = summary.budget {
        let _ = writeln!(out, "Budget for this month:     {}", theme.amount(budget));
    }
    let _ = writeln!(out, "{}", status_line(summary.status(), theme));
    if !summary.categories.is_empty() {
        out.push('\n');
        out.push_str(&categories_table(summary.month, &summary.categories, theme));
    }
    out
}

pub fn budget_line(month: Month, budget: Option<&Budget>, theme: &Theme) -> String {
    match budget {
        Some(budget) => format!("Budget for {month}: {}\n", theme.amount(budget.amount)),
        None => format!("No budget set for {month}.\n"),
    }
}

pub fn budgets_table(budgets: &[Budget], theme: &Theme) -> String {
    if budgets.is_empty() {
        return "No budgets set.\n".to_string();
    }
    let mut out = String::new();
    let _ = writeln!(out, "{:<8} {:>14}", "Month", "Budget");
    let _ = writeln!(out, "{}", "-".repeat(23));
    for budget in budgets {
        let _ = writeln!(out, "{:<8} {:>14}", budget.month, theme.amount(budget.amount));
    }
    out
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn theme() -> Theme {
        Theme {
            currency: "$".to_string(),
            color: false,
        }
    }

    fn may() -> Month {
        Month::new(2024, 5).unwrap()
    }

    fn summary(budget: Option<i64>) -> MonthSummary {
        let mut categories = BTreeMap::new();
        categories.insert("Food".to_string(), Money::new(12000));
        categories.insert("Transport".to_string(), Money::new(8050));
        MonthSummary {
            month: may(),
            total: Money::new(20050),
            budget: budget.map(Money::new),
            categories,
        }
    }

    #[test]
    fn expense_rows_show_every_field() {
        let expenses = vec![Expense {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
            amount: Money::new(12000),
            category: "Food".to_string(),
            note: Some("groceries".to_string()),
        }];
        let table = expenses_table(&expenses, &theme());
        let row = table.lines().nth(2).unwrap();
        assert!(row.starts_with("7     2024-05-04   Food"));
        assert!(row.contains("$120.00"));
        assert!(row.ends_with("groceries"));
    }

    #[test]
    fn empty_tables_say_so() {
        assert_eq!(expenses_table(&[], &theme()), "No expenses found.\n");
        assert!(categories_table(may(), &BTreeMap::new(), &theme()).contains("No expenses"));
        assert_eq!(budgets_table(&[], &theme()), "No budgets set.\n");
    }

    #[test]
    fn summary_within_budget() {
        let text = month_summary(&summary(Some(50000)), &theme());
        assert!(text.contains("Total expenses this month: $200.50"));
        assert!(text.contains("Budget for this month:     $500.00"));
        assert!(text.contains("Remaining: $299.50"));
        assert!(text.contains("Transport"));
    }

    #[test]
    fn summary_without_or_over_budget() {
        let text = month_summary(&summary(None), &theme());
        assert!(text.contains("No budget set"));
        assert!(!text.contains("Budget for this month"));

        let text = month_summary(&summary(Some(20000)), &theme());
        assert!(text.contains("Budget exceeded by: $0.50"));
    }

    #[test]
    fn color_is_off_when_not_writing_to_a_terminal() {
        let settings = Settings {
            currency: "$".to_string(),
            ..Settings::default()
        };
        assert!(settings.color);

        let piped = Theme::for_output(&settings, false);
        assert!(!piped.color);
        let line = status_line(BudgetStatus::Exceeded { by: Money::new(1) }, &piped);
        assert_eq!(line, "Budget exceeded by: $0.01");

        assert!(Theme::for_output(&settings, true).color);
        let no_color = Settings {
            color: false,
            ..settings
        };
        assert!(!Theme::for_output(&no_color, true).color);
    }

    #[test]
    fn color_wraps_status_in_escape_codes() {
        let colored = Theme {
            color: true,
            ..theme()
        };
        let line = status_line(BudgetStatus::Exceeded { by: Money::new(1) }, &colored);
        assert!(line.contains('\u{1b}'));
        assert!(line.contains("$0.01"));
    }
}
