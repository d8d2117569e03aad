//! One-shot subcommands. Each writes its report to `out` and returns.

use std::io::Write;

use chrono::NaiveDate;
use engine::{Engine, ExpenseDraft, ExpenseListFilter, Month, MonthSummary};
use serde::Serialize;

use crate::{
    cli::{AddArgs, Budget, BudgetCommand, Command, ListArgs, MonthArgs, SummaryArgs},
    error::Result,
    render::{self, Theme},
};

/// Shape of `summary --json`.
#[derive(Serialize)]
struct SummaryReport<'a> {
    #[serde(flatten)]
    summary: &'a MonthSummary,
    remaining: Option<engine::Money>,
    budget_status: engine::BudgetStatus,
}

/// Runs every subcommand except the interactive menu.
pub async fn run<W: Write>(
    engine: &Engine,
    command: Command,
    theme: &Theme,
    today: NaiveDate,
    out: &mut W,
) -> Result<()> {
    let current = Month::of(today);
    let month_or_current = |args: MonthArgs| args.month.unwrap_or(current);

    match command {
        Command::Add(args) => add(engine, args, theme, today, out).await,
        Command::List(args) => list(engine, args, theme, out).await,
        Command::Delete(args) => {
            let expense = engine.delete_expense(args.id).await?;
            writeln!(
                out,
                "Deleted expense {} ({} {} on {}).",
                expense.id,
                theme.amount(expense.amount),
                expense.category,
                expense.date
            )?;
            Ok(())
        }
        Command::Budget(Budget { command }) => match command {
            BudgetCommand::Set(args) => {
                let month = month_or_current(args.month);
                let budget = engine.set_budget(month, args.amount).await?;
                write!(out, "{}", render::budget_line(month, Some(&budget), theme))?;
                Ok(())
            }
            BudgetCommand::Show(args) => {
                let month = month_or_current(args);
                let budget = engine.budget(month).await?;
                write!(out, "{}", render::budget_line(month, budget.as_ref(), theme))?;
                Ok(())
            }
            BudgetCommand::List => {
                let budgets = engine.budgets().await?;
                write!(out, "{}", render::budgets_table(&budgets, theme))?;
                Ok(())
            }
            BudgetCommand::Clear(args) => {
                let month = month_or_current(args);
                engine.clear_budget(month).await?;
                writeln!(out, "Budget for {month} cleared.")?;
                Ok(())
            }
        },
        Command::Summary(SummaryArgs { month, json }) => {
            let month = month_or_current(month);
            let summary = engine.month_summary(month).await?;
            if json {
                let report = SummaryReport {
                    summary: &summary,
                    remaining: summary.remaining(),
                    budget_status: summary.status(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
            } else {
                write!(out, "{}", render::month_summary(&summary, theme))?;
            }
            Ok(())
        }
        Command::Categories(args) => {
            let month = month_or_current(args);
            let categories = engine.category_breakdown(month).await?;
            write!(out, "{}", render::categories_table(month, &categories, theme))?;
            Ok(())
        }
        // Dispatched by `main` before reaching here.
        Command::Menu => Ok(()),
    }
}

async fn add<W: Write>(
    engine: &Engine,
    args: AddArgs,
    theme: &Theme,
    today: NaiveDate,
    out: &mut W,
) -> Result<()> {
    let mut draft = ExpenseDraft::new(args.date.unwrap_or(today), args.amount, args.category);
    draft.note = args.note;
    let expense = engine.add_expense(draft).await?;
    writeln!(
        out,
        "Added expense {}: {} {} on {}.",
        expense.id,
        theme.amount(expense.amount),
        expense.category,
        expense.date
    )?;
    Ok(())
}

async fn list<W: Write>(engine: &Engine, args: ListArgs, theme: &Theme, out: &mut W) -> Result<()> {
    let filter = ExpenseListFilter {
        month: args.month,
        category: args.category,
    };
    let expenses = engine.list_expenses(&filter).await?;
    write!(out, "{}", render::expenses_table(&expenses, theme))?;
    Ok(())
}
