//! Interactive numbered menu.
//!
//! Reads one line per prompt from `input`. Bad input re-prompts, engine
//! failures are printed and the menu keeps going, end of input exits.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use engine::{Engine, ExpenseDraft, ExpenseListFilter, Month};

use crate::{
    error::{AppError, Result},
    input,
    render::{self, Theme},
};

const MENU: &str = "\
===== Expense Tracker Menu =====
1. Add Expense
2. View All Expenses
3. Set/Update Monthly Budget
4. View Monthly Summary
5. View Category-wise Summary
6. Delete an Expense
0. Exit";

enum Flow {
    Continue,
    Exit,
}

pub struct Menu<'a, R, W> {
    engine: &'a Engine,
    theme: &'a Theme,
    today: NaiveDate,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(engine: &'a Engine, theme: &'a Theme, today: NaiveDate, input: R, out: W) -> Self {
        Self {
            engine,
            theme,
            today,
            input,
            out,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        loop {
            writeln!(self.out, "\n{MENU}")?;
            let Some(choice) = self.ask("Enter your choice: ")? else {
                return Ok(());
            };

            match self.dispatch(choice.trim()).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(AppError::Engine(err)) => {
                    tracing::warn!("menu action failed: {err}");
                    writeln!(self.out, "Error: {err}")?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn dispatch(&mut self, choice: &str) -> Result<Flow> {
        match choice {
            "1" => self.add_expense().await,
            "2" => {
                let expenses = self
                    .engine
                    .list_expenses(&ExpenseListFilter::default())
                    .await?;
                write!(self.out, "{}", render::expenses_table(&expenses, self.theme))?;
                Ok(Flow::Continue)
            }
            "3" => self.set_budget().await,
            "4" => {
                let Some(month) = self.ask_month()? else {
                    return Ok(Flow::Exit);
                };
                let summary = self.engine.month_summary(month).await?;
                write!(self.out, "{}", render::month_summary(&summary, self.theme))?;
                Ok(Flow::Continue)
            }
            "5" => {
                let Some(month) = self.ask_month()? else {
                    return Ok(Flow::Exit);
                };
                let categories = self.engine.category_breakdown(month).await?;
                write!(
                    self.out,
                    "{}",
                    render::categories_table(month, &categories, self.theme)
                )?;
                Ok(Flow::Continue)
            }
            "6" => {
                let expenses = self
                    .engine
                    .list_expenses(&ExpenseListFilter::default())
                    .await?;
                write!(self.out, "{}", render::expenses_table(&expenses, self.theme))?;
                let Some(id) = self.ask_until("Enter expense ID to delete: ", input::parse_id)?
                else {
                    return Ok(Flow::Exit);
                };
                let expense = self.engine.delete_expense(id).await?;
                writeln!(self.out, "Expense {} deleted.", expense.id)?;
                Ok(Flow::Continue)
            }
            "0" => {
                writeln!(self.out, "Goodbye!")?;
                Ok(Flow::Exit)
            }
            _ => {
                writeln!(self.out, "Invalid choice. Please select a valid option.")?;
                Ok(Flow::Continue)
            }
        }
    }

    async fn add_expense(&mut self) -> Result<Flow> {
        let today = self.today;
        let Some(date) = self.ask_until("Enter date (YYYY-MM-DD) or leave blank for today: ", |raw| {
            input::parse_date(raw, today)
        })?
        else {
            return Ok(Flow::Exit);
        };
        let Some(amount) = self.ask_until("Enter amount: ", input::parse_expense_amount)? else {
            return Ok(Flow::Exit);
        };
        let Some(category) = self.ask_until("Enter category (e.g., Food, Travel, Fees): ", |raw| {
            input::parse_required(raw, "Category")
        })?
        else {
            return Ok(Flow::Exit);
        };
        let Some(note) = self.ask("Enter note (optional): ")? else {
            return Ok(Flow::Exit);
        };

        let mut draft = ExpenseDraft::new(date, amount, category);
        draft.note = Some(note);
        let expense = self.engine.add_expense(draft).await?;
        writeln!(self.out, "Expense added with ID {}.", expense.id)?;
        Ok(Flow::Continue)
    }

    async fn set_budget(&mut self) -> Result<Flow> {
        let Some(month) = self.ask_month()? else {
            return Ok(Flow::Exit);
        };
        let Some(amount) = self.ask_until("Enter budget amount: ", input::parse_budget_amount)?
        else {
            return Ok(Flow::Exit);
        };
        let budget = self.engine.set_budget(month, amount).await?;
        write!(
            self.out,
            "{}",
            render::budget_line(month, Some(&budget), self.theme)
        )?;
        Ok(Flow::Continue)
    }

    fn ask_month(&mut self) -> Result<Option<Month>> {
        let current = Month::of(self.today);
        self.ask_until("Enter month (YYYY-MM) or leave blank for current: ", |raw| {
            input::parse_month(raw, current)
        })
    }

    /// Re-prompts until `parse` accepts the line. `None` on end of input.
    fn ask_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> std::result::Result<T, String>,
    ) -> Result<Option<T>> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse(&line) {
                Ok(value) => return Ok(Some(value)),
                Err(message) => writeln!(self.out, "{message}")?,
            }
        }
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
