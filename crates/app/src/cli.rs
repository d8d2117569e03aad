use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use engine::{Money, Month};

#[derive(Parser, Debug)]
#[command(name = "tally", version)]
#[command(about = "Record daily expenses and track them against a monthly budget")]
pub struct Cli {
    /// Optional config file path (TOML).
    #[arg(long, global = true)]
    pub config: Option<String>,
    /// Database connection string, e.g. `sqlite:./tally.db?mode=rwc`.
    #[arg(long, global = true)]
    pub database_url: Option<String>,
    /// Currency symbol printed in front of amounts.
    #[arg(long, global = true)]
    pub currency: Option<String>,
    /// Log level for diagnostics written to stderr.
    #[arg(long, global = true)]
    pub log_level: Option<String>,
    /// Print budget status without colours.
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Without a subcommand the interactive menu starts.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Record an expense.
    Add(AddArgs),
    /// List expenses, oldest first.
    List(ListArgs),
    /// Delete an expense by id.
    Delete(DeleteArgs),
    /// Set, show, list or clear monthly budgets.
    Budget(Budget),
    /// Month total, budget status and per-category totals.
    Summary(SummaryArgs),
    /// Per-category totals for a month.
    Categories(MonthArgs),
    /// Interactive text menu.
    Menu,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent, e.g. `12.50`.
    #[arg(long, allow_negative_numbers = true)]
    pub amount: Money,
    /// Free-form label such as Food, Travel, Fees.
    #[arg(long)]
    pub category: String,
    /// Day of the expense (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<NaiveDate>,
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Only expenses in this month (YYYY-MM).
    #[arg(long)]
    pub month: Option<Month>,
    /// Only expenses with exactly this category.
    #[arg(long)]
    pub category: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteArgs {
    pub id: i64,
}

#[derive(Args, Debug)]
pub struct MonthArgs {
    /// Month to inspect (YYYY-MM); defaults to the current month.
    #[arg(long)]
    pub month: Option<Month>,
}

#[derive(Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub month: MonthArgs,
    /// Print the summary as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct Budget {
    #[command(subcommand)]
    pub command: BudgetCommand,
}

#[derive(Subcommand, Debug)]
pub enum BudgetCommand {
    /// Set or replace the budget of a month.
    Set(BudgetSetArgs),
    /// Show the budget of a month.
    Show(MonthArgs),
    /// List every stored budget.
    List,
    /// Remove the budget of a month.
    Clear(MonthArgs),
}

#[derive(Args, Debug)]
pub struct BudgetSetArgs {
    #[arg(allow_negative_numbers = true)]
    pub amount: Money,
    #[command(flatten)]
    pub month: MonthArgs,
}
