//! Storage and arithmetic core of the Tally expense tracker.
//!
//! [`Engine`] is the only entry point: it records [`Expense`]s, stores one
//! [`Budget`] per [`Month`] and computes [`MonthSummary`]s. All amounts are
//! [`Money`], an exact integer number of cents.

pub use budgets::Budget;
pub use error::EngineError;
pub use expenses::{Expense, ExpenseDraft};
pub use money::Money;
pub use month::Month;
pub use ops::{Engine, EngineBuilder, ExpenseListFilter};
pub use summary::{BudgetStatus, MonthSummary};

mod budgets;
mod error;
mod expenses;
mod money;
mod month;
mod ops;
mod summary;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
