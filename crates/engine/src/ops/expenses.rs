use sea_orm::{QueryFilter, QueryOrder, TransactionTrait, prelude::*};

use crate::{
    EngineError, Expense, ExpenseDraft, Month, ResultEngine, expenses,
    util::{normalize_optional_text, validate_expense_draft},
};

use super::{Engine, with_tx};

/// Filters for listing expenses. The default lists everything.
#[derive(Clone, Debug, Default)]
pub struct ExpenseListFilter {
    /// Only expenses dated inside this month.
    pub month: Option<Month>,
    /// Only expenses with this category label, compared case-sensitively after
    /// trimming.
    pub category: Option<String>,
}

impl ExpenseListFilter {
    #[must_use]
    pub fn month(month: Month) -> Self {
        Self {
            month: Some(month),
            category: None,
        }
    }
}

trait ApplyExpenseFilters: QueryFilter + Sized {
    fn apply_expense_filters(self, filter: &ExpenseListFilter) -> Self;
}

impl<T> ApplyExpenseFilters for T
where
    T: QueryFilter + Sized,
{
    fn apply_expense_filters(mut self, filter: &ExpenseListFilter) -> Self {
        if let Some(month) = filter.month {
            self = self.filter(expenses::Column::Date.gte(month.first_day()));
            if let Some(next) = month.next() {
                self = self.filter(expenses::Column::Date.lt(next.first_day()));
            }
        }
        // Stored categories are trimmed; a blank filter matches everything.
        if let Some(category) = normalize_optional_text(filter.category.as_deref()) {
            self = self.filter(expenses::Column::Category.eq(category));
        }
        self
    }
}

/// Loads expenses matching `filter`, oldest first (ties broken by id).
pub(super) async fn find_expenses<C>(
    db: &C,
    filter: &ExpenseListFilter,
) -> ResultEngine<Vec<Expense>>
where
    C: ConnectionTrait,
{
    let models = expenses::Entity::find()
        .apply_expense_filters(filter)
        .order_by_asc(expenses::Column::Date)
        .order_by_asc(expenses::Column::Id)
        .all(db)
        .await?;

    models.into_iter().map(Expense::try_from).collect()
}

impl Engine {
    /// Records a new expense and returns it with its assigned id.
    ///
    /// Fails with [`EngineError::InvalidAmount`] when the amount is not
    /// strictly positive and [`EngineError::InvalidName`] when the category is
    /// blank. Nothing is written in either case.
    pub async fn add_expense(&self, draft: ExpenseDraft) -> ResultEngine<Expense> {
        let draft = validate_expense_draft(draft)?;
        let model = expenses::ActiveModel::from(&draft)
            .insert(&self.database)
            .await?;
        let expense = Expense::try_from(model)?;

        tracing::debug!(
            id = expense.id,
            date = %expense.date,
            amount = %expense.amount,
            category = %expense.category,
            "expense added"
        );
        Ok(expense)
    }

    /// Return a single expense.
    pub async fn expense(&self, id: i64) -> ResultEngine<Expense> {
        expenses::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .ok_or(EngineError::ExpenseNotFound(id))
            .and_then(Expense::try_from)
    }

    /// Lists expenses ordered by date, then id.
    pub async fn list_expenses(&self, filter: &ExpenseListFilter) -> ResultEngine<Vec<Expense>> {
        find_expenses(&self.database, filter).await
    }

    /// Deletes an expense and returns the removed record.
    ///
    /// A missing id yields [`EngineError::ExpenseNotFound`]; the store is left
    /// untouched.
    pub async fn delete_expense(&self, id: i64) -> ResultEngine<Expense> {
        with_tx!(self, |db_tx| {
            let model = expenses::Entity::find_by_id(id)
                .one(&db_tx)
                .await?
                .ok_or(EngineError::ExpenseNotFound(id))?;
            let expense = Expense::try_from(model)?;

            expenses::Entity::delete_by_id(id).exec(&db_tx).await?;

            tracing::debug!(id, amount = %expense.amount, "expense deleted");
            Ok(expense)
        })
    }
}
