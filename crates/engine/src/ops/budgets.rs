use sea_orm::{QueryOrder, prelude::*, sea_query::OnConflict};

use crate::{Budget, EngineError, Money, Month, ResultEngine, budgets, util::require_non_negative};

use super::Engine;

/// Loads the budget stored for `month`, if any.
pub(super) async fn find_budget<C>(db: &C, month: Month) -> ResultEngine<Option<Budget>>
where
    C: ConnectionTrait,
{
    budgets::Entity::find_by_id(month.key())
        .one(db)
        .await?
        .map(Budget::try_from)
        .transpose()
}

impl Engine {
    /// Sets the budget for `month`, replacing any previous value.
    ///
    /// A zero budget is valid; negative amounts are rejected with
    /// [`EngineError::InvalidAmount`].
    pub async fn set_budget(&self, month: Month, amount: Money) -> ResultEngine<Budget> {
        let budget = Budget {
            month,
            amount: require_non_negative(amount)?,
        };

        budgets::Entity::insert(budgets::ActiveModel::from(&budget))
            .on_conflict(
                OnConflict::column(budgets::Column::Month)
                    .update_column(budgets::Column::AmountMinor)
                    .to_owned(),
            )
            .exec_without_returning(&self.database)
            .await?;

        tracing::debug!(%month, amount = %budget.amount, "budget set");
        Ok(budget)
    }

    /// Return the budget for `month`, `None` when none was set.
    pub async fn budget(&self, month: Month) -> ResultEngine<Option<Budget>> {
        find_budget(&self.database, month).await
    }

    /// Every stored budget, oldest month first.
    pub async fn budgets(&self) -> ResultEngine<Vec<Budget>> {
        budgets::Entity::find()
            .order_by_asc(budgets::Column::Month)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Budget::try_from)
            .collect()
    }

    /// Removes the budget for `month`.
    ///
    /// Fails with [`EngineError::BudgetNotConfigured`] if there is nothing to
    /// remove.
    pub async fn clear_budget(&self, month: Month) -> ResultEngine<()> {
        let result = budgets::Entity::delete_by_id(month.key())
            .exec(&self.database)
            .await?;
        if result.rows_affected == 0 {
            return Err(EngineError::BudgetNotConfigured(month));
        }

        tracing::debug!(%month, "budget cleared");
        Ok(())
    }
}
