//! Monthly budgets.
//!
//! At most one budget exists per [`Month`]; setting it again overwrites the
//! previous value. A month without a row has *no* budget, which callers must
//! keep apart from a budget of zero.

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, Money, Month};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budget {
    pub month: Month,
    pub amount: Money,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "budgets")]
pub struct Model {
    /// `YYYY-MM`
    #[sea_orm(primary_key, auto_increment = false)]
    pub month: String,
    pub amount_minor: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Budget> for ActiveModel {
    fn from(budget: &Budget) -> Self {
        Self {
            month: ActiveValue::Set(budget.month.key()),
            amount_minor: ActiveValue::Set(budget.amount.minor()),
        }
    }
}

impl TryFrom<Model> for Budget {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            month: model.month.parse()?,
            amount: Money::new(model.amount_minor),
        })
    }
}
