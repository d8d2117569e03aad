//! Expense records.
//!
//! An [`Expense`] is a single spending event. Expenses are created and
//! deleted, never edited in place.

use chrono::NaiveDate;
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, Money};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: Money,
    pub category: String,
    pub note: Option<String>,
}

/// Input for [`Engine::add_expense`](crate::Engine::add_expense).
///
/// The store assigns the id. Category and note are trimmed; a blank note is
/// dropped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub date: NaiveDate,
    pub amount: Money,
    pub category: String,
    pub note: Option<String>,
}

impl ExpenseDraft {
    pub fn new(date: NaiveDate, amount: Money, category: impl Into<String>) -> Self {
        Self {
            date,
            amount,
            category: category.into(),
            note: None,
        }
    }

    #[must_use]
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub date: Date,
    pub category: String,
    pub amount_minor: i64,
    pub note: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&ExpenseDraft> for ActiveModel {
    fn from(draft: &ExpenseDraft) -> Self {
        Self {
            id: ActiveValue::NotSet,
            date: ActiveValue::Set(draft.date),
            category: ActiveValue::Set(draft.category.clone()),
            amount_minor: ActiveValue::Set(draft.amount.minor()),
            note: ActiveValue::Set(draft.note.clone()),
        }
    }
}

impl TryFrom<Model> for Expense {
    type Error = EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        if model.amount_minor <= 0 {
            return Err(EngineError::InvalidAmount(format!(
                "stored expense {} has non-positive amount",
                model.id
            )));
        }
        Ok(Self {
            id: model.id,
            date: model.date,
            amount: Money::new(model.amount_minor),
            category: model.category,
            note: model.note,
        })
    }
}
