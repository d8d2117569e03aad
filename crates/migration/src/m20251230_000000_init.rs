//! Initial schema migration.
//!
//! Creates the two tables the tracker needs:
//!
//! - `expenses`: one row per recorded spending, amounts in minor units
//! - `budgets`: at most one spending ceiling per calendar month (`YYYY-MM`)

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Expenses {
    Table,
    Id,
    Date,
    Category,
    AmountMinor,
    Note,
}

#[derive(Iden)]
enum Budgets {
    Table,
    Month,
    AmountMinor,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Expenses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Expenses::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Expenses::Date).date().not_null())
                    .col(ColumnDef::new(Expenses::Category).string().not_null())
                    .col(
                        ColumnDef::new(Expenses::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Expenses::Note).string())
                    .to_owned(),
            )
            .await?;

        // The month key is the primary key: setting a budget twice for the
        // same month overwrites instead of appending.
        manager
            .create_table(
                Table::create()
                    .table(Budgets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Budgets::Month)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Budgets::AmountMinor)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Budgets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Expenses::Table).to_owned())
            .await?;
        Ok(())
    }
}
