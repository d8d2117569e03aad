use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum Expenses {
    Table,
    Date,
    Category,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-date")
                    .table(Expenses::Table)
                    .col(Expenses::Date)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-expenses-date-category")
                    .table(Expenses::Table)
                    .col(Expenses::Date)
                    .col(Expenses::Category)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx-expenses-date-category")
                    .table(Expenses::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx-expenses-date")
                    .table(Expenses::Table)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }
}
