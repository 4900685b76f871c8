//! Standalone audit table.

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChangeLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ChangeLog::Id))
                    .col(string(ChangeLog::TableName))
                    .col(integer(ChangeLog::IdTable))
                    .col(text(ChangeLog::OldValues))
                    .col(text(ChangeLog::NewValues))
                    .col(string(ChangeLog::Action))
                    .col(string(ChangeLog::UserName))
                    .col(boolean(ChangeLog::Active))
                    .col(timestamp(ChangeLog::CreateDate))
                    .col(timestamp_null(ChangeLog::UpdateDate))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChangeLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ChangeLog {
    Table,
    Id,
    TableName,
    IdTable,
    OldValues,
    NewValues,
    Action,
    UserName,
    Active,
    CreateDate,
    UpdateDate,
}
