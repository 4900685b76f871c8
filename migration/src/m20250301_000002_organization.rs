//! Organization area: regional → center → sede hierarchy and user assignments.

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_security::User;

static FK_CENTER_REGIONAL_ID: &str = "fk-center-regional_id";
static FK_SEDE_CENTER_ID: &str = "fk-sede-center_id";
static FK_USER_SEDE_SEDE_ID: &str = "fk-user_sede-sede_id";
static FK_USER_SEDE_USER_ID: &str = "fk-user_sede-user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Regional::Table)
                    .if_not_exists()
                    .col(pk_auto(Regional::Id))
                    .col(string(Regional::Name))
                    .col(string(Regional::CodeRegional))
                    .col(string(Regional::Description))
                    .col(string(Regional::Address))
                    .col(boolean(Regional::Active))
                    .col(timestamp(Regional::CreateDate))
                    .col(timestamp_null(Regional::UpdateDate))
                    .col(timestamp_null(Regional::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Center::Table)
                    .if_not_exists()
                    .col(pk_auto(Center::Id))
                    .col(string(Center::Name))
                    .col(string(Center::CodeCenter))
                    .col(string(Center::Address))
                    .col(integer(Center::RegionalId))
                    .col(boolean(Center::Active))
                    .col(timestamp(Center::CreateDate))
                    .col(timestamp_null(Center::UpdateDate))
                    .col(timestamp_null(Center::DeleteDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_CENTER_REGIONAL_ID)
                            .from(Center::Table, Center::RegionalId)
                            .to(Regional::Table, Regional::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Sede::Table)
                    .if_not_exists()
                    .col(pk_auto(Sede::Id))
                    .col(string(Sede::Name))
                    .col(string(Sede::CodeSede))
                    .col(string(Sede::Address))
                    .col(string(Sede::PhoneSede))
                    .col(string(Sede::EmailContact))
                    .col(integer(Sede::CenterId))
                    .col(boolean(Sede::Active))
                    .col(timestamp(Sede::CreateDate))
                    .col(timestamp_null(Sede::UpdateDate))
                    .col(timestamp_null(Sede::DeleteDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SEDE_CENTER_ID)
                            .from(Sede::Table, Sede::CenterId)
                            .to(Center::Table, Center::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserSede::Table)
                    .if_not_exists()
                    .col(pk_auto(UserSede::Id))
                    .col(string(UserSede::StatusProcedure))
                    .col(integer(UserSede::UserId))
                    .col(integer(UserSede::SedeId))
                    .col(timestamp(UserSede::CreateDate))
                    .col(timestamp_null(UserSede::UpdateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_SEDE_SEDE_ID)
                            .from(UserSede::Table, UserSede::SedeId)
                            .to(Sede::Table, Sede::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_SEDE_USER_ID)
                            .from(UserSede::Table, UserSede::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserSede::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Sede::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Center::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Regional::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Regional {
    Table,
    Id,
    Name,
    CodeRegional,
    Description,
    Address,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum Center {
    Table,
    Id,
    Name,
    CodeCenter,
    Address,
    RegionalId,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum Sede {
    Table,
    Id,
    Name,
    CodeSede,
    Address,
    PhoneSede,
    EmailContact,
    CenterId,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum UserSede {
    Table,
    Id,
    StatusProcedure,
    UserId,
    SedeId,
    CreateDate,
    UpdateDate,
}
