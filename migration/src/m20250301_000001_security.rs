//! Security area: people, user accounts, roles, forms and modules.

use sea_orm_migration::{prelude::*, schema::*};

static FK_USER_PERSON_ID: &str = "fk-user-person_id";
static FK_USER_ROL_ROL_ID: &str = "fk-user_rol-rol_id";
static FK_USER_ROL_USER_ID: &str = "fk-user_rol-user_id";
static FK_ROL_FORM_FORM_ID: &str = "fk-rol_form-form_id";
static FK_ROL_FORM_ROL_ID: &str = "fk-rol_form-rol_id";
static FK_FORM_MODULE_FORM_ID: &str = "fk-form_module-form_id";
static FK_FORM_MODULE_MODULE_ID: &str = "fk-form_module-module_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Person::Table)
                    .if_not_exists()
                    .col(pk_auto(Person::Id))
                    .col(string(Person::FirstName))
                    .col(string_null(Person::SecondName))
                    .col(string(Person::FirstLastName))
                    .col(string_null(Person::SecondLastName))
                    .col(string(Person::PhoneNumber))
                    .col(string(Person::Email))
                    .col(string(Person::TypeIdentification))
                    .col(string(Person::NumberIdentification))
                    .col(string_null(Person::Signing))
                    .col(boolean(Person::Active))
                    .col(timestamp(Person::CreateDate))
                    .col(timestamp_null(Person::UpdateDate))
                    .col(timestamp_null(Person::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string(User::Username))
                    .col(string(User::Email))
                    .col(string(User::Password))
                    .col(integer_uniq(User::PersonId))
                    .col(boolean(User::Active))
                    .col(timestamp(User::CreateDate))
                    .col(timestamp_null(User::UpdateDate))
                    .col(timestamp_null(User::DeleteDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PERSON_ID)
                            .from(User::Table, User::PersonId)
                            .to(Person::Table, Person::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Rol::Table)
                    .if_not_exists()
                    .col(pk_auto(Rol::Id))
                    .col(string(Rol::TypeRol))
                    .col(string(Rol::Description))
                    .col(boolean(Rol::Active))
                    .col(timestamp(Rol::CreateDate))
                    .col(timestamp_null(Rol::UpdateDate))
                    .col(timestamp_null(Rol::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserRol::Table)
                    .if_not_exists()
                    .col(pk_auto(UserRol::Id))
                    .col(integer(UserRol::UserId))
                    .col(integer(UserRol::RolId))
                    .col(boolean(UserRol::Active))
                    .col(timestamp(UserRol::CreateDate))
                    .col(timestamp_null(UserRol::UpdateDate))
                    .col(timestamp_null(UserRol::DeleteDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_ROL_ROL_ID)
                            .from(UserRol::Table, UserRol::RolId)
                            .to(Rol::Table, Rol::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_ROL_USER_ID)
                            .from(UserRol::Table, UserRol::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Form::Table)
                    .if_not_exists()
                    .col(pk_auto(Form::Id))
                    .col(string(Form::Name))
                    .col(string(Form::Description))
                    .col(string(Form::Cuestion))
                    .col(string(Form::TypeCuestion))
                    .col(string(Form::Answer))
                    .col(boolean(Form::Active))
                    .col(timestamp(Form::CreateDate))
                    .col(timestamp_null(Form::UpdateDate))
                    .col(timestamp_null(Form::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RolForm::Table)
                    .if_not_exists()
                    .col(pk_auto(RolForm::Id))
                    .col(string(RolForm::Permission))
                    .col(integer(RolForm::RolId))
                    .col(integer(RolForm::FormId))
                    .col(timestamp(RolForm::CreateDate))
                    .col(timestamp_null(RolForm::UpdateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROL_FORM_FORM_ID)
                            .from(RolForm::Table, RolForm::FormId)
                            .to(Form::Table, Form::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROL_FORM_ROL_ID)
                            .from(RolForm::Table, RolForm::RolId)
                            .to(Rol::Table, Rol::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Module::Table)
                    .if_not_exists()
                    .col(pk_auto(Module::Id))
                    .col(string(Module::Name))
                    .col(string(Module::Description))
                    .col(boolean(Module::Active))
                    .col(timestamp(Module::CreateDate))
                    .col(timestamp_null(Module::UpdateDate))
                    .col(timestamp_null(Module::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(FormModule::Table)
                    .if_not_exists()
                    .col(pk_auto(FormModule::Id))
                    .col(string(FormModule::StatusProcedure))
                    .col(integer(FormModule::FormId))
                    .col(integer(FormModule::ModuleId))
                    .col(timestamp(FormModule::CreateDate))
                    .col(timestamp_null(FormModule::UpdateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FORM_MODULE_FORM_ID)
                            .from(FormModule::Table, FormModule::FormId)
                            .to(Form::Table, Form::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FORM_MODULE_MODULE_ID)
                            .from(FormModule::Table, FormModule::ModuleId)
                            .to(Module::Table, Module::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormModule::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Module::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RolForm::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Form::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserRol::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Rol::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Person::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Person {
    Table,
    Id,
    FirstName,
    SecondName,
    FirstLastName,
    SecondLastName,
    PhoneNumber,
    Email,
    TypeIdentification,
    NumberIdentification,
    Signing,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    Username,
    Email,
    Password,
    PersonId,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum Rol {
    Table,
    Id,
    TypeRol,
    Description,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum UserRol {
    Table,
    Id,
    UserId,
    RolId,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum Form {
    Table,
    Id,
    Name,
    Description,
    Cuestion,
    TypeCuestion,
    Answer,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum RolForm {
    Table,
    Id,
    Permission,
    RolId,
    FormId,
    CreateDate,
    UpdateDate,
}

#[derive(DeriveIden)]
pub enum Module {
    Table,
    Id,
    Name,
    Description,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum FormModule {
    Table,
    Id,
    StatusProcedure,
    FormId,
    ModuleId,
    CreateDate,
    UpdateDate,
}
