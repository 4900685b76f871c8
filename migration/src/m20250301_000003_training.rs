//! Training area: programs and the aprendiz/instructor profiles attached to users.

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000001_security::User;

static FK_APRENDIZ_USER_ID: &str = "fk-aprendiz-user_id";
static FK_INSTRUCTOR_USER_ID: &str = "fk-instructor-user_id";
static FK_APRENDIZ_PROGRAM_APRENDIZ_ID: &str = "fk-aprendiz_program-aprendiz_id";
static FK_APRENDIZ_PROGRAM_PROGRAM_ID: &str = "fk-aprendiz_program-program_id";
static FK_INSTRUCTOR_PROGRAM_INSTRUCTOR_ID: &str = "fk-instructor_program-instructor_id";
static FK_INSTRUCTOR_PROGRAM_PROGRAM_ID: &str = "fk-instructor_program-program_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Program::Table)
                    .if_not_exists()
                    .col(pk_auto(Program::Id))
                    .col(big_integer(Program::CodeProgram))
                    .col(string(Program::Name))
                    .col(string(Program::TypeProgram))
                    .col(string(Program::Description))
                    .col(boolean(Program::Active))
                    .col(timestamp(Program::CreateDate))
                    .col(timestamp_null(Program::UpdateDate))
                    .col(timestamp_null(Program::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Aprendiz::Table)
                    .if_not_exists()
                    .col(pk_auto(Aprendiz::Id))
                    .col(string(Aprendiz::PreviousProgram))
                    .col(integer_uniq(Aprendiz::UserId))
                    .col(boolean(Aprendiz::Active))
                    .col(timestamp(Aprendiz::CreateDate))
                    .col(timestamp_null(Aprendiz::UpdateDate))
                    .col(timestamp_null(Aprendiz::DeleteDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_USER_ID)
                            .from(Aprendiz::Table, Aprendiz::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Instructor::Table)
                    .if_not_exists()
                    .col(pk_auto(Instructor::Id))
                    .col(integer_uniq(Instructor::UserId))
                    .col(boolean(Instructor::Active))
                    .col(timestamp(Instructor::CreateDate))
                    .col(timestamp_null(Instructor::UpdateDate))
                    .col(timestamp_null(Instructor::DeleteDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INSTRUCTOR_USER_ID)
                            .from(Instructor::Table, Instructor::UserId)
                            .to(User::Table, User::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AprendizProgram::Table)
                    .if_not_exists()
                    .col(pk_auto(AprendizProgram::Id))
                    .col(integer(AprendizProgram::AprendizId))
                    .col(integer(AprendizProgram::ProgramId))
                    .col(timestamp(AprendizProgram::CreateDate))
                    .col(timestamp_null(AprendizProgram::UpdateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROGRAM_APRENDIZ_ID)
                            .from(AprendizProgram::Table, AprendizProgram::AprendizId)
                            .to(Aprendiz::Table, Aprendiz::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROGRAM_PROGRAM_ID)
                            .from(AprendizProgram::Table, AprendizProgram::ProgramId)
                            .to(Program::Table, Program::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InstructorProgram::Table)
                    .if_not_exists()
                    .col(pk_auto(InstructorProgram::Id))
                    .col(integer(InstructorProgram::InstructorId))
                    .col(integer(InstructorProgram::ProgramId))
                    .col(timestamp(InstructorProgram::CreateDate))
                    .col(timestamp_null(InstructorProgram::UpdateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INSTRUCTOR_PROGRAM_INSTRUCTOR_ID)
                            .from(InstructorProgram::Table, InstructorProgram::InstructorId)
                            .to(Instructor::Table, Instructor::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INSTRUCTOR_PROGRAM_PROGRAM_ID)
                            .from(InstructorProgram::Table, InstructorProgram::ProgramId)
                            .to(Program::Table, Program::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InstructorProgram::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AprendizProgram::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Instructor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Aprendiz::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Program::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Program {
    Table,
    Id,
    CodeProgram,
    Name,
    TypeProgram,
    Description,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum Aprendiz {
    Table,
    Id,
    PreviousProgram,
    UserId,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum Instructor {
    Table,
    Id,
    UserId,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum AprendizProgram {
    Table,
    Id,
    AprendizId,
    ProgramId,
    CreateDate,
    UpdateDate,
}

#[derive(DeriveIden)]
pub enum InstructorProgram {
    Table,
    Id,
    InstructorId,
    ProgramId,
    CreateDate,
    UpdateDate,
}
