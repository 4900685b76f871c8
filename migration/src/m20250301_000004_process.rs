//! Process area: classification catalogs and the aprendiz/process/instructor case table.

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250301_000003_training::{Aprendiz, Instructor};

static FK_APRENDIZ_PROCESS_INSTRUCTOR_APRENDIZ_ID: &str = "fk-aprendiz_process_instructor-aprendiz_id";
static FK_APRENDIZ_PROCESS_INSTRUCTOR_CONCEPT_ID: &str = "fk-aprendiz_process_instructor-concept_id";
static FK_APRENDIZ_PROCESS_INSTRUCTOR_ENTERPRISE_ID: &str = "fk-aprendiz_process_instructor-enterprise_id";
static FK_APRENDIZ_PROCESS_INSTRUCTOR_INSTRUCTOR_ID: &str = "fk-aprendiz_process_instructor-instructor_id";
static FK_APRENDIZ_PROCESS_INSTRUCTOR_PROCESS_ID: &str = "fk-aprendiz_process_instructor-process_id";
static FK_APRENDIZ_PROCESS_INSTRUCTOR_REGISTERY_SOFIA_ID: &str = "fk-aprendiz_process_instructor-registery_sofia_id";
static FK_APRENDIZ_PROCESS_INSTRUCTOR_STATE_ID: &str = "fk-aprendiz_process_instructor-state_id";
static FK_APRENDIZ_PROCESS_INSTRUCTOR_TYPE_MODALITY_ID: &str = "fk-aprendiz_process_instructor-type_modality_id";
static FK_APRENDIZ_PROCESS_INSTRUCTOR_VERIFICATION_ID: &str = "fk-aprendiz_process_instructor-verification_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Process::Table)
                    .if_not_exists()
                    .col(pk_auto(Process::Id))
                    .col(string(Process::TypeProcess))
                    .col(timestamp_null(Process::StartAprendiz))
                    .col(string(Process::Observation))
                    .col(boolean(Process::Active))
                    .col(timestamp(Process::CreateDate))
                    .col(timestamp_null(Process::UpdateDate))
                    .col(timestamp_null(Process::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(TypeModality::Table)
                    .if_not_exists()
                    .col(pk_auto(TypeModality::Id))
                    .col(string(TypeModality::Name))
                    .col(string(TypeModality::Description))
                    .col(boolean(TypeModality::Active))
                    .col(timestamp(TypeModality::CreateDate))
                    .col(timestamp_null(TypeModality::UpdateDate))
                    .col(timestamp_null(TypeModality::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(RegisterySofia::Table)
                    .if_not_exists()
                    .col(pk_auto(RegisterySofia::Id))
                    .col(string(RegisterySofia::Name))
                    .col(string(RegisterySofia::Description))
                    .col(string(RegisterySofia::Document))
                    .col(boolean(RegisterySofia::Active))
                    .col(timestamp(RegisterySofia::CreateDate))
                    .col(timestamp_null(RegisterySofia::UpdateDate))
                    .col(timestamp_null(RegisterySofia::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Concept::Table)
                    .if_not_exists()
                    .col(pk_auto(Concept::Id))
                    .col(string(Concept::Name))
                    .col(string(Concept::Observation))
                    .col(boolean(Concept::Active))
                    .col(timestamp(Concept::CreateDate))
                    .col(timestamp_null(Concept::UpdateDate))
                    .col(timestamp_null(Concept::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Enterprise::Table)
                    .if_not_exists()
                    .col(pk_auto(Enterprise::Id))
                    .col(string(Enterprise::NameEnterprise))
                    .col(string(Enterprise::NitEnterprise))
                    .col(string(Enterprise::Locate))
                    .col(string(Enterprise::PhoneEnterprise))
                    .col(string(Enterprise::EmailEnterprise))
                    .col(string(Enterprise::Observation))
                    .col(boolean(Enterprise::Active))
                    .col(timestamp(Enterprise::CreateDate))
                    .col(timestamp_null(Enterprise::UpdateDate))
                    .col(timestamp_null(Enterprise::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(State::Table)
                    .if_not_exists()
                    .col(pk_auto(State::Id))
                    .col(string(State::TypeState))
                    .col(string(State::Description))
                    .col(boolean(State::Active))
                    .col(timestamp(State::CreateDate))
                    .col(timestamp_null(State::UpdateDate))
                    .col(timestamp_null(State::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Verification::Table)
                    .if_not_exists()
                    .col(pk_auto(Verification::Id))
                    .col(string(Verification::Name))
                    .col(string(Verification::Observation))
                    .col(boolean(Verification::Active))
                    .col(timestamp(Verification::CreateDate))
                    .col(timestamp_null(Verification::UpdateDate))
                    .col(timestamp_null(Verification::DeleteDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AprendizProcessInstructor::Table)
                    .if_not_exists()
                    .col(pk_auto(AprendizProcessInstructor::Id))
                    .col(integer(AprendizProcessInstructor::AprendizId))
                    .col(integer(AprendizProcessInstructor::InstructorId))
                    .col(integer(AprendizProcessInstructor::ProcessId))
                    .col(integer(AprendizProcessInstructor::TypeModalityId))
                    .col(integer(AprendizProcessInstructor::RegisterySofiaId))
                    .col(integer(AprendizProcessInstructor::ConceptId))
                    .col(integer(AprendizProcessInstructor::EnterpriseId))
                    .col(integer(AprendizProcessInstructor::StateId))
                    .col(integer(AprendizProcessInstructor::VerificationId))
                    .col(timestamp(AprendizProcessInstructor::CreateDate))
                    .col(timestamp_null(AprendizProcessInstructor::UpdateDate))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROCESS_INSTRUCTOR_APRENDIZ_ID)
                            .from(AprendizProcessInstructor::Table, AprendizProcessInstructor::AprendizId)
                            .to(Aprendiz::Table, Aprendiz::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROCESS_INSTRUCTOR_CONCEPT_ID)
                            .from(AprendizProcessInstructor::Table, AprendizProcessInstructor::ConceptId)
                            .to(Concept::Table, Concept::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROCESS_INSTRUCTOR_ENTERPRISE_ID)
                            .from(AprendizProcessInstructor::Table, AprendizProcessInstructor::EnterpriseId)
                            .to(Enterprise::Table, Enterprise::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROCESS_INSTRUCTOR_INSTRUCTOR_ID)
                            .from(AprendizProcessInstructor::Table, AprendizProcessInstructor::InstructorId)
                            .to(Instructor::Table, Instructor::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROCESS_INSTRUCTOR_PROCESS_ID)
                            .from(AprendizProcessInstructor::Table, AprendizProcessInstructor::ProcessId)
                            .to(Process::Table, Process::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROCESS_INSTRUCTOR_REGISTERY_SOFIA_ID)
                            .from(AprendizProcessInstructor::Table, AprendizProcessInstructor::RegisterySofiaId)
                            .to(RegisterySofia::Table, RegisterySofia::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROCESS_INSTRUCTOR_STATE_ID)
                            .from(AprendizProcessInstructor::Table, AprendizProcessInstructor::StateId)
                            .to(State::Table, State::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROCESS_INSTRUCTOR_TYPE_MODALITY_ID)
                            .from(AprendizProcessInstructor::Table, AprendizProcessInstructor::TypeModalityId)
                            .to(TypeModality::Table, TypeModality::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_APRENDIZ_PROCESS_INSTRUCTOR_VERIFICATION_ID)
                            .from(AprendizProcessInstructor::Table, AprendizProcessInstructor::VerificationId)
                            .to(Verification::Table, Verification::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AprendizProcessInstructor::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Verification::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(State::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Enterprise::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Concept::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(RegisterySofia::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(TypeModality::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Process::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Process {
    Table,
    Id,
    TypeProcess,
    StartAprendiz,
    Observation,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum TypeModality {
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
pub enum RegisterySofia {
    Table,
    Id,
    Name,
    Description,
    Document,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum Concept {
    Table,
    Id,
    Name,
    Observation,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum Enterprise {
    Table,
    Id,
    NameEnterprise,
    NitEnterprise,
    Locate,
    PhoneEnterprise,
    EmailEnterprise,
    Observation,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum State {
    Table,
    Id,
    TypeState,
    Description,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum Verification {
    Table,
    Id,
    Name,
    Observation,
    Active,
    CreateDate,
    UpdateDate,
    DeleteDate,
}

#[derive(DeriveIden)]
pub enum AprendizProcessInstructor {
    Table,
    Id,
    AprendizId,
    InstructorId,
    ProcessId,
    TypeModalityId,
    RegisterySofiaId,
    ConceptId,
    EnterpriseId,
    StateId,
    VerificationId,
    CreateDate,
    UpdateDate,
}
