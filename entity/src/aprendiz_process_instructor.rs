//! `SeaORM` Entity for the `aprendiz_process_instructor` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aprendiz_process_instructor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aprendiz_id: i32,
    pub instructor_id: i32,
    pub process_id: i32,
    pub type_modality_id: i32,
    pub registery_sofia_id: i32,
    pub concept_id: i32,
    pub enterprise_id: i32,
    pub state_id: i32,
    pub verification_id: i32,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::aprendiz::Entity",
        from = "Column::AprendizId",
        to = "super::aprendiz::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Aprendiz,
    #[sea_orm(
        belongs_to = "super::concept::Entity",
        from = "Column::ConceptId",
        to = "super::concept::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Concept,
    #[sea_orm(
        belongs_to = "super::enterprise::Entity",
        from = "Column::EnterpriseId",
        to = "super::enterprise::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Enterprise,
    #[sea_orm(
        belongs_to = "super::instructor::Entity",
        from = "Column::InstructorId",
        to = "super::instructor::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Instructor,
    #[sea_orm(
        belongs_to = "super::process::Entity",
        from = "Column::ProcessId",
        to = "super::process::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Process,
    #[sea_orm(
        belongs_to = "super::registery_sofia::Entity",
        from = "Column::RegisterySofiaId",
        to = "super::registery_sofia::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    RegisterySofia,
    #[sea_orm(
        belongs_to = "super::state::Entity",
        from = "Column::StateId",
        to = "super::state::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    State,
    #[sea_orm(
        belongs_to = "super::type_modality::Entity",
        from = "Column::TypeModalityId",
        to = "super::type_modality::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    TypeModality,
    #[sea_orm(
        belongs_to = "super::verification::Entity",
        from = "Column::VerificationId",
        to = "super::verification::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Verification,
}

impl Related<super::aprendiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aprendiz.def()
    }
}

impl Related<super::concept::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Concept.def()
    }
}

impl Related<super::enterprise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enterprise.def()
    }
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::process::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Process.def()
    }
}

impl Related<super::registery_sofia::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RegisterySofia.def()
    }
}

impl Related<super::state::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::State.def()
    }
}

impl Related<super::type_modality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TypeModality.def()
    }
}

impl Related<super::verification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Verification.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
