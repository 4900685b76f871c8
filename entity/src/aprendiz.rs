//! `SeaORM` Entity for the `aprendiz` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aprendiz")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub previous_program: String,
    #[sea_orm(unique)]
    pub user_id: i32,
    pub active: bool,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
    pub delete_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aprendiz_process_instructor::Entity")]
    AprendizProcessInstructor,
    #[sea_orm(has_many = "super::aprendiz_program::Entity")]
    AprendizProgram,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
}

impl Related<super::aprendiz_process_instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AprendizProcessInstructor.def()
    }
}

impl Related<super::aprendiz_program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AprendizProgram.def()
    }
}

impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef {
        super::aprendiz_program::Relation::Program.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::aprendiz_program::Relation::Aprendiz.def().rev())
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
