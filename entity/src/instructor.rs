//! `SeaORM` Entity for the `instructor` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "instructor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
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
    #[sea_orm(has_many = "super::instructor_program::Entity")]
    InstructorProgram,
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

impl Related<super::instructor_program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InstructorProgram.def()
    }
}

impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef {
        super::instructor_program::Relation::Program.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::instructor_program::Relation::Instructor.def().rev())
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
