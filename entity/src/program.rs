//! `SeaORM` Entity for the `program` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "program")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub code_program: i64,
    pub name: String,
    pub type_program: String,
    pub description: String,
    pub active: bool,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
    pub delete_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aprendiz_program::Entity")]
    AprendizProgram,
    #[sea_orm(has_many = "super::instructor_program::Entity")]
    InstructorProgram,
}

impl Related<super::aprendiz::Entity> for Entity {
    fn to() -> RelationDef {
        super::aprendiz_program::Relation::Aprendiz.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::aprendiz_program::Relation::Program.def().rev())
    }
}

impl Related<super::aprendiz_program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AprendizProgram.def()
    }
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        super::instructor_program::Relation::Instructor.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::instructor_program::Relation::Program.def().rev())
    }
}

impl Related<super::instructor_program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::InstructorProgram.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
