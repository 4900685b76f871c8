//! `SeaORM` Entity for the `process` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "process")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub type_process: String,
    pub start_aprendiz: Option<DateTime>,
    pub observation: String,
    pub active: bool,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
    pub delete_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::aprendiz_process_instructor::Entity")]
    AprendizProcessInstructor,
}

impl Related<super::aprendiz_process_instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AprendizProcessInstructor.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
