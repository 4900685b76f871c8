//! `SeaORM` Entity for the `aprendiz_program` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "aprendiz_program")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aprendiz_id: i32,
    pub program_id: i32,
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
        belongs_to = "super::program::Entity",
        from = "Column::ProgramId",
        to = "super::program::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Program,
}

impl Related<super::aprendiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aprendiz.def()
    }
}

impl Related<super::program::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Program.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
