//! `SeaORM` Entity for the `module` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "module")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
    pub delete_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::form_module::Entity")]
    FormModule,
}

impl Related<super::form::Entity> for Entity {
    fn to() -> RelationDef {
        super::form_module::Relation::Form.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::form_module::Relation::Module.def().rev())
    }
}

impl Related<super::form_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormModule.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
