//! `SeaORM` Entity for the `form` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "form")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub cuestion: String,
    pub type_cuestion: String,
    pub answer: String,
    pub active: bool,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
    pub delete_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::form_module::Entity")]
    FormModule,
    #[sea_orm(has_many = "super::rol_form::Entity")]
    RolForm,
}

impl Related<super::form_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormModule.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        super::form_module::Relation::Module.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::form_module::Relation::Form.def().rev())
    }
}

impl Related<super::rol::Entity> for Entity {
    fn to() -> RelationDef {
        super::rol_form::Relation::Rol.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::rol_form::Relation::Form.def().rev())
    }
}

impl Related<super::rol_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolForm.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
