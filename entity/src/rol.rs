//! `SeaORM` Entity for the `rol` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rol")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub type_rol: String,
    pub description: String,
    pub active: bool,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
    pub delete_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::rol_form::Entity")]
    RolForm,
    #[sea_orm(has_many = "super::user_rol::Entity")]
    UserRol,
}

impl Related<super::form::Entity> for Entity {
    fn to() -> RelationDef {
        super::rol_form::Relation::Form.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::rol_form::Relation::Rol.def().rev())
    }
}

impl Related<super::rol_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolForm.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_rol::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_rol::Relation::Rol.def().rev())
    }
}

impl Related<super::user_rol::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRol.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
