//! `SeaORM` Entity for the `user` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password: String,
    #[sea_orm(unique)]
    pub person_id: i32,
    pub active: bool,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
    pub delete_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::aprendiz::Entity")]
    Aprendiz,
    #[sea_orm(has_one = "super::instructor::Entity")]
    Instructor,
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Person,
    #[sea_orm(has_many = "super::user_rol::Entity")]
    UserRol,
    #[sea_orm(has_many = "super::user_sede::Entity")]
    UserSede,
}

impl Related<super::aprendiz::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Aprendiz.def()
    }
}

impl Related<super::instructor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Instructor.def()
    }
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl Related<super::rol::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_rol::Relation::Rol.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_rol::Relation::User.def().rev())
    }
}

impl Related<super::sede::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_sede::Relation::Sede.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_sede::Relation::User.def().rev())
    }
}

impl Related<super::user_rol::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRol.def()
    }
}

impl Related<super::user_sede::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSede.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
