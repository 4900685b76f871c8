//! `SeaORM` Entity for the `sede` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sede")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code_sede: String,
    pub address: String,
    pub phone_sede: String,
    pub email_contact: String,
    pub center_id: i32,
    pub active: bool,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
    pub delete_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::center::Entity",
        from = "Column::CenterId",
        to = "super::center::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Center,
    #[sea_orm(has_many = "super::user_sede::Entity")]
    UserSede,
}

impl Related<super::center::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Center.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_sede::Relation::User.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::user_sede::Relation::Sede.def().rev())
    }
}

impl Related<super::user_sede::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserSede.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
