//! `SeaORM` Entity for the `user_sede` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_sede")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub status_procedure: String,
    pub user_id: i32,
    pub sede_id: i32,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sede::Entity",
        from = "Column::SedeId",
        to = "super::sede::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Sede,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    User,
}

impl Related<super::sede::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sede.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
