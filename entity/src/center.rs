//! `SeaORM` Entity for the `center` table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "center")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub code_center: String,
    pub address: String,
    pub regional_id: i32,
    pub active: bool,
    pub create_date: DateTime,
    pub update_date: Option<DateTime>,
    pub delete_date: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::regional::Entity",
        from = "Column::RegionalId",
        to = "super::regional::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Regional,
    #[sea_orm(has_many = "super::sede::Entity")]
    Sede,
}

impl Related<super::regional::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Regional.def()
    }
}

impl Related<super::sede::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sede.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
