use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A manually recorded audit entry describing a change to some row.
///
/// Entries are append-only: they can be listed, fetched and created, never updated or removed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ChangeLogDto {
    pub id: i32,
    pub table_name: String,
    pub id_table: i32,
    pub old_values: String,
    pub new_values: String,
    pub action: String,
    pub user_name: String,
    pub active: Option<bool>,
}
