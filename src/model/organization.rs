//! The regional → center → sede hierarchy.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegionalDto {
    pub id: i32,
    pub name: String,
    pub code_regional: String,
    pub description: String,
    pub address: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegionalPatch {
    pub name: Option<String>,
    pub code_regional: Option<String>,
    pub description: Option<String>,
    pub address: Option<String>,
    pub active: Option<bool>,
}

/// A training center, owned by a regional.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct CenterDto {
    pub id: i32,
    pub name: String,
    pub code_center: String,
    pub address: String,
    pub regional_id: i32,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct CenterPatch {
    pub name: Option<String>,
    pub code_center: Option<String>,
    pub address: Option<String>,
    pub regional_id: Option<i32>,
    pub active: Option<bool>,
}

/// A physical site, owned by a center.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct SedeDto {
    pub id: i32,
    pub name: String,
    pub code_sede: String,
    pub address: String,
    pub phone_sede: String,
    pub email_contact: String,
    pub center_id: i32,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct SedePatch {
    pub name: Option<String>,
    pub code_sede: Option<String>,
    pub address: Option<String>,
    pub phone_sede: Option<String>,
    pub email_contact: Option<String>,
    pub center_id: Option<i32>,
    pub active: Option<bool>,
}

/// Assignment of a user to a sede.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserSedeDto {
    pub id: i32,
    pub status_procedure: String,
    pub user_id: i32,
    pub sede_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserSedePatch {
    pub status_procedure: Option<String>,
    pub user_id: Option<i32>,
    pub sede_id: Option<i32>,
}
