//! People, user accounts, roles, forms and modules.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::nullable;

/// A natural person registered in the institution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct PersonDto {
    pub id: i32,
    pub first_name: String,
    pub second_name: Option<String>,
    pub first_last_name: String,
    pub second_last_name: Option<String>,
    pub phone_number: String,
    pub email: String,
    pub type_identification: String,
    pub number_identification: String,
    pub signing: Option<String>,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct PersonPatch {
    pub first_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub second_name: Option<Option<String>>,
    pub first_last_name: Option<String>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub second_last_name: Option<Option<String>>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub type_identification: Option<String>,
    pub number_identification: Option<String>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub signing: Option<Option<String>>,
    pub active: Option<bool>,
}

/// Login credentials belonging to exactly one person.
///
/// The password is accepted on input but never serialized back to clients.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub person_id: i32,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub person_id: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct RolDto {
    pub id: i32,
    pub type_rol: String,
    pub description: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct RolPatch {
    pub type_rol: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

/// Assignment of a role to a user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserRolDto {
    pub id: i32,
    pub user_id: i32,
    pub rol_id: i32,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct UserRolPatch {
    pub user_id: Option<i32>,
    pub rol_id: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct FormDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub cuestion: String,
    pub type_cuestion: String,
    pub answer: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct FormPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cuestion: Option<String>,
    pub type_cuestion: Option<String>,
    pub answer: Option<String>,
    pub active: Option<bool>,
}

/// Permission a role holds over a form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct RolFormDto {
    pub id: i32,
    pub permission: String,
    pub rol_id: i32,
    pub form_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct RolFormPatch {
    pub permission: Option<String>,
    pub rol_id: Option<i32>,
    pub form_id: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModuleDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ModulePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

/// Placement of a form inside a module.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct FormModuleDto {
    pub id: i32,
    pub status_procedure: String,
    pub form_id: i32,
    pub module_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct FormModulePatch {
    pub status_procedure: Option<String>,
    pub form_id: Option<i32>,
    pub module_id: Option<i32>,
}
