//! Training-process catalogs and the case record linking them together.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::nullable;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessDto {
    pub id: i32,
    pub type_process: String,
    pub start_aprendiz: Option<NaiveDateTime>,
    pub observation: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProcessPatch {
    pub type_process: Option<String>,
    #[serde(deserialize_with = "nullable")]
    #[schema(value_type = Option<NaiveDateTime>)]
    pub start_aprendiz: Option<Option<NaiveDateTime>>,
    pub observation: Option<String>,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct TypeModalityDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct TypeModalityPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

/// Registration of a case in the SOFIA Plus system.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegisterySofiaDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub document: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct RegisterySofiaPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub document: Option<String>,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConceptDto {
    pub id: i32,
    pub name: String,
    pub observation: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ConceptPatch {
    pub name: Option<String>,
    pub observation: Option<String>,
    pub active: Option<bool>,
}

/// Company hosting the productive stage of a trainee.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnterpriseDto {
    pub id: i32,
    pub name_enterprise: String,
    pub nit_enterprise: String,
    pub locate: String,
    pub phone_enterprise: String,
    pub email_enterprise: String,
    pub observation: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct EnterprisePatch {
    pub name_enterprise: Option<String>,
    pub nit_enterprise: Option<String>,
    pub locate: Option<String>,
    pub phone_enterprise: Option<String>,
    pub email_enterprise: Option<String>,
    pub observation: Option<String>,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct StateDto {
    pub id: i32,
    pub type_state: String,
    pub description: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct StatePatch {
    pub type_state: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct VerificationDto {
    pub id: i32,
    pub name: String,
    pub observation: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct VerificationPatch {
    pub name: Option<String>,
    pub observation: Option<String>,
    pub active: Option<bool>,
}

/// A single training case: one aprendiz, followed by one instructor, classified along every
/// process dimension.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct AprendizProcessInstructorDto {
    pub id: i32,
    pub aprendiz_id: i32,
    pub instructor_id: i32,
    pub process_id: i32,
    pub type_modality_id: i32,
    pub registery_sofia_id: i32,
    pub concept_id: i32,
    pub enterprise_id: i32,
    pub state_id: i32,
    pub verification_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct AprendizProcessInstructorPatch {
    pub aprendiz_id: Option<i32>,
    pub instructor_id: Option<i32>,
    pub process_id: Option<i32>,
    pub type_modality_id: Option<i32>,
    pub registery_sofia_id: Option<i32>,
    pub concept_id: Option<i32>,
    pub enterprise_id: Option<i32>,
    pub state_id: Option<i32>,
    pub verification_id: Option<i32>,
}
