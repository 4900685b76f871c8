//! Training programs and the aprendiz/instructor profiles enrolled in them.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProgramDto {
    pub id: i32,
    pub code_program: i64,
    pub name: String,
    pub type_program: String,
    pub description: String,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct ProgramPatch {
    pub code_program: Option<i64>,
    pub name: Option<String>,
    pub type_program: Option<String>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

/// Trainee profile, one per user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct AprendizDto {
    pub id: i32,
    pub previous_program: String,
    pub user_id: i32,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct AprendizPatch {
    pub previous_program: Option<String>,
    pub user_id: Option<i32>,
    pub active: Option<bool>,
}

/// Instructor profile, one per user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstructorDto {
    pub id: i32,
    pub user_id: i32,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstructorPatch {
    pub user_id: Option<i32>,
    pub active: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct AprendizProgramDto {
    pub id: i32,
    pub aprendiz_id: i32,
    pub program_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct AprendizProgramPatch {
    pub aprendiz_id: Option<i32>,
    pub program_id: Option<i32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstructorProgramDto {
    pub id: i32,
    pub instructor_id: i32,
    pub program_id: i32,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "PascalCase", default)]
pub struct InstructorProgramPatch {
    pub instructor_id: Option<i32>,
    pub program_id: Option<i32>,
}
