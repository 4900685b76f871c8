//! Re-exports of every entity under its PascalCase name.

pub use super::aprendiz::Entity as Aprendiz;
pub use super::aprendiz_process_instructor::Entity as AprendizProcessInstructor;
pub use super::aprendiz_program::Entity as AprendizProgram;
pub use super::center::Entity as Center;
pub use super::change_log::Entity as ChangeLog;
pub use super::concept::Entity as Concept;
pub use super::enterprise::Entity as Enterprise;
pub use super::form::Entity as Form;
pub use super::form_module::Entity as FormModule;
pub use super::instructor::Entity as Instructor;
pub use super::instructor_program::Entity as InstructorProgram;
pub use super::module::Entity as Module;
pub use super::person::Entity as Person;
pub use super::process::Entity as Process;
pub use super::program::Entity as Program;
pub use super::regional::Entity as Regional;
pub use super::registery_sofia::Entity as RegisterySofia;
pub use super::rol::Entity as Rol;
pub use super::rol_form::Entity as RolForm;
pub use super::sede::Entity as Sede;
pub use super::state::Entity as State;
pub use super::type_modality::Entity as TypeModality;
pub use super::user::Entity as User;
pub use super::user_rol::Entity as UserRol;
pub use super::user_sede::Entity as UserSede;
pub use super::verification::Entity as Verification;
