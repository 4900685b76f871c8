//! `SeaORM` entities for the SENA training-administration schema.

pub mod prelude;

pub mod aprendiz;
pub mod aprendiz_process_instructor;
pub mod aprendiz_program;
pub mod center;
pub mod change_log;
pub mod concept;
pub mod enterprise;
pub mod form;
pub mod form_module;
pub mod instructor;
pub mod instructor_program;
pub mod module;
pub mod person;
pub mod process;
pub mod program;
pub mod regional;
pub mod registery_sofia;
pub mod rol;
pub mod rol_form;
pub mod sede;
pub mod state;
pub mod type_modality;
pub mod user;
pub mod user_rol;
pub mod user_sede;
pub mod verification;
