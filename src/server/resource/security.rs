//! People, user accounts, roles, forms and modules.

use chrono::NaiveDateTime;
use entity::{form, form_module, module, person, rol, rol_form, user, user_rol};
use sea_orm::ActiveValue;

use crate::{
    model::security::{
        FormDto, FormModuleDto, FormModulePatch, FormPatch, ModuleDto, ModulePatch, PersonDto,
        PersonPatch, RolDto, RolFormDto, RolFormPatch, RolPatch, UserDto, UserPatch, UserRolDto,
        UserRolPatch,
    },
    server::{
        error::validation::ValidationError,
        resource::{assign, Resource, SoftDeletable, Updatable},
        service::validation::{
            require_email, require_email_if_present, require_positive, require_positive_if_present,
            require_text, require_text_if_present,
        },
    },
};

pub struct Person;

impl Resource for Person {
    const NAME: &'static str = "Person";

    type Entity = person::Entity;
    type Model = person::Model;
    type ActiveModel = person::ActiveModel;
    type PrimaryKey = person::PrimaryKey;
    type Dto = PersonDto;

    fn id(dto: &PersonDto) -> i32 {
        dto.id
    }

    fn validate(dto: &PersonDto) -> Result<(), ValidationError> {
        require_text("FirstName", &dto.first_name)?;
        require_text("FirstLastName", &dto.first_last_name)?;
        require_email("Email", &dto.email)?;
        require_text("TypeIdentification", &dto.type_identification)?;
        require_text("NumberIdentification", &dto.number_identification)?;
        Ok(())
    }

    fn to_dto(model: person::Model) -> PersonDto {
        PersonDto {
            id: model.id,
            first_name: model.first_name,
            second_name: model.second_name,
            first_last_name: model.first_last_name,
            second_last_name: model.second_last_name,
            phone_number: model.phone_number,
            email: model.email,
            type_identification: model.type_identification,
            number_identification: model.number_identification,
            signing: model.signing,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: PersonDto, now: NaiveDateTime) -> person::ActiveModel {
        person::ActiveModel {
            first_name: ActiveValue::Set(dto.first_name),
            second_name: ActiveValue::Set(dto.second_name),
            first_last_name: ActiveValue::Set(dto.first_last_name),
            second_last_name: ActiveValue::Set(dto.second_last_name),
            phone_number: ActiveValue::Set(dto.phone_number),
            email: ActiveValue::Set(dto.email),
            type_identification: ActiveValue::Set(dto.type_identification),
            number_identification: ActiveValue::Set(dto.number_identification),
            signing: ActiveValue::Set(dto.signing),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Person {
    type Patch = PersonPatch;

    fn validate_patch(patch: &PersonPatch) -> Result<(), ValidationError> {
        require_text_if_present("FirstName", patch.first_name.as_deref())?;
        require_text_if_present("FirstLastName", patch.first_last_name.as_deref())?;
        require_email_if_present("Email", patch.email.as_deref())?;
        require_text_if_present("TypeIdentification", patch.type_identification.as_deref())?;
        require_text_if_present("NumberIdentification", patch.number_identification.as_deref())?;
        Ok(())
    }

    fn apply_dto(dto: PersonDto, model: &mut person::ActiveModel) {
        model.first_name = ActiveValue::Set(dto.first_name);
        model.second_name = ActiveValue::Set(dto.second_name);
        model.first_last_name = ActiveValue::Set(dto.first_last_name);
        model.second_last_name = ActiveValue::Set(dto.second_last_name);
        model.phone_number = ActiveValue::Set(dto.phone_number);
        model.email = ActiveValue::Set(dto.email);
        model.type_identification = ActiveValue::Set(dto.type_identification);
        model.number_identification = ActiveValue::Set(dto.number_identification);
        model.signing = ActiveValue::Set(dto.signing);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: PersonPatch, model: &mut person::ActiveModel) {
        assign(&mut model.first_name, patch.first_name);
        assign(&mut model.second_name, patch.second_name);
        assign(&mut model.first_last_name, patch.first_last_name);
        assign(&mut model.second_last_name, patch.second_last_name);
        assign(&mut model.phone_number, patch.phone_number);
        assign(&mut model.email, patch.email);
        assign(&mut model.type_identification, patch.type_identification);
        assign(&mut model.number_identification, patch.number_identification);
        assign(&mut model.signing, patch.signing);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut person::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Person {
    fn deactivate(model: &mut person::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct User;

impl Resource for User {
    const NAME: &'static str = "User";

    type Entity = user::Entity;
    type Model = user::Model;
    type ActiveModel = user::ActiveModel;
    type PrimaryKey = user::PrimaryKey;
    type Dto = UserDto;

    fn id(dto: &UserDto) -> i32 {
        dto.id
    }

    fn validate(dto: &UserDto) -> Result<(), ValidationError> {
        require_text("Username", &dto.username)?;
        require_email("Email", &dto.email)?;
        require_text("Password", &dto.password)?;
        require_positive("PersonId", dto.person_id)?;
        Ok(())
    }

    fn to_dto(model: user::Model) -> UserDto {
        UserDto {
            id: model.id,
            username: model.username,
            email: model.email,
            password: model.password,
            person_id: model.person_id,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: UserDto, now: NaiveDateTime) -> user::ActiveModel {
        user::ActiveModel {
            username: ActiveValue::Set(dto.username),
            email: ActiveValue::Set(dto.email),
            password: ActiveValue::Set(dto.password),
            person_id: ActiveValue::Set(dto.person_id),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for User {
    type Patch = UserPatch;

    fn validate_patch(patch: &UserPatch) -> Result<(), ValidationError> {
        require_text_if_present("Username", patch.username.as_deref())?;
        require_email_if_present("Email", patch.email.as_deref())?;
        require_text_if_present("Password", patch.password.as_deref())?;
        require_positive_if_present("PersonId", patch.person_id)?;
        Ok(())
    }

    fn apply_dto(dto: UserDto, model: &mut user::ActiveModel) {
        model.username = ActiveValue::Set(dto.username);
        model.email = ActiveValue::Set(dto.email);
        model.password = ActiveValue::Set(dto.password);
        model.person_id = ActiveValue::Set(dto.person_id);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: UserPatch, model: &mut user::ActiveModel) {
        assign(&mut model.username, patch.username);
        assign(&mut model.email, patch.email);
        assign(&mut model.password, patch.password);
        assign(&mut model.person_id, patch.person_id);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut user::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for User {
    fn deactivate(model: &mut user::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct Rol;

impl Resource for Rol {
    const NAME: &'static str = "Rol";

    type Entity = rol::Entity;
    type Model = rol::Model;
    type ActiveModel = rol::ActiveModel;
    type PrimaryKey = rol::PrimaryKey;
    type Dto = RolDto;

    fn id(dto: &RolDto) -> i32 {
        dto.id
    }

    fn validate(dto: &RolDto) -> Result<(), ValidationError> {
        require_text("TypeRol", &dto.type_rol)
    }

    fn to_dto(model: rol::Model) -> RolDto {
        RolDto {
            id: model.id,
            type_rol: model.type_rol,
            description: model.description,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: RolDto, now: NaiveDateTime) -> rol::ActiveModel {
        rol::ActiveModel {
            type_rol: ActiveValue::Set(dto.type_rol),
            description: ActiveValue::Set(dto.description),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Rol {
    type Patch = RolPatch;

    fn validate_patch(patch: &RolPatch) -> Result<(), ValidationError> {
        require_text_if_present("TypeRol", patch.type_rol.as_deref())
    }

    fn apply_dto(dto: RolDto, model: &mut rol::ActiveModel) {
        model.type_rol = ActiveValue::Set(dto.type_rol);
        model.description = ActiveValue::Set(dto.description);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: RolPatch, model: &mut rol::ActiveModel) {
        assign(&mut model.type_rol, patch.type_rol);
        assign(&mut model.description, patch.description);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut rol::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Rol {
    fn deactivate(model: &mut rol::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct UserRol;

impl Resource for UserRol {
    const NAME: &'static str = "UserRol";

    type Entity = user_rol::Entity;
    type Model = user_rol::Model;
    type ActiveModel = user_rol::ActiveModel;
    type PrimaryKey = user_rol::PrimaryKey;
    type Dto = UserRolDto;

    fn id(dto: &UserRolDto) -> i32 {
        dto.id
    }

    fn validate(dto: &UserRolDto) -> Result<(), ValidationError> {
        require_positive("UserId", dto.user_id)?;
        require_positive("RolId", dto.rol_id)?;
        Ok(())
    }

    fn to_dto(model: user_rol::Model) -> UserRolDto {
        UserRolDto {
            id: model.id,
            user_id: model.user_id,
            rol_id: model.rol_id,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: UserRolDto, now: NaiveDateTime) -> user_rol::ActiveModel {
        user_rol::ActiveModel {
            user_id: ActiveValue::Set(dto.user_id),
            rol_id: ActiveValue::Set(dto.rol_id),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for UserRol {
    type Patch = UserRolPatch;

    fn validate_patch(patch: &UserRolPatch) -> Result<(), ValidationError> {
        require_positive_if_present("UserId", patch.user_id)?;
        require_positive_if_present("RolId", patch.rol_id)?;
        Ok(())
    }

    fn apply_dto(dto: UserRolDto, model: &mut user_rol::ActiveModel) {
        model.user_id = ActiveValue::Set(dto.user_id);
        model.rol_id = ActiveValue::Set(dto.rol_id);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: UserRolPatch, model: &mut user_rol::ActiveModel) {
        assign(&mut model.user_id, patch.user_id);
        assign(&mut model.rol_id, patch.rol_id);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut user_rol::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for UserRol {
    fn deactivate(model: &mut user_rol::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct Form;

impl Resource for Form {
    const NAME: &'static str = "Form";

    type Entity = form::Entity;
    type Model = form::Model;
    type ActiveModel = form::ActiveModel;
    type PrimaryKey = form::PrimaryKey;
    type Dto = FormDto;

    fn id(dto: &FormDto) -> i32 {
        dto.id
    }

    fn validate(dto: &FormDto) -> Result<(), ValidationError> {
        require_text("Name", &dto.name)
    }

    fn to_dto(model: form::Model) -> FormDto {
        FormDto {
            id: model.id,
            name: model.name,
            description: model.description,
            cuestion: model.cuestion,
            type_cuestion: model.type_cuestion,
            answer: model.answer,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: FormDto, now: NaiveDateTime) -> form::ActiveModel {
        form::ActiveModel {
            name: ActiveValue::Set(dto.name),
            description: ActiveValue::Set(dto.description),
            cuestion: ActiveValue::Set(dto.cuestion),
            type_cuestion: ActiveValue::Set(dto.type_cuestion),
            answer: ActiveValue::Set(dto.answer),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Form {
    type Patch = FormPatch;

    fn validate_patch(patch: &FormPatch) -> Result<(), ValidationError> {
        require_text_if_present("Name", patch.name.as_deref())
    }

    fn apply_dto(dto: FormDto, model: &mut form::ActiveModel) {
        model.name = ActiveValue::Set(dto.name);
        model.description = ActiveValue::Set(dto.description);
        model.cuestion = ActiveValue::Set(dto.cuestion);
        model.type_cuestion = ActiveValue::Set(dto.type_cuestion);
        model.answer = ActiveValue::Set(dto.answer);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: FormPatch, model: &mut form::ActiveModel) {
        assign(&mut model.name, patch.name);
        assign(&mut model.description, patch.description);
        assign(&mut model.cuestion, patch.cuestion);
        assign(&mut model.type_cuestion, patch.type_cuestion);
        assign(&mut model.answer, patch.answer);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut form::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Form {
    fn deactivate(model: &mut form::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct RolForm;

impl Resource for RolForm {
    const NAME: &'static str = "RolForm";

    type Entity = rol_form::Entity;
    type Model = rol_form::Model;
    type ActiveModel = rol_form::ActiveModel;
    type PrimaryKey = rol_form::PrimaryKey;
    type Dto = RolFormDto;

    fn id(dto: &RolFormDto) -> i32 {
        dto.id
    }

    fn validate(dto: &RolFormDto) -> Result<(), ValidationError> {
        require_text("Permission", &dto.permission)?;
        require_positive("RolId", dto.rol_id)?;
        require_positive("FormId", dto.form_id)?;
        Ok(())
    }

    fn to_dto(model: rol_form::Model) -> RolFormDto {
        RolFormDto {
            id: model.id,
            permission: model.permission,
            rol_id: model.rol_id,
            form_id: model.form_id,
        }
    }

    fn to_active_model(dto: RolFormDto, now: NaiveDateTime) -> rol_form::ActiveModel {
        rol_form::ActiveModel {
            permission: ActiveValue::Set(dto.permission),
            rol_id: ActiveValue::Set(dto.rol_id),
            form_id: ActiveValue::Set(dto.form_id),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for RolForm {
    type Patch = RolFormPatch;

    fn validate_patch(patch: &RolFormPatch) -> Result<(), ValidationError> {
        require_text_if_present("Permission", patch.permission.as_deref())?;
        require_positive_if_present("RolId", patch.rol_id)?;
        require_positive_if_present("FormId", patch.form_id)?;
        Ok(())
    }

    fn apply_dto(dto: RolFormDto, model: &mut rol_form::ActiveModel) {
        model.permission = ActiveValue::Set(dto.permission);
        model.rol_id = ActiveValue::Set(dto.rol_id);
        model.form_id = ActiveValue::Set(dto.form_id);
    }

    fn apply_patch(patch: RolFormPatch, model: &mut rol_form::ActiveModel) {
        assign(&mut model.permission, patch.permission);
        assign(&mut model.rol_id, patch.rol_id);
        assign(&mut model.form_id, patch.form_id);
    }

    fn touch(model: &mut rol_form::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

pub struct Module;

impl Resource for Module {
    const NAME: &'static str = "Module";

    type Entity = module::Entity;
    type Model = module::Model;
    type ActiveModel = module::ActiveModel;
    type PrimaryKey = module::PrimaryKey;
    type Dto = ModuleDto;

    fn id(dto: &ModuleDto) -> i32 {
        dto.id
    }

    fn validate(dto: &ModuleDto) -> Result<(), ValidationError> {
        require_text("Name", &dto.name)
    }

    fn to_dto(model: module::Model) -> ModuleDto {
        ModuleDto {
            id: model.id,
            name: model.name,
            description: model.description,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: ModuleDto, now: NaiveDateTime) -> module::ActiveModel {
        module::ActiveModel {
            name: ActiveValue::Set(dto.name),
            description: ActiveValue::Set(dto.description),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Module {
    type Patch = ModulePatch;

    fn validate_patch(patch: &ModulePatch) -> Result<(), ValidationError> {
        require_text_if_present("Name", patch.name.as_deref())
    }

    fn apply_dto(dto: ModuleDto, model: &mut module::ActiveModel) {
        model.name = ActiveValue::Set(dto.name);
        model.description = ActiveValue::Set(dto.description);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: ModulePatch, model: &mut module::ActiveModel) {
        assign(&mut model.name, patch.name);
        assign(&mut model.description, patch.description);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut module::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Module {
    fn deactivate(model: &mut module::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct FormModule;

impl Resource for FormModule {
    const NAME: &'static str = "FormModule";

    type Entity = form_module::Entity;
    type Model = form_module::Model;
    type ActiveModel = form_module::ActiveModel;
    type PrimaryKey = form_module::PrimaryKey;
    type Dto = FormModuleDto;

    fn id(dto: &FormModuleDto) -> i32 {
        dto.id
    }

    fn validate(dto: &FormModuleDto) -> Result<(), ValidationError> {
        require_text("StatusProcedure", &dto.status_procedure)?;
        require_positive("FormId", dto.form_id)?;
        require_positive("ModuleId", dto.module_id)?;
        Ok(())
    }

    fn to_dto(model: form_module::Model) -> FormModuleDto {
        FormModuleDto {
            id: model.id,
            status_procedure: model.status_procedure,
            form_id: model.form_id,
            module_id: model.module_id,
        }
    }

    fn to_active_model(dto: FormModuleDto, now: NaiveDateTime) -> form_module::ActiveModel {
        form_module::ActiveModel {
            status_procedure: ActiveValue::Set(dto.status_procedure),
            form_id: ActiveValue::Set(dto.form_id),
            module_id: ActiveValue::Set(dto.module_id),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for FormModule {
    type Patch = FormModulePatch;

    fn validate_patch(patch: &FormModulePatch) -> Result<(), ValidationError> {
        require_text_if_present("StatusProcedure", patch.status_procedure.as_deref())?;
        require_positive_if_present("FormId", patch.form_id)?;
        require_positive_if_present("ModuleId", patch.module_id)?;
        Ok(())
    }

    fn apply_dto(dto: FormModuleDto, model: &mut form_module::ActiveModel) {
        model.status_procedure = ActiveValue::Set(dto.status_procedure);
        model.form_id = ActiveValue::Set(dto.form_id);
        model.module_id = ActiveValue::Set(dto.module_id);
    }

    fn apply_patch(patch: FormModulePatch, model: &mut form_module::ActiveModel) {
        assign(&mut model.status_procedure, patch.status_procedure);
        assign(&mut model.form_id, patch.form_id);
        assign(&mut model.module_id, patch.module_id);
    }

    fn touch(model: &mut form_module::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}
