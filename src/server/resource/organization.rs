//! The regional, center and sede hierarchy plus user placement in sedes.

use chrono::NaiveDateTime;
use entity::{center, regional, sede, user_sede};
use sea_orm::ActiveValue;

use crate::{
    model::organization::{
        CenterDto, CenterPatch, RegionalDto, RegionalPatch, SedeDto, SedePatch, UserSedeDto,
        UserSedePatch,
    },
    server::{
        error::validation::ValidationError,
        resource::{assign, Resource, SoftDeletable, Updatable},
        service::validation::{
            require_positive, require_positive_if_present, require_text, require_text_if_present,
        },
    },
};

pub struct Regional;

impl Resource for Regional {
    const NAME: &'static str = "Regional";

    type Entity = regional::Entity;
    type Model = regional::Model;
    type ActiveModel = regional::ActiveModel;
    type PrimaryKey = regional::PrimaryKey;
    type Dto = RegionalDto;

    fn id(dto: &RegionalDto) -> i32 {
        dto.id
    }

    fn validate(dto: &RegionalDto) -> Result<(), ValidationError> {
        require_text("Name", &dto.name)?;
        require_text("CodeRegional", &dto.code_regional)?;
        Ok(())
    }

    fn to_dto(model: regional::Model) -> RegionalDto {
        RegionalDto {
            id: model.id,
            name: model.name,
            code_regional: model.code_regional,
            description: model.description,
            address: model.address,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: RegionalDto, now: NaiveDateTime) -> regional::ActiveModel {
        regional::ActiveModel {
            name: ActiveValue::Set(dto.name),
            code_regional: ActiveValue::Set(dto.code_regional),
            description: ActiveValue::Set(dto.description),
            address: ActiveValue::Set(dto.address),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Regional {
    type Patch = RegionalPatch;

    fn validate_patch(patch: &RegionalPatch) -> Result<(), ValidationError> {
        require_text_if_present("Name", patch.name.as_deref())?;
        require_text_if_present("CodeRegional", patch.code_regional.as_deref())?;
        Ok(())
    }

    fn apply_dto(dto: RegionalDto, model: &mut regional::ActiveModel) {
        model.name = ActiveValue::Set(dto.name);
        model.code_regional = ActiveValue::Set(dto.code_regional);
        model.description = ActiveValue::Set(dto.description);
        model.address = ActiveValue::Set(dto.address);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: RegionalPatch, model: &mut regional::ActiveModel) {
        assign(&mut model.name, patch.name);
        assign(&mut model.code_regional, patch.code_regional);
        assign(&mut model.description, patch.description);
        assign(&mut model.address, patch.address);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut regional::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Regional {
    fn deactivate(model: &mut regional::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct Center;

impl Resource for Center {
    const NAME: &'static str = "Center";

    type Entity = center::Entity;
    type Model = center::Model;
    type ActiveModel = center::ActiveModel;
    type PrimaryKey = center::PrimaryKey;
    type Dto = CenterDto;

    fn id(dto: &CenterDto) -> i32 {
        dto.id
    }

    fn validate(dto: &CenterDto) -> Result<(), ValidationError> {
        require_text("Name", &dto.name)?;
        require_text("CodeCenter", &dto.code_center)?;
        require_positive("RegionalId", dto.regional_id)?;
        Ok(())
    }

    fn to_dto(model: center::Model) -> CenterDto {
        CenterDto {
            id: model.id,
            name: model.name,
            code_center: model.code_center,
            address: model.address,
            regional_id: model.regional_id,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: CenterDto, now: NaiveDateTime) -> center::ActiveModel {
        center::ActiveModel {
            name: ActiveValue::Set(dto.name),
            code_center: ActiveValue::Set(dto.code_center),
            address: ActiveValue::Set(dto.address),
            regional_id: ActiveValue::Set(dto.regional_id),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Center {
    type Patch = CenterPatch;

    fn validate_patch(patch: &CenterPatch) -> Result<(), ValidationError> {
        require_text_if_present("Name", patch.name.as_deref())?;
        require_text_if_present("CodeCenter", patch.code_center.as_deref())?;
        require_positive_if_present("RegionalId", patch.regional_id)?;
        Ok(())
    }

    fn apply_dto(dto: CenterDto, model: &mut center::ActiveModel) {
        model.name = ActiveValue::Set(dto.name);
        model.code_center = ActiveValue::Set(dto.code_center);
        model.address = ActiveValue::Set(dto.address);
        model.regional_id = ActiveValue::Set(dto.regional_id);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: CenterPatch, model: &mut center::ActiveModel) {
        assign(&mut model.name, patch.name);
        assign(&mut model.code_center, patch.code_center);
        assign(&mut model.address, patch.address);
        assign(&mut model.regional_id, patch.regional_id);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut center::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Center {
    fn deactivate(model: &mut center::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct Sede;

impl Resource for Sede {
    const NAME: &'static str = "Sede";

    type Entity = sede::Entity;
    type Model = sede::Model;
    type ActiveModel = sede::ActiveModel;
    type PrimaryKey = sede::PrimaryKey;
    type Dto = SedeDto;

    fn id(dto: &SedeDto) -> i32 {
        dto.id
    }

    fn validate(dto: &SedeDto) -> Result<(), ValidationError> {
        require_text("Name", &dto.name)?;
        require_text("CodeSede", &dto.code_sede)?;
        require_positive("CenterId", dto.center_id)?;
        Ok(())
    }

    fn to_dto(model: sede::Model) -> SedeDto {
        SedeDto {
            id: model.id,
            name: model.name,
            code_sede: model.code_sede,
            address: model.address,
            phone_sede: model.phone_sede,
            email_contact: model.email_contact,
            center_id: model.center_id,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: SedeDto, now: NaiveDateTime) -> sede::ActiveModel {
        sede::ActiveModel {
            name: ActiveValue::Set(dto.name),
            code_sede: ActiveValue::Set(dto.code_sede),
            address: ActiveValue::Set(dto.address),
            phone_sede: ActiveValue::Set(dto.phone_sede),
            email_contact: ActiveValue::Set(dto.email_contact),
            center_id: ActiveValue::Set(dto.center_id),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Sede {
    type Patch = SedePatch;

    fn validate_patch(patch: &SedePatch) -> Result<(), ValidationError> {
        require_text_if_present("Name", patch.name.as_deref())?;
        require_text_if_present("CodeSede", patch.code_sede.as_deref())?;
        require_positive_if_present("CenterId", patch.center_id)?;
        Ok(())
    }

    fn apply_dto(dto: SedeDto, model: &mut sede::ActiveModel) {
        model.name = ActiveValue::Set(dto.name);
        model.code_sede = ActiveValue::Set(dto.code_sede);
        model.address = ActiveValue::Set(dto.address);
        model.phone_sede = ActiveValue::Set(dto.phone_sede);
        model.email_contact = ActiveValue::Set(dto.email_contact);
        model.center_id = ActiveValue::Set(dto.center_id);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: SedePatch, model: &mut sede::ActiveModel) {
        assign(&mut model.name, patch.name);
        assign(&mut model.code_sede, patch.code_sede);
        assign(&mut model.address, patch.address);
        assign(&mut model.phone_sede, patch.phone_sede);
        assign(&mut model.email_contact, patch.email_contact);
        assign(&mut model.center_id, patch.center_id);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut sede::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Sede {
    fn deactivate(model: &mut sede::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct UserSede;

impl Resource for UserSede {
    const NAME: &'static str = "UserSede";

    type Entity = user_sede::Entity;
    type Model = user_sede::Model;
    type ActiveModel = user_sede::ActiveModel;
    type PrimaryKey = user_sede::PrimaryKey;
    type Dto = UserSedeDto;

    fn id(dto: &UserSedeDto) -> i32 {
        dto.id
    }

    fn validate(dto: &UserSedeDto) -> Result<(), ValidationError> {
        require_text("StatusProcedure", &dto.status_procedure)?;
        require_positive("UserId", dto.user_id)?;
        require_positive("SedeId", dto.sede_id)?;
        Ok(())
    }

    fn to_dto(model: user_sede::Model) -> UserSedeDto {
        UserSedeDto {
            id: model.id,
            status_procedure: model.status_procedure,
            user_id: model.user_id,
            sede_id: model.sede_id,
        }
    }

    fn to_active_model(dto: UserSedeDto, now: NaiveDateTime) -> user_sede::ActiveModel {
        user_sede::ActiveModel {
            status_procedure: ActiveValue::Set(dto.status_procedure),
            user_id: ActiveValue::Set(dto.user_id),
            sede_id: ActiveValue::Set(dto.sede_id),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for UserSede {
    type Patch = UserSedePatch;

    fn validate_patch(patch: &UserSedePatch) -> Result<(), ValidationError> {
        require_text_if_present("StatusProcedure", patch.status_procedure.as_deref())?;
        require_positive_if_present("UserId", patch.user_id)?;
        require_positive_if_present("SedeId", patch.sede_id)?;
        Ok(())
    }

    fn apply_dto(dto: UserSedeDto, model: &mut user_sede::ActiveModel) {
        model.status_procedure = ActiveValue::Set(dto.status_procedure);
        model.user_id = ActiveValue::Set(dto.user_id);
        model.sede_id = ActiveValue::Set(dto.sede_id);
    }

    fn apply_patch(patch: UserSedePatch, model: &mut user_sede::ActiveModel) {
        assign(&mut model.status_procedure, patch.status_procedure);
        assign(&mut model.user_id, patch.user_id);
        assign(&mut model.sede_id, patch.sede_id);
    }

    fn touch(model: &mut user_sede::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}
