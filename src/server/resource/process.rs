//! Process catalogs and the aprendiz/process/instructor case record.

use chrono::NaiveDateTime;
use entity::{
    aprendiz_process_instructor, concept, enterprise, process, registery_sofia, state,
    type_modality, verification,
};
use sea_orm::ActiveValue;

use crate::{
    model::process::{
        AprendizProcessInstructorDto, AprendizProcessInstructorPatch, ConceptDto, ConceptPatch,
        EnterpriseDto, EnterprisePatch, ProcessDto, ProcessPatch, RegisterySofiaDto,
        RegisterySofiaPatch, StateDto, StatePatch, TypeModalityDto, TypeModalityPatch,
        VerificationDto, VerificationPatch,
    },
    server::{
        error::validation::ValidationError,
        resource::{assign, Resource, SoftDeletable, Updatable},
        service::validation::{
            require_positive, require_positive_if_present, require_text, require_text_if_present,
        },
    },
};

pub struct Process;

impl Resource for Process {
    const NAME: &'static str = "Process";

    type Entity = process::Entity;
    type Model = process::Model;
    type ActiveModel = process::ActiveModel;
    type PrimaryKey = process::PrimaryKey;
    type Dto = ProcessDto;

    fn id(dto: &ProcessDto) -> i32 {
        dto.id
    }

    fn validate(dto: &ProcessDto) -> Result<(), ValidationError> {
        require_text("TypeProcess", &dto.type_process)
    }

    fn to_dto(model: process::Model) -> ProcessDto {
        ProcessDto {
            id: model.id,
            type_process: model.type_process,
            start_aprendiz: model.start_aprendiz,
            observation: model.observation,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: ProcessDto, now: NaiveDateTime) -> process::ActiveModel {
        process::ActiveModel {
            type_process: ActiveValue::Set(dto.type_process),
            start_aprendiz: ActiveValue::Set(dto.start_aprendiz),
            observation: ActiveValue::Set(dto.observation),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Process {
    type Patch = ProcessPatch;

    fn validate_patch(patch: &ProcessPatch) -> Result<(), ValidationError> {
        require_text_if_present("TypeProcess", patch.type_process.as_deref())
    }

    fn apply_dto(dto: ProcessDto, model: &mut process::ActiveModel) {
        model.type_process = ActiveValue::Set(dto.type_process);
        model.start_aprendiz = ActiveValue::Set(dto.start_aprendiz);
        model.observation = ActiveValue::Set(dto.observation);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: ProcessPatch, model: &mut process::ActiveModel) {
        assign(&mut model.type_process, patch.type_process);
        assign(&mut model.start_aprendiz, patch.start_aprendiz);
        assign(&mut model.observation, patch.observation);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut process::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Process {
    fn deactivate(model: &mut process::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct TypeModality;

impl Resource for TypeModality {
    const NAME: &'static str = "TypeModality";

    type Entity = type_modality::Entity;
    type Model = type_modality::Model;
    type ActiveModel = type_modality::ActiveModel;
    type PrimaryKey = type_modality::PrimaryKey;
    type Dto = TypeModalityDto;

    fn id(dto: &TypeModalityDto) -> i32 {
        dto.id
    }

    fn validate(dto: &TypeModalityDto) -> Result<(), ValidationError> {
        require_text("Name", &dto.name)
    }

    fn to_dto(model: type_modality::Model) -> TypeModalityDto {
        TypeModalityDto {
            id: model.id,
            name: model.name,
            description: model.description,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: TypeModalityDto, now: NaiveDateTime) -> type_modality::ActiveModel {
        type_modality::ActiveModel {
            name: ActiveValue::Set(dto.name),
            description: ActiveValue::Set(dto.description),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for TypeModality {
    type Patch = TypeModalityPatch;

    fn validate_patch(patch: &TypeModalityPatch) -> Result<(), ValidationError> {
        require_text_if_present("Name", patch.name.as_deref())
    }

    fn apply_dto(dto: TypeModalityDto, model: &mut type_modality::ActiveModel) {
        model.name = ActiveValue::Set(dto.name);
        model.description = ActiveValue::Set(dto.description);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: TypeModalityPatch, model: &mut type_modality::ActiveModel) {
        assign(&mut model.name, patch.name);
        assign(&mut model.description, patch.description);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut type_modality::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for TypeModality {
    fn deactivate(model: &mut type_modality::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct RegisterySofia;

impl Resource for RegisterySofia {
    const NAME: &'static str = "RegisterySofia";

    type Entity = registery_sofia::Entity;
    type Model = registery_sofia::Model;
    type ActiveModel = registery_sofia::ActiveModel;
    type PrimaryKey = registery_sofia::PrimaryKey;
    type Dto = RegisterySofiaDto;

    fn id(dto: &RegisterySofiaDto) -> i32 {
        dto.id
    }

    fn validate(dto: &RegisterySofiaDto) -> Result<(), ValidationError> {
        require_text("Name", &dto.name)
    }

    fn to_dto(model: registery_sofia::Model) -> RegisterySofiaDto {
        RegisterySofiaDto {
            id: model.id,
            name: model.name,
            description: model.description,
            document: model.document,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: RegisterySofiaDto, now: NaiveDateTime) -> registery_sofia::ActiveModel {
        registery_sofia::ActiveModel {
            name: ActiveValue::Set(dto.name),
            description: ActiveValue::Set(dto.description),
            document: ActiveValue::Set(dto.document),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for RegisterySofia {
    type Patch = RegisterySofiaPatch;

    fn validate_patch(patch: &RegisterySofiaPatch) -> Result<(), ValidationError> {
        require_text_if_present("Name", patch.name.as_deref())
    }

    fn apply_dto(dto: RegisterySofiaDto, model: &mut registery_sofia::ActiveModel) {
        model.name = ActiveValue::Set(dto.name);
        model.description = ActiveValue::Set(dto.description);
        model.document = ActiveValue::Set(dto.document);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: RegisterySofiaPatch, model: &mut registery_sofia::ActiveModel) {
        assign(&mut model.name, patch.name);
        assign(&mut model.description, patch.description);
        assign(&mut model.document, patch.document);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut registery_sofia::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for RegisterySofia {
    fn deactivate(model: &mut registery_sofia::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct Concept;

impl Resource for Concept {
    const NAME: &'static str = "Concept";

    type Entity = concept::Entity;
    type Model = concept::Model;
    type ActiveModel = concept::ActiveModel;
    type PrimaryKey = concept::PrimaryKey;
    type Dto = ConceptDto;

    fn id(dto: &ConceptDto) -> i32 {
        dto.id
    }

    fn validate(dto: &ConceptDto) -> Result<(), ValidationError> {
        require_text("Name", &dto.name)
    }

    fn to_dto(model: concept::Model) -> ConceptDto {
        ConceptDto {
            id: model.id,
            name: model.name,
            observation: model.observation,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: ConceptDto, now: NaiveDateTime) -> concept::ActiveModel {
        concept::ActiveModel {
            name: ActiveValue::Set(dto.name),
            observation: ActiveValue::Set(dto.observation),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Concept {
    type Patch = ConceptPatch;

    fn validate_patch(patch: &ConceptPatch) -> Result<(), ValidationError> {
        require_text_if_present("Name", patch.name.as_deref())
    }

    fn apply_dto(dto: ConceptDto, model: &mut concept::ActiveModel) {
        model.name = ActiveValue::Set(dto.name);
        model.observation = ActiveValue::Set(dto.observation);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: ConceptPatch, model: &mut concept::ActiveModel) {
        assign(&mut model.name, patch.name);
        assign(&mut model.observation, patch.observation);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut concept::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Concept {
    fn deactivate(model: &mut concept::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct Enterprise;

impl Resource for Enterprise {
    const NAME: &'static str = "Enterprise";

    type Entity = enterprise::Entity;
    type Model = enterprise::Model;
    type ActiveModel = enterprise::ActiveModel;
    type PrimaryKey = enterprise::PrimaryKey;
    type Dto = EnterpriseDto;

    fn id(dto: &EnterpriseDto) -> i32 {
        dto.id
    }

    fn validate(dto: &EnterpriseDto) -> Result<(), ValidationError> {
        require_text("NameEnterprise", &dto.name_enterprise)?;
        require_text("NitEnterprise", &dto.nit_enterprise)?;
        Ok(())
    }

    fn to_dto(model: enterprise::Model) -> EnterpriseDto {
        EnterpriseDto {
            id: model.id,
            name_enterprise: model.name_enterprise,
            nit_enterprise: model.nit_enterprise,
            locate: model.locate,
            phone_enterprise: model.phone_enterprise,
            email_enterprise: model.email_enterprise,
            observation: model.observation,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: EnterpriseDto, now: NaiveDateTime) -> enterprise::ActiveModel {
        enterprise::ActiveModel {
            name_enterprise: ActiveValue::Set(dto.name_enterprise),
            nit_enterprise: ActiveValue::Set(dto.nit_enterprise),
            locate: ActiveValue::Set(dto.locate),
            phone_enterprise: ActiveValue::Set(dto.phone_enterprise),
            email_enterprise: ActiveValue::Set(dto.email_enterprise),
            observation: ActiveValue::Set(dto.observation),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Enterprise {
    type Patch = EnterprisePatch;

    fn validate_patch(patch: &EnterprisePatch) -> Result<(), ValidationError> {
        require_text_if_present("NameEnterprise", patch.name_enterprise.as_deref())?;
        require_text_if_present("NitEnterprise", patch.nit_enterprise.as_deref())?;
        Ok(())
    }

    fn apply_dto(dto: EnterpriseDto, model: &mut enterprise::ActiveModel) {
        model.name_enterprise = ActiveValue::Set(dto.name_enterprise);
        model.nit_enterprise = ActiveValue::Set(dto.nit_enterprise);
        model.locate = ActiveValue::Set(dto.locate);
        model.phone_enterprise = ActiveValue::Set(dto.phone_enterprise);
        model.email_enterprise = ActiveValue::Set(dto.email_enterprise);
        model.observation = ActiveValue::Set(dto.observation);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: EnterprisePatch, model: &mut enterprise::ActiveModel) {
        assign(&mut model.name_enterprise, patch.name_enterprise);
        assign(&mut model.nit_enterprise, patch.nit_enterprise);
        assign(&mut model.locate, patch.locate);
        assign(&mut model.phone_enterprise, patch.phone_enterprise);
        assign(&mut model.email_enterprise, patch.email_enterprise);
        assign(&mut model.observation, patch.observation);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut enterprise::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Enterprise {
    fn deactivate(model: &mut enterprise::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct State;

impl Resource for State {
    const NAME: &'static str = "State";

    type Entity = state::Entity;
    type Model = state::Model;
    type ActiveModel = state::ActiveModel;
    type PrimaryKey = state::PrimaryKey;
    type Dto = StateDto;

    fn id(dto: &StateDto) -> i32 {
        dto.id
    }

    fn validate(dto: &StateDto) -> Result<(), ValidationError> {
        require_text("TypeState", &dto.type_state)
    }

    fn to_dto(model: state::Model) -> StateDto {
        StateDto {
            id: model.id,
            type_state: model.type_state,
            description: model.description,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: StateDto, now: NaiveDateTime) -> state::ActiveModel {
        state::ActiveModel {
            type_state: ActiveValue::Set(dto.type_state),
            description: ActiveValue::Set(dto.description),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for State {
    type Patch = StatePatch;

    fn validate_patch(patch: &StatePatch) -> Result<(), ValidationError> {
        require_text_if_present("TypeState", patch.type_state.as_deref())
    }

    fn apply_dto(dto: StateDto, model: &mut state::ActiveModel) {
        model.type_state = ActiveValue::Set(dto.type_state);
        model.description = ActiveValue::Set(dto.description);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: StatePatch, model: &mut state::ActiveModel) {
        assign(&mut model.type_state, patch.type_state);
        assign(&mut model.description, patch.description);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut state::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for State {
    fn deactivate(model: &mut state::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct Verification;

impl Resource for Verification {
    const NAME: &'static str = "Verification";

    type Entity = verification::Entity;
    type Model = verification::Model;
    type ActiveModel = verification::ActiveModel;
    type PrimaryKey = verification::PrimaryKey;
    type Dto = VerificationDto;

    fn id(dto: &VerificationDto) -> i32 {
        dto.id
    }

    fn validate(dto: &VerificationDto) -> Result<(), ValidationError> {
        require_text("Name", &dto.name)
    }

    fn to_dto(model: verification::Model) -> VerificationDto {
        VerificationDto {
            id: model.id,
            name: model.name,
            observation: model.observation,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: VerificationDto, now: NaiveDateTime) -> verification::ActiveModel {
        verification::ActiveModel {
            name: ActiveValue::Set(dto.name),
            observation: ActiveValue::Set(dto.observation),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Verification {
    type Patch = VerificationPatch;

    fn validate_patch(patch: &VerificationPatch) -> Result<(), ValidationError> {
        require_text_if_present("Name", patch.name.as_deref())
    }

    fn apply_dto(dto: VerificationDto, model: &mut verification::ActiveModel) {
        model.name = ActiveValue::Set(dto.name);
        model.observation = ActiveValue::Set(dto.observation);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: VerificationPatch, model: &mut verification::ActiveModel) {
        assign(&mut model.name, patch.name);
        assign(&mut model.observation, patch.observation);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut verification::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Verification {
    fn deactivate(model: &mut verification::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct AprendizProcessInstructor;

impl Resource for AprendizProcessInstructor {
    const NAME: &'static str = "AprendizProcessInstructor";

    type Entity = aprendiz_process_instructor::Entity;
    type Model = aprendiz_process_instructor::Model;
    type ActiveModel = aprendiz_process_instructor::ActiveModel;
    type PrimaryKey = aprendiz_process_instructor::PrimaryKey;
    type Dto = AprendizProcessInstructorDto;

    fn id(dto: &AprendizProcessInstructorDto) -> i32 {
        dto.id
    }

    fn validate(dto: &AprendizProcessInstructorDto) -> Result<(), ValidationError> {
        require_positive("AprendizId", dto.aprendiz_id)?;
        require_positive("InstructorId", dto.instructor_id)?;
        require_positive("ProcessId", dto.process_id)?;
        require_positive("TypeModalityId", dto.type_modality_id)?;
        require_positive("RegisterySofiaId", dto.registery_sofia_id)?;
        require_positive("ConceptId", dto.concept_id)?;
        require_positive("EnterpriseId", dto.enterprise_id)?;
        require_positive("StateId", dto.state_id)?;
        require_positive("VerificationId", dto.verification_id)?;
        Ok(())
    }

    fn to_dto(model: aprendiz_process_instructor::Model) -> AprendizProcessInstructorDto {
        AprendizProcessInstructorDto {
            id: model.id,
            aprendiz_id: model.aprendiz_id,
            instructor_id: model.instructor_id,
            process_id: model.process_id,
            type_modality_id: model.type_modality_id,
            registery_sofia_id: model.registery_sofia_id,
            concept_id: model.concept_id,
            enterprise_id: model.enterprise_id,
            state_id: model.state_id,
            verification_id: model.verification_id,
        }
    }

    fn to_active_model(
        dto: AprendizProcessInstructorDto,
        now: NaiveDateTime,
    ) -> aprendiz_process_instructor::ActiveModel {
        aprendiz_process_instructor::ActiveModel {
            aprendiz_id: ActiveValue::Set(dto.aprendiz_id),
            instructor_id: ActiveValue::Set(dto.instructor_id),
            process_id: ActiveValue::Set(dto.process_id),
            type_modality_id: ActiveValue::Set(dto.type_modality_id),
            registery_sofia_id: ActiveValue::Set(dto.registery_sofia_id),
            concept_id: ActiveValue::Set(dto.concept_id),
            enterprise_id: ActiveValue::Set(dto.enterprise_id),
            state_id: ActiveValue::Set(dto.state_id),
            verification_id: ActiveValue::Set(dto.verification_id),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for AprendizProcessInstructor {
    type Patch = AprendizProcessInstructorPatch;

    fn validate_patch(patch: &AprendizProcessInstructorPatch) -> Result<(), ValidationError> {
        require_positive_if_present("AprendizId", patch.aprendiz_id)?;
        require_positive_if_present("InstructorId", patch.instructor_id)?;
        require_positive_if_present("ProcessId", patch.process_id)?;
        require_positive_if_present("TypeModalityId", patch.type_modality_id)?;
        require_positive_if_present("RegisterySofiaId", patch.registery_sofia_id)?;
        require_positive_if_present("ConceptId", patch.concept_id)?;
        require_positive_if_present("EnterpriseId", patch.enterprise_id)?;
        require_positive_if_present("StateId", patch.state_id)?;
        require_positive_if_present("VerificationId", patch.verification_id)?;
        Ok(())
    }

    fn apply_dto(
        dto: AprendizProcessInstructorDto,
        model: &mut aprendiz_process_instructor::ActiveModel,
    ) {
        model.aprendiz_id = ActiveValue::Set(dto.aprendiz_id);
        model.instructor_id = ActiveValue::Set(dto.instructor_id);
        model.process_id = ActiveValue::Set(dto.process_id);
        model.type_modality_id = ActiveValue::Set(dto.type_modality_id);
        model.registery_sofia_id = ActiveValue::Set(dto.registery_sofia_id);
        model.concept_id = ActiveValue::Set(dto.concept_id);
        model.enterprise_id = ActiveValue::Set(dto.enterprise_id);
        model.state_id = ActiveValue::Set(dto.state_id);
        model.verification_id = ActiveValue::Set(dto.verification_id);
    }

    fn apply_patch(
        patch: AprendizProcessInstructorPatch,
        model: &mut aprendiz_process_instructor::ActiveModel,
    ) {
        assign(&mut model.aprendiz_id, patch.aprendiz_id);
        assign(&mut model.instructor_id, patch.instructor_id);
        assign(&mut model.process_id, patch.process_id);
        assign(&mut model.type_modality_id, patch.type_modality_id);
        assign(&mut model.registery_sofia_id, patch.registery_sofia_id);
        assign(&mut model.concept_id, patch.concept_id);
        assign(&mut model.enterprise_id, patch.enterprise_id);
        assign(&mut model.state_id, patch.state_id);
        assign(&mut model.verification_id, patch.verification_id);
    }

    fn touch(model: &mut aprendiz_process_instructor::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}
