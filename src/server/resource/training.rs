//! Programs and the aprendiz and instructor profiles enrolled in them.

use chrono::NaiveDateTime;
use entity::{aprendiz, aprendiz_program, instructor, instructor_program, program};
use sea_orm::ActiveValue;

use crate::{
    model::training::{
        AprendizDto, AprendizPatch, AprendizProgramDto, AprendizProgramPatch, InstructorDto,
        InstructorPatch, InstructorProgramDto, InstructorProgramPatch, ProgramDto, ProgramPatch,
    },
    server::{
        error::validation::ValidationError,
        resource::{assign, Resource, SoftDeletable, Updatable},
        service::validation::{
            require_positive, require_positive_if_present, require_text, require_text_if_present,
        },
    },
};

pub struct Program;

impl Resource for Program {
    const NAME: &'static str = "Program";

    type Entity = program::Entity;
    type Model = program::Model;
    type ActiveModel = program::ActiveModel;
    type PrimaryKey = program::PrimaryKey;
    type Dto = ProgramDto;

    fn id(dto: &ProgramDto) -> i32 {
        dto.id
    }

    fn validate(dto: &ProgramDto) -> Result<(), ValidationError> {
        require_positive("CodeProgram", dto.code_program)?;
        require_text("Name", &dto.name)?;
        require_text("TypeProgram", &dto.type_program)?;
        Ok(())
    }

    fn to_dto(model: program::Model) -> ProgramDto {
        ProgramDto {
            id: model.id,
            code_program: model.code_program,
            name: model.name,
            type_program: model.type_program,
            description: model.description,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: ProgramDto, now: NaiveDateTime) -> program::ActiveModel {
        program::ActiveModel {
            code_program: ActiveValue::Set(dto.code_program),
            name: ActiveValue::Set(dto.name),
            type_program: ActiveValue::Set(dto.type_program),
            description: ActiveValue::Set(dto.description),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Program {
    type Patch = ProgramPatch;

    fn validate_patch(patch: &ProgramPatch) -> Result<(), ValidationError> {
        require_positive_if_present("CodeProgram", patch.code_program)?;
        require_text_if_present("Name", patch.name.as_deref())?;
        require_text_if_present("TypeProgram", patch.type_program.as_deref())?;
        Ok(())
    }

    fn apply_dto(dto: ProgramDto, model: &mut program::ActiveModel) {
        model.code_program = ActiveValue::Set(dto.code_program);
        model.name = ActiveValue::Set(dto.name);
        model.type_program = ActiveValue::Set(dto.type_program);
        model.description = ActiveValue::Set(dto.description);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: ProgramPatch, model: &mut program::ActiveModel) {
        assign(&mut model.code_program, patch.code_program);
        assign(&mut model.name, patch.name);
        assign(&mut model.type_program, patch.type_program);
        assign(&mut model.description, patch.description);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut program::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Program {
    fn deactivate(model: &mut program::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct Aprendiz;

impl Resource for Aprendiz {
    const NAME: &'static str = "Aprendiz";

    type Entity = aprendiz::Entity;
    type Model = aprendiz::Model;
    type ActiveModel = aprendiz::ActiveModel;
    type PrimaryKey = aprendiz::PrimaryKey;
    type Dto = AprendizDto;

    fn id(dto: &AprendizDto) -> i32 {
        dto.id
    }

    fn validate(dto: &AprendizDto) -> Result<(), ValidationError> {
        require_text("PreviousProgram", &dto.previous_program)?;
        require_positive("UserId", dto.user_id)?;
        Ok(())
    }

    fn to_dto(model: aprendiz::Model) -> AprendizDto {
        AprendizDto {
            id: model.id,
            previous_program: model.previous_program,
            user_id: model.user_id,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: AprendizDto, now: NaiveDateTime) -> aprendiz::ActiveModel {
        aprendiz::ActiveModel {
            previous_program: ActiveValue::Set(dto.previous_program),
            user_id: ActiveValue::Set(dto.user_id),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Aprendiz {
    type Patch = AprendizPatch;

    fn validate_patch(patch: &AprendizPatch) -> Result<(), ValidationError> {
        require_text_if_present("PreviousProgram", patch.previous_program.as_deref())?;
        require_positive_if_present("UserId", patch.user_id)?;
        Ok(())
    }

    fn apply_dto(dto: AprendizDto, model: &mut aprendiz::ActiveModel) {
        model.previous_program = ActiveValue::Set(dto.previous_program);
        model.user_id = ActiveValue::Set(dto.user_id);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: AprendizPatch, model: &mut aprendiz::ActiveModel) {
        assign(&mut model.previous_program, patch.previous_program);
        assign(&mut model.user_id, patch.user_id);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut aprendiz::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Aprendiz {
    fn deactivate(model: &mut aprendiz::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct Instructor;

impl Resource for Instructor {
    const NAME: &'static str = "Instructor";

    type Entity = instructor::Entity;
    type Model = instructor::Model;
    type ActiveModel = instructor::ActiveModel;
    type PrimaryKey = instructor::PrimaryKey;
    type Dto = InstructorDto;

    fn id(dto: &InstructorDto) -> i32 {
        dto.id
    }

    fn validate(dto: &InstructorDto) -> Result<(), ValidationError> {
        require_positive("UserId", dto.user_id)
    }

    fn to_dto(model: instructor::Model) -> InstructorDto {
        InstructorDto {
            id: model.id,
            user_id: model.user_id,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: InstructorDto, now: NaiveDateTime) -> instructor::ActiveModel {
        instructor::ActiveModel {
            user_id: ActiveValue::Set(dto.user_id),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for Instructor {
    type Patch = InstructorPatch;

    fn validate_patch(patch: &InstructorPatch) -> Result<(), ValidationError> {
        require_positive_if_present("UserId", patch.user_id)
    }

    fn apply_dto(dto: InstructorDto, model: &mut instructor::ActiveModel) {
        model.user_id = ActiveValue::Set(dto.user_id);
        assign(&mut model.active, dto.active);
    }

    fn apply_patch(patch: InstructorPatch, model: &mut instructor::ActiveModel) {
        assign(&mut model.user_id, patch.user_id);
        assign(&mut model.active, patch.active);
    }

    fn touch(model: &mut instructor::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

impl SoftDeletable for Instructor {
    fn deactivate(model: &mut instructor::ActiveModel, now: NaiveDateTime) {
        model.active = ActiveValue::Set(false);
        model.delete_date = ActiveValue::Set(Some(now));
    }
}

pub struct AprendizProgram;

impl Resource for AprendizProgram {
    const NAME: &'static str = "AprendizProgram";

    type Entity = aprendiz_program::Entity;
    type Model = aprendiz_program::Model;
    type ActiveModel = aprendiz_program::ActiveModel;
    type PrimaryKey = aprendiz_program::PrimaryKey;
    type Dto = AprendizProgramDto;

    fn id(dto: &AprendizProgramDto) -> i32 {
        dto.id
    }

    fn validate(dto: &AprendizProgramDto) -> Result<(), ValidationError> {
        require_positive("AprendizId", dto.aprendiz_id)?;
        require_positive("ProgramId", dto.program_id)?;
        Ok(())
    }

    fn to_dto(model: aprendiz_program::Model) -> AprendizProgramDto {
        AprendizProgramDto {
            id: model.id,
            aprendiz_id: model.aprendiz_id,
            program_id: model.program_id,
        }
    }

    fn to_active_model(
        dto: AprendizProgramDto,
        now: NaiveDateTime,
    ) -> aprendiz_program::ActiveModel {
        aprendiz_program::ActiveModel {
            aprendiz_id: ActiveValue::Set(dto.aprendiz_id),
            program_id: ActiveValue::Set(dto.program_id),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for AprendizProgram {
    type Patch = AprendizProgramPatch;

    fn validate_patch(patch: &AprendizProgramPatch) -> Result<(), ValidationError> {
        require_positive_if_present("AprendizId", patch.aprendiz_id)?;
        require_positive_if_present("ProgramId", patch.program_id)?;
        Ok(())
    }

    fn apply_dto(dto: AprendizProgramDto, model: &mut aprendiz_program::ActiveModel) {
        model.aprendiz_id = ActiveValue::Set(dto.aprendiz_id);
        model.program_id = ActiveValue::Set(dto.program_id);
    }

    fn apply_patch(patch: AprendizProgramPatch, model: &mut aprendiz_program::ActiveModel) {
        assign(&mut model.aprendiz_id, patch.aprendiz_id);
        assign(&mut model.program_id, patch.program_id);
    }

    fn touch(model: &mut aprendiz_program::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}

pub struct InstructorProgram;

impl Resource for InstructorProgram {
    const NAME: &'static str = "InstructorProgram";

    type Entity = instructor_program::Entity;
    type Model = instructor_program::Model;
    type ActiveModel = instructor_program::ActiveModel;
    type PrimaryKey = instructor_program::PrimaryKey;
    type Dto = InstructorProgramDto;

    fn id(dto: &InstructorProgramDto) -> i32 {
        dto.id
    }

    fn validate(dto: &InstructorProgramDto) -> Result<(), ValidationError> {
        require_positive("InstructorId", dto.instructor_id)?;
        require_positive("ProgramId", dto.program_id)?;
        Ok(())
    }

    fn to_dto(model: instructor_program::Model) -> InstructorProgramDto {
        InstructorProgramDto {
            id: model.id,
            instructor_id: model.instructor_id,
            program_id: model.program_id,
        }
    }

    fn to_active_model(
        dto: InstructorProgramDto,
        now: NaiveDateTime,
    ) -> instructor_program::ActiveModel {
        instructor_program::ActiveModel {
            instructor_id: ActiveValue::Set(dto.instructor_id),
            program_id: ActiveValue::Set(dto.program_id),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}

impl Updatable for InstructorProgram {
    type Patch = InstructorProgramPatch;

    fn validate_patch(patch: &InstructorProgramPatch) -> Result<(), ValidationError> {
        require_positive_if_present("InstructorId", patch.instructor_id)?;
        require_positive_if_present("ProgramId", patch.program_id)?;
        Ok(())
    }

    fn apply_dto(dto: InstructorProgramDto, model: &mut instructor_program::ActiveModel) {
        model.instructor_id = ActiveValue::Set(dto.instructor_id);
        model.program_id = ActiveValue::Set(dto.program_id);
    }

    fn apply_patch(patch: InstructorProgramPatch, model: &mut instructor_program::ActiveModel) {
        assign(&mut model.instructor_id, patch.instructor_id);
        assign(&mut model.program_id, patch.program_id);
    }

    fn touch(model: &mut instructor_program::ActiveModel, now: NaiveDateTime) {
        model.update_date = ActiveValue::Set(Some(now));
    }
}
