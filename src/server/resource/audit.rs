//! Append-only change log entries.

use chrono::NaiveDateTime;
use entity::change_log;
use sea_orm::ActiveValue;

use crate::{
    model::audit::ChangeLogDto,
    server::{
        error::validation::ValidationError,
        resource::Resource,
        service::validation::{require_positive, require_text},
    },
};

pub struct ChangeLog;

impl Resource for ChangeLog {
    const NAME: &'static str = "ChangeLog";

    type Entity = change_log::Entity;
    type Model = change_log::Model;
    type ActiveModel = change_log::ActiveModel;
    type PrimaryKey = change_log::PrimaryKey;
    type Dto = ChangeLogDto;

    fn id(dto: &ChangeLogDto) -> i32 {
        dto.id
    }

    fn validate(dto: &ChangeLogDto) -> Result<(), ValidationError> {
        require_text("TableName", &dto.table_name)?;
        require_positive("IdTable", dto.id_table)?;
        require_text("Action", &dto.action)?;
        Ok(())
    }

    fn to_dto(model: change_log::Model) -> ChangeLogDto {
        ChangeLogDto {
            id: model.id,
            table_name: model.table_name,
            id_table: model.id_table,
            old_values: model.old_values,
            new_values: model.new_values,
            action: model.action,
            user_name: model.user_name,
            active: Some(model.active),
        }
    }

    fn to_active_model(dto: ChangeLogDto, now: NaiveDateTime) -> change_log::ActiveModel {
        change_log::ActiveModel {
            table_name: ActiveValue::Set(dto.table_name),
            id_table: ActiveValue::Set(dto.id_table),
            old_values: ActiveValue::Set(dto.old_values),
            new_values: ActiveValue::Set(dto.new_values),
            action: ActiveValue::Set(dto.action),
            user_name: ActiveValue::Set(dto.user_name),
            active: ActiveValue::Set(dto.active.unwrap_or(true)),
            create_date: ActiveValue::Set(now),
            ..Default::default()
        }
    }
}
