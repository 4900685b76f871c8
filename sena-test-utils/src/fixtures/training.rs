use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn training(&self) -> TrainingFixtures<'_> {
        TrainingFixtures { test: self }
    }
}

pub struct TrainingFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> TrainingFixtures<'a> {
    pub async fn insert_program(
        &self,
        code_program: i64,
    ) -> Result<entity::program::Model, TestError> {
        Ok(entity::prelude::Program::insert(entity::program::ActiveModel {
            code_program: ActiveValue::Set(code_program),
            name: ActiveValue::Set("Analisis y Desarrollo de Software".to_string()),
            type_program: ActiveValue::Set("Tecnologo".to_string()),
            description: ActiveValue::Set(String::new()),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_aprendiz(
        &self,
        user_id: i32,
    ) -> Result<entity::aprendiz::Model, TestError> {
        Ok(entity::prelude::Aprendiz::insert(entity::aprendiz::ActiveModel {
            previous_program: ActiveValue::Set("Ninguno".to_string()),
            user_id: ActiveValue::Set(user_id),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_instructor(
        &self,
        user_id: i32,
    ) -> Result<entity::instructor::Model, TestError> {
        Ok(
            entity::prelude::Instructor::insert(entity::instructor::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                active: ActiveValue::Set(true),
                create_date: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
