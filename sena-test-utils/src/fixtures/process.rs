use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn process(&self) -> ProcessFixtures<'_> {
        ProcessFixtures { test: self }
    }
}

pub struct ProcessFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> ProcessFixtures<'a> {
    pub async fn insert_concept(&self, name: &str) -> Result<entity::concept::Model, TestError> {
        Ok(entity::prelude::Concept::insert(entity::concept::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            observation: ActiveValue::Set(String::new()),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_state(&self, type_state: &str) -> Result<entity::state::Model, TestError> {
        Ok(entity::prelude::State::insert(entity::state::ActiveModel {
            type_state: ActiveValue::Set(type_state.to_string()),
            description: ActiveValue::Set(String::new()),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_change_log(
        &self,
        table_name: &str,
        id_table: i32,
    ) -> Result<entity::change_log::Model, TestError> {
        Ok(
            entity::prelude::ChangeLog::insert(entity::change_log::ActiveModel {
                table_name: ActiveValue::Set(table_name.to_string()),
                id_table: ActiveValue::Set(id_table),
                old_values: ActiveValue::Set(String::new()),
                new_values: ActiveValue::Set("{}".to_string()),
                action: ActiveValue::Set("INSERT".to_string()),
                user_name: ActiveValue::Set("admin".to_string()),
                active: ActiveValue::Set(true),
                create_date: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.test.db)
            .await?,
        )
    }
}
