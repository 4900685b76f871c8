use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn organization(&self) -> OrganizationFixtures<'_> {
        OrganizationFixtures { test: self }
    }
}

pub struct OrganizationFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> OrganizationFixtures<'a> {
    pub async fn insert_regional(
        &self,
        code_regional: &str,
    ) -> Result<entity::regional::Model, TestError> {
        Ok(entity::prelude::Regional::insert(entity::regional::ActiveModel {
            name: ActiveValue::Set(format!("Regional {}", code_regional)),
            code_regional: ActiveValue::Set(code_regional.to_string()),
            description: ActiveValue::Set(String::new()),
            address: ActiveValue::Set(String::new()),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_center(
        &self,
        regional_id: i32,
        code_center: &str,
    ) -> Result<entity::center::Model, TestError> {
        Ok(entity::prelude::Center::insert(entity::center::ActiveModel {
            name: ActiveValue::Set(format!("Centro {}", code_center)),
            code_center: ActiveValue::Set(code_center.to_string()),
            address: ActiveValue::Set(String::new()),
            regional_id: ActiveValue::Set(regional_id),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_sede(
        &self,
        center_id: i32,
        code_sede: &str,
    ) -> Result<entity::sede::Model, TestError> {
        Ok(entity::prelude::Sede::insert(entity::sede::ActiveModel {
            name: ActiveValue::Set(format!("Sede {}", code_sede)),
            code_sede: ActiveValue::Set(code_sede.to_string()),
            address: ActiveValue::Set(String::new()),
            phone_sede: ActiveValue::Set(String::new()),
            email_contact: ActiveValue::Set(String::new()),
            center_id: ActiveValue::Set(center_id),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }
}
