use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn security(&self) -> SecurityFixtures<'_> {
        SecurityFixtures { test: self }
    }
}

pub struct SecurityFixtures<'a> {
    test: &'a TestContext,
}

impl<'a> SecurityFixtures<'a> {
    /// Inserts a person whose identification number is derived from `seed` so several people
    /// can coexist in one test.
    pub async fn insert_person(&self, seed: i32) -> Result<entity::person::Model, TestError> {
        Ok(entity::prelude::Person::insert(entity::person::ActiveModel {
            first_name: ActiveValue::Set("Laura".to_string()),
            second_name: ActiveValue::Set(None),
            first_last_name: ActiveValue::Set("Gomez".to_string()),
            second_last_name: ActiveValue::Set(None),
            phone_number: ActiveValue::Set("3001234567".to_string()),
            email: ActiveValue::Set(format!("person{}@sena.edu.co", seed)),
            type_identification: ActiveValue::Set("CC".to_string()),
            number_identification: ActiveValue::Set(format!("10{:08}", seed)),
            signing: ActiveValue::Set(None),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_user(&self, person_id: i32) -> Result<entity::user::Model, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(format!("user{}", person_id)),
            email: ActiveValue::Set(format!("user{}@sena.edu.co", person_id)),
            password: ActiveValue::Set("password".to_string()),
            person_id: ActiveValue::Set(person_id),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    /// Inserts a person together with the user account owning it.
    pub async fn insert_user_with_person(
        &self,
        seed: i32,
    ) -> Result<(entity::user::Model, entity::person::Model), TestError> {
        let person = self.insert_person(seed).await?;
        let user = self.insert_user(person.id).await?;

        Ok((user, person))
    }

    pub async fn insert_rol(&self, type_rol: &str) -> Result<entity::rol::Model, TestError> {
        Ok(entity::prelude::Rol::insert(entity::rol::ActiveModel {
            type_rol: ActiveValue::Set(type_rol.to_string()),
            description: ActiveValue::Set(format!("{} role", type_rol)),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_user_rol(
        &self,
        user_id: i32,
        rol_id: i32,
    ) -> Result<entity::user_rol::Model, TestError> {
        Ok(entity::prelude::UserRol::insert(entity::user_rol::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            rol_id: ActiveValue::Set(rol_id),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_form(&self, name: &str) -> Result<entity::form::Model, TestError> {
        Ok(entity::prelude::Form::insert(entity::form::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(String::new()),
            cuestion: ActiveValue::Set(String::new()),
            type_cuestion: ActiveValue::Set(String::new()),
            answer: ActiveValue::Set(String::new()),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }

    pub async fn insert_module(&self, name: &str) -> Result<entity::module::Model, TestError> {
        Ok(entity::prelude::Module::insert(entity::module::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            description: ActiveValue::Set(String::new()),
            active: ActiveValue::Set(true),
            create_date: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .exec_with_returning(&self.test.db)
        .await?)
    }
}
