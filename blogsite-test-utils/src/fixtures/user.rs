//! User fixture utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

/// Placeholder hash that no password verifies against.
pub static UNUSABLE_PASSWORD: &str = "!unusable";

impl TestContext {
    pub fn user<'a>(&'a self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active, non-staff user with email `<username>@example.com`.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created user
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the username is already taken
    pub async fn insert_user(&self, username: &str) -> Result<UserModel, TestError> {
        Ok(
            entity::prelude::BlogsiteUser::insert(entity::blogsite_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                email: ActiveValue::Set(format!("{}@example.com", username)),
                password: ActiveValue::Set(UNUSABLE_PASSWORD.to_string()),
                is_active: ActiveValue::Set(true),
                is_staff: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
