use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter,
};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    ///
    /// `password` must already be encoded; it is stored as given.
    pub async fn create(
        &self,
        username: &str,
        email: &str,
        password: &str,
        is_staff: bool,
    ) -> Result<entity::blogsite_user::Model, DbErr> {
        let user = entity::blogsite_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            email: ActiveValue::Set(email.to_string()),
            password: ActiveValue::Set(password.to_string()),
            is_active: ActiveValue::Set(true),
            is_staff: ActiveValue::Set(is_staff),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::blogsite_user::Model>, DbErr> {
        entity::prelude::BlogsiteUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::blogsite_user::Model>, DbErr> {
        entity::prelude::BlogsiteUser::find()
            .filter(entity::blogsite_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    pub async fn get_by_email(
        &self,
        email: &str,
    ) -> Result<Option<entity::blogsite_user::Model>, DbErr> {
        entity::prelude::BlogsiteUser::find()
            .filter(entity::blogsite_user::Column::Email.eq(email))
            .one(self.db)
            .await
    }

    pub async fn exists(&self, user_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::BlogsiteUser::find_by_id(user_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a user
    ///
    /// Returns OK regardless of user existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, user_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::BlogsiteUser::delete_by_id(user_id)
            .exec(self.db)
            .await
    }
}
