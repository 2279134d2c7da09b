use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct MessageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MessageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an unresolved message
    pub async fn create(
        &self,
        author_id: i32,
        subject: &str,
        body: &str,
    ) -> Result<entity::message::Model, DbErr> {
        let message = entity::message::ActiveModel {
            author_id: ActiveValue::Set(author_id),
            subject: ActiveValue::Set(subject.to_string()),
            body: ActiveValue::Set(body.to_string()),
            status: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        message.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        message_id: i32,
    ) -> Result<Option<entity::message::Model>, DbErr> {
        entity::prelude::Message::find_by_id(message_id)
            .one(self.db)
            .await
    }

    /// Sets the resolved flag of a message
    ///
    /// Returns `None` if no message exists with the provided ID.
    pub async fn set_status(
        &self,
        message_id: i32,
        resolved: bool,
    ) -> Result<Option<entity::message::Model>, DbErr> {
        let message = match entity::prelude::Message::find_by_id(message_id)
            .one(self.db)
            .await?
        {
            Some(message) => message,
            None => return Ok(None),
        };

        let mut message_am: entity::message::ActiveModel = message.into();
        message_am.status = ActiveValue::Set(resolved);

        let message = message_am.update(self.db).await?;

        Ok(Some(message))
    }

    /// Lists unresolved messages, oldest first
    pub async fn list_unresolved(&self) -> Result<Vec<entity::message::Model>, DbErr> {
        entity::prelude::Message::find()
            .filter(entity::message::Column::Status.eq(false))
            .order_by_asc(entity::message::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, message_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Message::delete_by_id(message_id)
            .exec(self.db)
            .await
    }
}
