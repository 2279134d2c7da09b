use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{message::MessageRepository, user::UserRepository},
    error::{validation::ValidationError, Error},
    model::{db::MessageModel, message::NewMessage},
};

pub struct MessageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MessageService<'a> {
    /// Creates a new instance of [`MessageService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an unresolved message from an existing user
    pub async fn create(&self, new_message: NewMessage) -> Result<MessageModel, Error> {
        let subject = new_message.subject.trim();
        if subject.is_empty() {
            return Err(ValidationError::EmptyField("subject").into());
        }

        let txn = self.db.begin().await?;

        if !UserRepository::new(&txn).exists(new_message.author_id).await? {
            return Err(ValidationError::MissingUser(new_message.author_id).into());
        }

        let message = MessageRepository::new(&txn)
            .create(new_message.author_id, subject, &new_message.body)
            .await?;

        txn.commit().await?;

        tracing::debug!(
            "Created message ID {} from user ID {}",
            message.id,
            message.author_id
        );

        Ok(message)
    }

    /// Marks a message as resolved
    pub async fn resolve(&self, message_id: i32) -> Result<MessageModel, Error> {
        let message = MessageRepository::new(self.db)
            .set_status(message_id, true)
            .await?
            .ok_or(ValidationError::MissingMessage(message_id))?;

        tracing::debug!("Resolved message ID {}", message.id);

        Ok(message)
    }

    pub async fn get_by_id(&self, message_id: i32) -> Result<Option<MessageModel>, Error> {
        Ok(MessageRepository::new(self.db).get_by_id(message_id).await?)
    }

    pub async fn list_unresolved(&self) -> Result<Vec<MessageModel>, Error> {
        Ok(MessageRepository::new(self.db).list_unresolved().await?)
    }

    pub async fn delete(&self, message_id: i32) -> Result<bool, Error> {
        let result = MessageRepository::new(self.db).delete(message_id).await?;

        Ok(result.rows_affected > 0)
    }
}
