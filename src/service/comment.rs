use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{blog::BlogRepository, comment::CommentRepository, user::UserRepository},
    error::{validation::ValidationError, Error},
    model::db::CommentModel,
};

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    /// Creates a new instance of [`CommentService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a comment to a blog
    ///
    /// # Returns
    /// - `Ok(CommentModel)` - The created comment
    /// - `Err(Error::ValidationError(EmptyField))` - The body is blank
    /// - `Err(Error::ValidationError(MissingBlog | MissingUser))` - Blog or author does not exist
    pub async fn create(
        &self,
        blog_id: i32,
        author_id: i32,
        body: &str,
    ) -> Result<CommentModel, Error> {
        if body.trim().is_empty() {
            return Err(ValidationError::EmptyField("body").into());
        }

        let txn = self.db.begin().await?;

        if !BlogRepository::new(&txn).exists(blog_id).await? {
            return Err(ValidationError::MissingBlog(blog_id).into());
        }

        if !UserRepository::new(&txn).exists(author_id).await? {
            return Err(ValidationError::MissingUser(author_id).into());
        }

        let comment = CommentRepository::new(&txn)
            .create(blog_id, author_id, body)
            .await?;

        txn.commit().await?;

        tracing::debug!("Created comment ID {} on blog ID {}", comment.id, blog_id);

        Ok(comment)
    }

    /// Lists the comments of a blog in creation order
    pub async fn for_blog(&self, blog_id: i32) -> Result<Vec<CommentModel>, Error> {
        Ok(CommentRepository::new(self.db).get_for_blog(blog_id).await?)
    }

    pub async fn delete(&self, comment_id: i32) -> Result<bool, Error> {
        let result = CommentRepository::new(self.db).delete(comment_id).await?;

        Ok(result.rows_affected > 0)
    }
}
