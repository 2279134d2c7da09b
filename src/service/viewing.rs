use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::{blog::BlogRepository, blog_viewing::BlogViewingRepository},
    error::{validation::ValidationError, Error},
    model::db::BlogViewingModel,
};

pub struct ViewingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ViewingService<'a> {
    /// Creates a new instance of [`ViewingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a view of a blog
    ///
    /// Inserts the viewing record and increments the blog's view count in one
    /// transaction, so the view count always equals the number of viewing records.
    ///
    /// # Returns
    /// - `Ok(BlogViewingModel)` - The recorded viewing
    /// - `Err(Error::ValidationError(MissingBlog))` - No blog exists with `blog_id`
    /// - `Err(Error::DbErr)` - Any other database failure, nothing is persisted
    pub async fn record_view(&self, blog_id: i32) -> Result<BlogViewingModel, Error> {
        let txn = self.db.begin().await?;

        let update_result = BlogRepository::new(&txn)
            .increment_view_count(blog_id)
            .await?;

        if update_result.rows_affected == 0 {
            return Err(ValidationError::MissingBlog(blog_id).into());
        }

        let viewing = BlogViewingRepository::new(&txn).create(blog_id).await?;

        txn.commit().await?;

        tracing::debug!("Recorded viewing ID {} of blog ID {}", viewing.id, blog_id);

        Ok(viewing)
    }

    /// Gets the view count of a blog
    pub async fn view_count(&self, blog_id: i32) -> Result<i32, Error> {
        match BlogRepository::new(self.db).get_by_id(blog_id).await? {
            Some(blog) => Ok(blog.view_count),
            None => Err(ValidationError::MissingBlog(blog_id).into()),
        }
    }
}
