use dioxus_logger::tracing;
use entity::sea_orm_active_enums::BlogStatus;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    data::{
        blog::BlogRepository, category::CategoryRepository, comment::CommentRepository,
        user::UserRepository,
    },
    error::{validation::ValidationError, Error},
    model::{
        blog::NewBlog,
        db::{BlogModel, CategoryModel, CommentModel},
    },
    service::{
        retry::RetryContext,
        slug::{slug_conflict, SlugService, SlugTarget},
    },
};

pub struct BlogService<'a> {
    db: &'a DatabaseConnection,
    slug_max_attempts: u32,
}

impl<'a> BlogService<'a> {
    /// Creates a new instance of [`BlogService`]
    pub fn new(db: &'a DatabaseConnection, slug_max_attempts: u32) -> Self {
        Self {
            db,
            slug_max_attempts,
        }
    }

    /// Creates a blog with a unique slug derived from its title
    ///
    /// The author and every category are validated, the slug allocated, the blog
    /// inserted and its categories linked in one transaction. A slug taken by a
    /// concurrent insert retries the whole transaction.
    ///
    /// # Returns
    /// - `Ok(BlogModel)` - The created blog
    /// - `Err(Error::ValidationError(EmptyField))` - The title is blank
    /// - `Err(Error::ValidationError(MissingUser))` - The author does not exist
    /// - `Err(Error::ValidationError(MissingCategory))` - A category does not exist
    /// - `Err(Error::ValidationError(EmptySlug | SlugExhausted | SlugTaken))` - No slug could be allocated
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn create(&self, new_blog: NewBlog) -> Result<BlogModel, Error> {
        let title = new_blog.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyField("title").into());
        }

        let new_blog = NewBlog { title, ..new_blog };

        let ctx = RetryContext::new();

        let db = self.db.clone();
        let slug_max_attempts = self.slug_max_attempts;

        ctx.execute_with_retry(&format!("creation of blog {:?}", new_blog.title), || {
            let db = db.clone();
            let new_blog = new_blog.clone();

            Box::pin(async move {
                let txn = db.begin().await?;

                validate_references(&txn, &new_blog).await?;

                let slug = SlugService::new(&txn, slug_max_attempts)
                    .allocate(SlugTarget::Blog, &new_blog.title)
                    .await?;

                let blog_repo = BlogRepository::new(&txn);
                let blog = blog_repo
                    .create(
                        &new_blog.title,
                        &slug,
                        &new_blog.description,
                        new_blog.status,
                        new_blog.author_id,
                    )
                    .await
                    .map_err(|e| slug_conflict(e, &slug))?;

                for &category_id in &new_blog.category_ids {
                    blog_repo.add_category(blog.id, category_id).await?;
                }

                txn.commit().await?;

                tracing::debug!("Created blog {} with slug {}", blog.title, blog.slug);

                Ok::<_, Error>(blog)
            })
        })
        .await
    }

    pub async fn get_by_id(&self, blog_id: i32) -> Result<Option<BlogModel>, Error> {
        Ok(BlogRepository::new(self.db).get_by_id(blog_id).await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<BlogModel>, Error> {
        Ok(BlogRepository::new(self.db).get_by_slug(slug).await?)
    }

    /// Lists blogs with status active, ordered by ID
    pub async fn active(&self) -> Result<Vec<BlogModel>, Error> {
        Ok(BlogRepository::new(self.db).find_active().await?)
    }

    /// Lists blogs with status canceled, ordered by ID
    pub async fn canceled(&self) -> Result<Vec<BlogModel>, Error> {
        Ok(BlogRepository::new(self.db).find_canceled().await?)
    }

    pub async fn list(&self) -> Result<Vec<BlogModel>, Error> {
        Ok(BlogRepository::new(self.db).list().await?)
    }

    pub async fn activate(&self, blog_id: i32) -> Result<BlogModel, Error> {
        self.set_status(blog_id, BlogStatus::Active).await
    }

    pub async fn cancel(&self, blog_id: i32) -> Result<BlogModel, Error> {
        self.set_status(blog_id, BlogStatus::Canceled).await
    }

    pub async fn set_status(&self, blog_id: i32, status: BlogStatus) -> Result<BlogModel, Error> {
        match BlogRepository::new(self.db).set_status(blog_id, status).await? {
            Some(blog) => Ok(blog),
            None => Err(ValidationError::MissingBlog(blog_id).into()),
        }
    }

    /// Tags a blog with a category
    ///
    /// Adding a category the blog already has is a no-op and returns `false`.
    pub async fn add_category(&self, blog_id: i32, category_id: i32) -> Result<bool, Error> {
        let txn = self.db.begin().await?;

        let blog_repo = BlogRepository::new(&txn);

        if !blog_repo.exists(blog_id).await? {
            return Err(ValidationError::MissingBlog(blog_id).into());
        }

        if CategoryRepository::new(&txn)
            .get_by_id(category_id)
            .await?
            .is_none()
        {
            return Err(ValidationError::MissingCategory(category_id).into());
        }

        let added = blog_repo.add_category(blog_id, category_id).await?;

        txn.commit().await?;

        Ok(added)
    }

    /// Untags a category, returning `false` if the blog did not have it
    pub async fn remove_category(&self, blog_id: i32, category_id: i32) -> Result<bool, Error> {
        let result = BlogRepository::new(self.db)
            .remove_category(blog_id, category_id)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn categories(&self, blog_id: i32) -> Result<Vec<CategoryModel>, Error> {
        Ok(BlogRepository::new(self.db).categories(blog_id).await?)
    }

    pub async fn category_count(&self, blog_id: i32) -> Result<u64, Error> {
        Ok(BlogRepository::new(self.db).category_count(blog_id).await?)
    }

    /// Lists the comments of a blog in creation order
    pub async fn comments(&self, blog_id: i32) -> Result<Vec<CommentModel>, Error> {
        Ok(CommentRepository::new(self.db).get_for_blog(blog_id).await?)
    }

    /// Deletes a blog with its category links, comments and viewings
    ///
    /// Returns `false` if the blog did not exist.
    pub async fn delete(&self, blog_id: i32) -> Result<bool, Error> {
        let result = BlogRepository::new(self.db).delete(blog_id).await?;

        Ok(result.rows_affected > 0)
    }
}

/// Ensures the author and every requested category exist
async fn validate_references<C: ConnectionTrait>(db: &C, new_blog: &NewBlog) -> Result<(), Error> {
    if let Some(author_id) = new_blog.author_id {
        if !UserRepository::new(db).exists(author_id).await? {
            return Err(ValidationError::MissingUser(author_id).into());
        }
    }

    if new_blog.category_ids.is_empty() {
        return Ok(());
    }

    let existing = CategoryRepository::new(db)
        .find_existing_ids(&new_blog.category_ids)
        .await?;

    if let Some(&missing) = new_blog
        .category_ids
        .iter()
        .find(|id| !existing.contains(*id))
    {
        return Err(ValidationError::MissingCategory(missing).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {

    mod create {
        use blogsite_test_utils::prelude::*;
        use entity::sea_orm_active_enums::BlogStatus;

        use crate::{
            error::{validation::ValidationError, Error},
            model::blog::NewBlog,
            service::blog::BlogService,
        };

        /// Expect the slug to be derived from the title and categories linked
        #[tokio::test]
        async fn creates_blog_with_category() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_blog_tables()
                .with_user("author")
                .with_category("Technology")
                .build()
                .await?;

            let blog_service = BlogService::new(&test.db, 10);
            let blog = blog_service
                .create(
                    NewBlog::new("Test Blog", "This is a test blog", BlogStatus::Active)
                        .author(1)
                        .category(1),
                )
                .await
                .expect("blog should be created");

            assert_eq!(blog.slug, "test-blog");
            assert_eq!(blog.author_id, Some(1));
            assert_eq!(blog.view_count, 0);
            assert_eq!(
                blog_service
                    .category_count(blog.id)
                    .await
                    .expect("count should succeed"),
                1
            );

            Ok(())
        }

        /// Expect MissingUser and no blog when the author does not exist
        #[tokio::test]
        async fn rejects_missing_author() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;

            let blog_service = BlogService::new(&test.db, 10);
            let result = blog_service
                .create(NewBlog::new("Test Blog", "Content", BlogStatus::Active).author(1))
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::MissingUser(1)))
            ));
            assert!(blog_service
                .list()
                .await
                .expect("list should succeed")
                .is_empty());

            Ok(())
        }

        /// Expect MissingCategory and no blog when a category does not exist
        #[tokio::test]
        async fn rejects_missing_category() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_blog_tables()
                .with_category("Technology")
                .build()
                .await?;

            let blog_service = BlogService::new(&test.db, 10);
            let result = blog_service
                .create(
                    NewBlog::new("Test Blog", "Content", BlogStatus::Active)
                        .category(1)
                        .category(2),
                )
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::MissingCategory(2)))
            ));
            assert!(blog_service
                .get_by_slug("test-blog")
                .await
                .expect("lookup should succeed")
                .is_none());

            Ok(())
        }

        /// Expect SlugExhausted when every allowed candidate is taken
        #[tokio::test]
        async fn rejects_when_slugs_exhausted() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;
            test.blog()
                .insert_blog("Test Blog", "test-blog", BlogStatus::Active, None)
                .await?;

            let blog_service = BlogService::new(&test.db, 1);
            let result = blog_service
                .create(NewBlog::new("Test Blog", "Content", BlogStatus::Active))
                .await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::SlugExhausted { .. }))
            ));

            Ok(())
        }
    }

    mod status {
        use blogsite_test_utils::prelude::*;
        use entity::sea_orm_active_enums::BlogStatus;

        use crate::{
            error::{validation::ValidationError, Error},
            service::blog::BlogService,
        };

        /// Expect cancel and activate to move a blog between the status filters
        #[tokio::test]
        async fn cancel_and_activate() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;
            let blog = test
                .blog()
                .insert_blog("Test Blog", "test-blog", BlogStatus::Draft, None)
                .await?;

            let blog_service = BlogService::new(&test.db, 10);

            blog_service.activate(blog.id).await.expect("blog should exist");
            assert_eq!(blog_service.active().await.expect("query should succeed").len(), 1);

            blog_service.cancel(blog.id).await.expect("blog should exist");
            assert!(blog_service.active().await.expect("query should succeed").is_empty());
            assert_eq!(blog_service.canceled().await.expect("query should succeed").len(), 1);

            Ok(())
        }

        /// Expect MissingBlog when changing the status of an unknown blog
        #[tokio::test]
        async fn rejects_missing_blog() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;

            let blog_service = BlogService::new(&test.db, 10);
            let result = blog_service.cancel(1).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::MissingBlog(1)))
            ));

            Ok(())
        }
    }

    mod category {
        use blogsite_test_utils::prelude::*;
        use entity::sea_orm_active_enums::BlogStatus;

        use crate::{
            error::{validation::ValidationError, Error},
            service::blog::BlogService,
        };

        /// Expect adding an existing category twice to be a no-op
        #[tokio::test]
        async fn add_category_twice() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_blog_tables()
                .with_category("Technology")
                .build()
                .await?;
            let blog = test
                .blog()
                .insert_blog("Test Blog", "test-blog", BlogStatus::Active, None)
                .await?;

            let blog_service = BlogService::new(&test.db, 10);
            let first = blog_service
                .add_category(blog.id, 1)
                .await
                .expect("category should be added");
            let second = blog_service
                .add_category(blog.id, 1)
                .await
                .expect("category should be added");

            assert!(first);
            assert!(!second);
            assert_eq!(
                blog_service
                    .category_count(blog.id)
                    .await
                    .expect("count should succeed"),
                1
            );

            Ok(())
        }

        /// Expect MissingCategory for an unknown category
        #[tokio::test]
        async fn rejects_missing_category() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;
            let blog = test
                .blog()
                .insert_blog("Test Blog", "test-blog", BlogStatus::Active, None)
                .await?;

            let blog_service = BlogService::new(&test.db, 10);
            let result = blog_service.add_category(blog.id, 1).await;

            assert!(matches!(
                result,
                Err(Error::ValidationError(ValidationError::MissingCategory(1)))
            ));

            Ok(())
        }

        /// Expect remove to report whether the link existed
        #[tokio::test]
        async fn removes_category() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;
            let category = test.blog().insert_category("Technology", "technology").await?;
            let blog = test
                .blog()
                .insert_blog("Test Blog", "test-blog", BlogStatus::Active, None)
                .await?;
            test.blog().link_category(blog.id, category.id).await?;

            let blog_service = BlogService::new(&test.db, 10);

            assert!(blog_service
                .remove_category(blog.id, category.id)
                .await
                .expect("remove should succeed"));
            assert!(!blog_service
                .remove_category(blog.id, category.id)
                .await
                .expect("remove should succeed"));
            assert!(blog_service
                .categories(blog.id)
                .await
                .expect("query should succeed")
                .is_empty());

            Ok(())
        }
    }
}
