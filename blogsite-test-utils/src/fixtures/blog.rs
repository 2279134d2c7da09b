//! Blog content fixture utilities.
//!
//! Inserts records with caller-chosen slugs and statuses, so tests can build a
//! known starting state without going through slug generation or validation.

use chrono::Utc;
use entity::sea_orm_active_enums::BlogStatus;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{BlogCategoryModel, BlogModel, CategoryModel, CommentModel, MessageModel},
    TestContext,
};

impl TestContext {
    pub fn blog<'a>(&'a self) -> BlogFixtures<'a> {
        BlogFixtures { setup: self }
    }
}

pub struct BlogFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> BlogFixtures<'a> {
    pub async fn insert_category(&self, name: &str, slug: &str) -> Result<CategoryModel, TestError> {
        Ok(
            entity::prelude::Category::insert(entity::category::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                slug: ActiveValue::Set(slug.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a blog with a zero view count.
    ///
    /// # Arguments
    /// - `title` - Blog title, also used for the description
    /// - `slug` - Slug stored verbatim, must be unique
    /// - `status` - Lifecycle status
    /// - `author_id` - Optional ID of an existing user
    pub async fn insert_blog(
        &self,
        title: &str,
        slug: &str,
        status: BlogStatus,
        author_id: Option<i32>,
    ) -> Result<BlogModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Blog::insert(entity::blog::ActiveModel {
                title: ActiveValue::Set(title.to_string()),
                slug: ActiveValue::Set(slug.to_string()),
                description: ActiveValue::Set(format!("Content for {}", title)),
                status: ActiveValue::Set(status),
                author_id: ActiveValue::Set(author_id),
                view_count: ActiveValue::Set(0),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn link_category(
        &self,
        blog_id: i32,
        category_id: i32,
    ) -> Result<BlogCategoryModel, TestError> {
        Ok(
            entity::prelude::BlogCategory::insert(entity::blog_category::ActiveModel {
                blog_id: ActiveValue::Set(blog_id),
                category_id: ActiveValue::Set(category_id),
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_comment(
        &self,
        blog_id: i32,
        author_id: i32,
        body: &str,
    ) -> Result<CommentModel, TestError> {
        Ok(
            entity::prelude::Comment::insert(entity::comment::ActiveModel {
                blog_id: ActiveValue::Set(blog_id),
                author_id: ActiveValue::Set(author_id),
                body: ActiveValue::Set(body.to_string()),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert an unresolved message.
    pub async fn insert_message(
        &self,
        author_id: i32,
        subject: &str,
    ) -> Result<MessageModel, TestError> {
        Ok(
            entity::prelude::Message::insert(entity::message::ActiveModel {
                author_id: ActiveValue::Set(author_id),
                subject: ActiveValue::Set(subject.to_string()),
                body: ActiveValue::Set(format!("Body of {}", subject)),
                status: ActiveValue::Set(false),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
