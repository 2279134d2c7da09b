use chrono::Utc;
use entity::sea_orm_active_enums::BlogStatus;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    DeleteResult, EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, QueryOrder, UpdateResult,
};

pub struct BlogRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlogRepository<'a, C> {
    /// Creates a new instance of [`BlogRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a blog with an already allocated slug and a view count of 0
    pub async fn create(
        &self,
        title: &str,
        slug: &str,
        description: &str,
        status: BlogStatus,
        author_id: Option<i32>,
    ) -> Result<entity::blog::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let blog = entity::blog::ActiveModel {
            title: ActiveValue::Set(title.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            description: ActiveValue::Set(description.to_string()),
            status: ActiveValue::Set(status),
            author_id: ActiveValue::Set(author_id),
            view_count: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        blog.insert(self.db).await
    }

    pub async fn get_by_id(&self, blog_id: i32) -> Result<Option<entity::blog::Model>, DbErr> {
        entity::prelude::Blog::find_by_id(blog_id).one(self.db).await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::blog::Model>, DbErr> {
        entity::prelude::Blog::find()
            .filter(entity::blog::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn exists(&self, blog_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Blog::find_by_id(blog_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Blog::find()
            .filter(entity::blog::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets blogs with the provided status, ordered by ID
    pub async fn find_by_status(
        &self,
        status: BlogStatus,
    ) -> Result<Vec<entity::blog::Model>, DbErr> {
        entity::blog::Entity::find_by_status(status)
            .all(self.db)
            .await
    }

    pub async fn find_active(&self) -> Result<Vec<entity::blog::Model>, DbErr> {
        entity::blog::Entity::find_active().all(self.db).await
    }

    pub async fn find_canceled(&self) -> Result<Vec<entity::blog::Model>, DbErr> {
        entity::blog::Entity::find_canceled().all(self.db).await
    }

    pub async fn list(&self) -> Result<Vec<entity::blog::Model>, DbErr> {
        entity::prelude::Blog::find()
            .order_by_asc(entity::blog::Column::Id)
            .all(self.db)
            .await
    }

    /// Updates the status of a blog
    ///
    /// Returns `None` if no blog exists with the provided ID.
    pub async fn set_status(
        &self,
        blog_id: i32,
        status: BlogStatus,
    ) -> Result<Option<entity::blog::Model>, DbErr> {
        let blog = match entity::prelude::Blog::find_by_id(blog_id).one(self.db).await? {
            Some(blog) => blog,
            None => return Ok(None),
        };

        let mut blog_am: entity::blog::ActiveModel = blog.into();
        blog_am.status = ActiveValue::Set(status);
        blog_am.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        let blog = blog_am.update(self.db).await?;

        Ok(Some(blog))
    }

    /// Tags a blog with a category
    ///
    /// Returns `false` without writing anything if the blog already has the category.
    pub async fn add_category(&self, blog_id: i32, category_id: i32) -> Result<bool, DbErr> {
        let existing = entity::prelude::BlogCategory::find_by_id((blog_id, category_id))
            .one(self.db)
            .await?;

        if existing.is_some() {
            return Ok(false);
        }

        let link = entity::blog_category::ActiveModel {
            blog_id: ActiveValue::Set(blog_id),
            category_id: ActiveValue::Set(category_id),
        };

        entity::prelude::BlogCategory::insert(link)
            .exec_without_returning(self.db)
            .await?;

        Ok(true)
    }

    pub async fn remove_category(
        &self,
        blog_id: i32,
        category_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        entity::prelude::BlogCategory::delete_by_id((blog_id, category_id))
            .exec(self.db)
            .await
    }

    /// Gets the categories a blog is tagged with, ordered by ID
    pub async fn categories(&self, blog_id: i32) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .inner_join(entity::prelude::BlogCategory)
            .filter(entity::blog_category::Column::BlogId.eq(blog_id))
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn category_count(&self, blog_id: i32) -> Result<u64, DbErr> {
        entity::prelude::BlogCategory::find()
            .filter(entity::blog_category::Column::BlogId.eq(blog_id))
            .count(self.db)
            .await
    }

    /// Increments the view count of a blog by one
    ///
    /// The increment happens in a single UPDATE statement so concurrent views
    /// are never lost. `rows_affected` is 0 when the blog does not exist.
    pub async fn increment_view_count(&self, blog_id: i32) -> Result<UpdateResult, DbErr> {
        entity::prelude::Blog::update_many()
            .col_expr(
                entity::blog::Column::ViewCount,
                Expr::col(entity::blog::Column::ViewCount).add(1),
            )
            .filter(entity::blog::Column::Id.eq(blog_id))
            .exec(self.db)
            .await
    }

    /// Deletes a blog along with its category links, comments and viewings
    pub async fn delete(&self, blog_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Blog::delete_by_id(blog_id)
            .exec(self.db)
            .await
    }
}
