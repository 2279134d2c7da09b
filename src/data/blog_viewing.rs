use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter,
};

pub struct BlogViewingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BlogViewingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a viewing record timestamped now
    ///
    /// This does not touch the blog's view count, see
    /// [`crate::service::viewing::ViewingService::record_view`] for the paired update.
    pub async fn create(&self, blog_id: i32) -> Result<entity::blog_viewing::Model, DbErr> {
        let viewing = entity::blog_viewing::ActiveModel {
            blog_id: ActiveValue::Set(blog_id),
            viewed_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        viewing.insert(self.db).await
    }

    pub async fn count_for_blog(&self, blog_id: i32) -> Result<u64, DbErr> {
        entity::prelude::BlogViewing::find()
            .filter(entity::blog_viewing::Column::BlogId.eq(blog_id))
            .count(self.db)
            .await
    }
}
