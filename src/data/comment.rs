use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, QueryFilter, QueryOrder,
};

pub struct CommentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CommentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        blog_id: i32,
        author_id: i32,
        body: &str,
    ) -> Result<entity::comment::Model, DbErr> {
        let comment = entity::comment::ActiveModel {
            blog_id: ActiveValue::Set(blog_id),
            author_id: ActiveValue::Set(author_id),
            body: ActiveValue::Set(body.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        comment.insert(self.db).await
    }

    /// Gets the comments of a blog in the order they were written
    pub async fn get_for_blog(&self, blog_id: i32) -> Result<Vec<entity::comment::Model>, DbErr> {
        entity::prelude::Comment::find()
            .filter(entity::comment::Column::BlogId.eq(blog_id))
            .order_by_asc(entity::comment::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, comment_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Comment::delete_by_id(comment_id)
            .exec(self.db)
            .await
    }
}
