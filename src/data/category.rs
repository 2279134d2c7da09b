use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

pub struct CategoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a category with an already allocated slug
    pub async fn create(&self, name: &str, slug: &str) -> Result<entity::category::Model, DbErr> {
        let category = entity::category::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            slug: ActiveValue::Set(slug.to_string()),
            ..Default::default()
        };

        category.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        category_id: i32,
    ) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find_by_id(category_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    pub async fn slug_exists(&self, slug: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Category::find()
            .filter(entity::category::Column::Slug.eq(slug))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Returns the IDs out of `category_ids` that exist
    pub async fn find_existing_ids(&self, category_ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Category::find()
            .select_only()
            .column(entity::category::Column::Id)
            .filter(entity::category::Column::Id.is_in(category_ids.iter().copied()))
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Lists all categories ordered by name
    pub async fn list(&self) -> Result<Vec<entity::category::Model>, DbErr> {
        entity::prelude::Category::find()
            .order_by_asc(entity::category::Column::Name)
            .order_by_asc(entity::category::Column::Id)
            .all(self.db)
            .await
    }

    /// Lists the blogs tagged with a category, oldest first
    pub async fn blogs(&self, category_id: i32) -> Result<Vec<entity::blog::Model>, DbErr> {
        entity::prelude::Blog::find()
            .inner_join(entity::prelude::BlogCategory)
            .filter(entity::blog_category::Column::CategoryId.eq(category_id))
            .order_by_asc(entity::blog::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a category, untagging every blog that referenced it
    pub async fn delete(&self, category_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Category::delete_by_id(category_id)
            .exec(self.db)
            .await
    }
}
