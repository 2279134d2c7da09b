use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::category::CategoryRepository,
    error::{validation::ValidationError, Error},
    model::db::{BlogModel, CategoryModel},
    service::{
        retry::RetryContext,
        slug::{slug_conflict, SlugService, SlugTarget},
    },
};

pub struct CategoryService<'a> {
    db: &'a DatabaseConnection,
    slug_max_attempts: u32,
}

impl<'a> CategoryService<'a> {
    /// Creates a new instance of [`CategoryService`]
    pub fn new(db: &'a DatabaseConnection, slug_max_attempts: u32) -> Self {
        Self {
            db,
            slug_max_attempts,
        }
    }

    /// Creates a category with a unique slug derived from its name
    ///
    /// A slug taken by a concurrent insert is retried with a new candidate.
    pub async fn create(&self, name: &str) -> Result<CategoryModel, Error> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }

        let ctx = RetryContext::new();

        let db = self.db.clone();
        let slug_max_attempts = self.slug_max_attempts;

        ctx.execute_with_retry(&format!("creation of category {:?}", name), || {
            let db = db.clone();
            let name = name.clone();

            Box::pin(async move {
                let slug = SlugService::new(&db, slug_max_attempts)
                    .allocate(SlugTarget::Category, &name)
                    .await?;

                let category = CategoryRepository::new(&db)
                    .create(&name, &slug)
                    .await
                    .map_err(|e| slug_conflict(e, &slug))?;

                tracing::debug!("Created category {} with slug {}", category.name, category.slug);

                Ok::<_, Error>(category)
            })
        })
        .await
    }

    pub async fn get_by_id(&self, category_id: i32) -> Result<Option<CategoryModel>, Error> {
        Ok(CategoryRepository::new(self.db).get_by_id(category_id).await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<CategoryModel>, Error> {
        Ok(CategoryRepository::new(self.db).get_by_slug(slug).await?)
    }

    pub async fn list(&self) -> Result<Vec<CategoryModel>, Error> {
        Ok(CategoryRepository::new(self.db).list().await?)
    }

    /// Lists the blogs tagged with a category
    ///
    /// # Returns
    /// - `Ok(Vec<BlogModel>)` - Tagged blogs, oldest first
    /// - `Err(Error::ValidationError(MissingCategory))` - No category exists with `category_id`
    pub async fn blogs(&self, category_id: i32) -> Result<Vec<BlogModel>, Error> {
        let category_repo = CategoryRepository::new(self.db);

        if category_repo.get_by_id(category_id).await?.is_none() {
            return Err(ValidationError::MissingCategory(category_id).into());
        }

        Ok(category_repo.blogs(category_id).await?)
    }

    /// Deletes a category, returning `false` if it did not exist
    pub async fn delete(&self, category_id: i32) -> Result<bool, Error> {
        let result = CategoryRepository::new(self.db).delete(category_id).await?;

        Ok(result.rows_affected > 0)
    }
}
