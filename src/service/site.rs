use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::site::SiteRepository,
    error::{validation::ValidationError, Error},
    model::{db::SiteModel, site::SiteInfo},
};

pub struct SiteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SiteService<'a> {
    /// Creates a new instance of [`SiteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, info: SiteInfo) -> Result<SiteModel, Error> {
        validate(&info)?;

        let site = SiteRepository::new(self.db).create(info).await?;

        tracing::debug!("Created site {} with ID {}", site.name, site.id);

        Ok(site)
    }

    /// Gets the site in effect, the earliest created one
    pub async fn get_current(&self) -> Result<Option<SiteModel>, Error> {
        Ok(SiteRepository::new(self.db).get_current().await?)
    }

    /// Replaces the fields of an existing site
    pub async fn update(&self, site_id: i32, info: SiteInfo) -> Result<SiteModel, Error> {
        validate(&info)?;

        let site = SiteRepository::new(self.db)
            .update(site_id, info)
            .await?
            .ok_or(ValidationError::MissingSite(site_id))?;

        tracing::debug!("Updated site {} with ID {}", site.name, site.id);

        Ok(site)
    }

    pub async fn delete(&self, site_id: i32) -> Result<bool, Error> {
        let result = SiteRepository::new(self.db).delete(site_id).await?;

        Ok(result.rows_affected > 0)
    }
}

/// Social links must be a JSON object of network name to URL
fn validate(info: &SiteInfo) -> Result<(), ValidationError> {
    if info.name.trim().is_empty() {
        return Err(ValidationError::EmptyField("name"));
    }

    if !info.social.is_object() {
        return Err(ValidationError::InvalidSocial);
    }

    Ok(())
}
