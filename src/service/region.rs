use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    data::region::{DistrictRepository, RegionRepository},
    error::{validation::ValidationError, Error},
    model::db::{DistrictModel, RegionModel},
};

pub struct RegionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionService<'a> {
    /// Creates a new instance of [`RegionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create_region(&self, name: &str) -> Result<RegionModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }

        let region = RegionRepository::new(self.db).create(name).await?;

        tracing::debug!("Created region {} with ID {}", region.name, region.id);

        Ok(region)
    }

    /// Creates a district under an existing region
    ///
    /// # Returns
    /// - `Ok(DistrictModel)` - The created district
    /// - `Err(Error::ValidationError(MissingRegion))` - No region exists with `region_id`
    pub async fn create_district(&self, name: &str, region_id: i32) -> Result<DistrictModel, Error> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyField("name").into());
        }

        let txn = self.db.begin().await?;

        if !RegionRepository::new(&txn).exists(region_id).await? {
            return Err(ValidationError::MissingRegion(region_id).into());
        }

        let district = DistrictRepository::new(&txn).create(name, region_id).await?;

        txn.commit().await?;

        tracing::debug!(
            "Created district {} with ID {} in region ID {}",
            district.name,
            district.id,
            region_id
        );

        Ok(district)
    }

    pub async fn list_regions(&self) -> Result<Vec<RegionModel>, Error> {
        Ok(RegionRepository::new(self.db).list().await?)
    }

    /// Lists the districts of a region in creation order
    pub async fn list_districts(&self, region_id: i32) -> Result<Vec<DistrictModel>, Error> {
        if !RegionRepository::new(self.db).exists(region_id).await? {
            return Err(ValidationError::MissingRegion(region_id).into());
        }

        Ok(DistrictRepository::new(self.db)
            .list_by_region(region_id)
            .await?)
    }

    /// Resolves the region a district belongs to
    ///
    /// Returns `None` if the district does not exist.
    pub async fn get_district_region(&self, district_id: i32) -> Result<Option<RegionModel>, Error> {
        let district = DistrictRepository::new(self.db)
            .get_with_region(district_id)
            .await?;

        match district {
            None => Ok(None),
            Some((_, Some(region))) => Ok(Some(region)),
            Some((district, None)) => Err(Error::InternalError(format!(
                "District ID {} references missing region ID {}",
                district.id, district.region_id
            ))),
        }
    }

    /// Deletes a region and its districts, returning `false` if it did not exist
    pub async fn delete_region(&self, region_id: i32) -> Result<bool, Error> {
        let result = RegionRepository::new(self.db).delete(region_id).await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn delete_district(&self, district_id: i32) -> Result<bool, Error> {
        let result = DistrictRepository::new(self.db).delete(district_id).await?;

        Ok(result.rows_affected > 0)
    }
}
