//! Region and district fixture utilities.

use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    model::{DistrictModel, RegionModel},
    TestContext,
};

impl TestContext {
    pub fn region<'a>(&'a self) -> RegionFixtures<'a> {
        RegionFixtures { setup: self }
    }
}

pub struct RegionFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> RegionFixtures<'a> {
    pub async fn insert_region(&self, name: &str) -> Result<RegionModel, TestError> {
        Ok(
            entity::prelude::Region::insert(entity::region::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a district; `region_id` must reference an existing region.
    pub async fn insert_district(
        &self,
        name: &str,
        region_id: i32,
    ) -> Result<DistrictModel, TestError> {
        Ok(
            entity::prelude::District::insert(entity::district::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                region_id: ActiveValue::Set(region_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
