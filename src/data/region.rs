use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

pub struct RegionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RegionRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, name: &str) -> Result<entity::region::Model, DbErr> {
        let region = entity::region::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        };

        region.insert(self.db).await
    }

    pub async fn get_by_id(&self, region_id: i32) -> Result<Option<entity::region::Model>, DbErr> {
        entity::prelude::Region::find_by_id(region_id)
            .one(self.db)
            .await
    }

    pub async fn exists(&self, region_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Region::find_by_id(region_id)
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    pub async fn list(&self) -> Result<Vec<entity::region::Model>, DbErr> {
        entity::prelude::Region::find()
            .order_by_asc(entity::region::Column::Id)
            .all(self.db)
            .await
    }

    /// Deletes a region along with its districts
    pub async fn delete(&self, region_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Region::delete_by_id(region_id)
            .exec(self.db)
            .await
    }
}

pub struct DistrictRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DistrictRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a district under the provided region
    ///
    /// Fails with a foreign key error if the region does not exist.
    pub async fn create(
        &self,
        name: &str,
        region_id: i32,
    ) -> Result<entity::district::Model, DbErr> {
        let district = entity::district::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            region_id: ActiveValue::Set(region_id),
            ..Default::default()
        };

        district.insert(self.db).await
    }

    pub async fn get_by_id(
        &self,
        district_id: i32,
    ) -> Result<Option<entity::district::Model>, DbErr> {
        entity::prelude::District::find_by_id(district_id)
            .one(self.db)
            .await
    }

    /// Gets a district together with the region it belongs to
    pub async fn get_with_region(
        &self,
        district_id: i32,
    ) -> Result<Option<(entity::district::Model, Option<entity::region::Model>)>, DbErr> {
        entity::prelude::District::find_by_id(district_id)
            .find_also_related(entity::prelude::Region)
            .one(self.db)
            .await
    }

    pub async fn list_by_region(
        &self,
        region_id: i32,
    ) -> Result<Vec<entity::district::Model>, DbErr> {
        entity::prelude::District::find()
            .filter(entity::district::Column::RegionId.eq(region_id))
            .order_by_asc(entity::district::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn delete(&self, district_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::District::delete_by_id(district_id)
            .exec(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod region {
        use blogsite_test_utils::prelude::*;

        use crate::data::region::RegionRepository;

        /// Expect success when creating a region
        #[tokio::test]
        async fn creates_region() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;

            let region_repo = RegionRepository::new(&test.db);
            let region = region_repo.create("Test Region").await?;

            assert_eq!(region.name, "Test Region");
            assert_eq!(region.to_string(), "Test Region");
            assert!(region_repo.exists(region.id).await?);

            Ok(())
        }

        /// Expect regions to be listed in insertion order
        #[tokio::test]
        async fn lists_regions_in_order() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_blog_tables()
                .with_region("North")
                .with_region("South")
                .build()
                .await?;

            let region_repo = RegionRepository::new(&test.db);
            let names: Vec<String> = region_repo
                .list()
                .await?
                .into_iter()
                .map(|r| r.name)
                .collect();

            assert_eq!(names, vec!["North", "South"]);

            Ok(())
        }
    }

    mod district {
        use blogsite_test_utils::prelude::*;

        use crate::data::region::{DistrictRepository, RegionRepository};

        /// Expect the district to resolve to the region it was created with
        #[tokio::test]
        async fn resolves_region() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;
            let region = test.region().insert_region("Test Region").await?;

            let district_repo = DistrictRepository::new(&test.db);
            let district = district_repo.create("Test District", region.id).await?;
            let (found, found_region) = district_repo
                .get_with_region(district.id)
                .await?
                .expect("district should exist");

            assert_eq!(found.to_string(), "Test District");
            assert_eq!(found_region, Some(region));

            Ok(())
        }

        /// Expect Error when creating a district for a region that does not exist
        #[tokio::test]
        async fn fails_for_nonexistent_region() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;

            let district_repo = DistrictRepository::new(&test.db);
            let nonexistent_region_id = 1;
            let result = district_repo
                .create("Test District", nonexistent_region_id)
                .await;

            assert!(result.is_err());

            Ok(())
        }

        /// Expect only districts of the requested region to be listed
        #[tokio::test]
        async fn lists_districts_of_region() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;
            let north = test.region().insert_region("North").await?;
            let south = test.region().insert_region("South").await?;
            test.region().insert_district("North A", north.id).await?;
            test.region().insert_district("South A", south.id).await?;
            test.region().insert_district("North B", north.id).await?;

            let district_repo = DistrictRepository::new(&test.db);
            let names: Vec<String> = district_repo
                .list_by_region(north.id)
                .await?
                .into_iter()
                .map(|d| d.name)
                .collect();

            assert_eq!(names, vec!["North A", "North B"]);

            Ok(())
        }

        /// Expect districts to be removed along with their region
        #[tokio::test]
        async fn deleting_region_removes_districts() -> Result<(), TestError> {
            let test = TestBuilder::new().with_blog_tables().build().await?;
            let region = test.region().insert_region("Test Region").await?;
            let district = test
                .region()
                .insert_district("Test District", region.id)
                .await?;

            let region_repo = RegionRepository::new(&test.db);
            let delete_result = region_repo.delete(region.id).await?;

            let district_repo = DistrictRepository::new(&test.db);

            assert_eq!(delete_result.rows_affected, 1);
            assert!(district_repo.get_by_id(district.id).await?.is_none());

            Ok(())
        }
    }
}
