//! Tests for RegionService.

use blogsite::service::region::RegionService;
use blogsite_test_utils::prelude::*;

/// Tests creating a region with a district.
///
/// Verifies that both display as their names and that the district resolves to
/// the region it was created with.
///
/// Expected: Ok with the district's region equal to the created region
#[tokio::test]
async fn creates_region_and_district() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;

    let region_service = RegionService::new(&test.db);
    let region = region_service.create_region("Test Region").await.unwrap();
    let result = region_service
        .create_district("Test District", region.id)
        .await;

    assert!(result.is_ok());
    let district = result.unwrap();

    assert_eq!(region.name, "Test Region");
    assert_eq!(region.to_string(), "Test Region");
    assert_eq!(district.name, "Test District");
    assert_eq!(district.to_string(), "Test District");
    assert_eq!(
        region_service.get_district_region(district.id).await.unwrap(),
        Some(region.clone())
    );
    assert_eq!(
        region_service.list_districts(region.id).await.unwrap(),
        vec![district]
    );

    Ok(())
}
