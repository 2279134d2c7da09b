//! Tests for SiteService.
//!
//! Verifies that site metadata, including the social links mapping, is stored
//! as provided and that the earliest site is the current one.

use blogsite::{model::site::SiteInfo, service::site::SiteService};
use blogsite_test_utils::prelude::*;
use serde_json::json;

fn test_site_info() -> SiteInfo {
    SiteInfo {
        name: "Test Site".to_string(),
        picture: "test.jpg".to_string(),
        about_us: "About Us Information".to_string(),
        social: json!({ "twitter": "https://twitter.com/test" }),
        address: "123 Test Street".to_string(),
        email: "test@example.com".to_string(),
        phone: "+123456789".to_string(),
    }
}

/// Tests creating a site.
///
/// Verifies that every field is persisted and that the site displays as its name.
///
/// Expected: Ok with site record created
#[tokio::test]
async fn creates_site() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;

    let site_service = SiteService::new(&test.db);
    let result = site_service.create(test_site_info()).await;

    assert!(result.is_ok());
    let site = result.unwrap();
    assert_eq!(site.name, "Test Site");
    assert_eq!(site.to_string(), "Test Site");
    assert_eq!(site.about_us, "About Us Information");
    assert_eq!(site.social, json!({ "twitter": "https://twitter.com/test" }));
    assert_eq!(site.address, "123 Test Street");
    assert_eq!(site.email, "test@example.com");
    assert_eq!(site.phone, "+123456789");

    Ok(())
}

/// Tests updating the current site.
///
/// Verifies that update replaces the stored fields of the current site and that
/// a second site does not replace the current one.
///
/// Expected: Ok with the first site updated and still current
#[tokio::test]
async fn updates_current_site() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;

    let site_service = SiteService::new(&test.db);
    let first = site_service.create(test_site_info()).await.unwrap();
    site_service.create(test_site_info()).await.unwrap();

    let mut info = test_site_info();
    info.name = "Renamed Site".to_string();
    let result = site_service.update(first.id, info).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().name, "Renamed Site");
    let current = site_service.get_current().await.unwrap().unwrap();
    assert_eq!(current.id, first.id);
    assert_eq!(current.name, "Renamed Site");

    Ok(())
}
