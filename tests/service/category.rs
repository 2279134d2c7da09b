//! Tests for CategoryService.
//!
//! Verifies slug derivation from the category name and slug uniqueness when
//! names repeat.

use blogsite::{config::Config, service::category::CategoryService};
use blogsite_test_utils::prelude::*;

/// Tests creating a category.
///
/// Verifies that the slug is the slugified name and that the category displays
/// as its name.
///
/// Expected: Ok with slug "technology"
#[tokio::test]
async fn creates_category() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;

    let category_service = CategoryService::new(&test.db, Config::DEFAULT_SLUG_MAX_ATTEMPTS);
    let result = category_service.create("Technology").await;

    assert!(result.is_ok());
    let category = result.unwrap();
    assert_eq!(category.name, "Technology");
    assert_eq!(category.to_string(), "Technology");
    assert_eq!(category.slug, "technology");

    Ok(())
}

/// Tests creating two categories with the same name.
///
/// Verifies that the second category gets a distinct slug built from the same
/// base slug.
///
/// Expected: Ok with distinct slugs, the second starting with "technology-"
#[tokio::test]
async fn keeps_slugs_unique() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;

    let category_service = CategoryService::new(&test.db, Config::DEFAULT_SLUG_MAX_ATTEMPTS);
    let first = category_service.create("Technology").await.unwrap();
    let second = category_service.create("Technology").await.unwrap();

    assert_ne!(first.slug, second.slug);
    assert!(second.slug.starts_with("technology-"));

    let by_slug = category_service.get_by_slug(&second.slug).await.unwrap();
    assert_eq!(by_slug, Some(second));

    Ok(())
}

/// Tests listing the blogs tagged with a category.
///
/// Expected: Ok with only the tagged blog
#[tokio::test]
async fn lists_tagged_blogs() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;
    let category = test.blog().insert_category("Technology", "technology").await?;
    let tagged = test
        .blog()
        .insert_blog(
            "Tagged",
            "tagged",
            entity::sea_orm_active_enums::BlogStatus::Active,
            None,
        )
        .await?;
    test.blog().link_category(tagged.id, category.id).await?;

    let category_service = CategoryService::new(&test.db, Config::DEFAULT_SLUG_MAX_ATTEMPTS);
    let result = category_service.blogs(category.id).await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap(), vec![tagged]);

    Ok(())
}
