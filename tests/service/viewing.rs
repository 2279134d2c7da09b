//! Tests for ViewingService.
//!
//! Verifies that every recorded view increments the blog's view count exactly
//! once, including views recorded concurrently.

use blogsite::service::viewing::ViewingService;
use blogsite_test_utils::prelude::*;
use entity::sea_orm_active_enums::BlogStatus;
use futures::future::join_all;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

/// Tests recording two views of a blog.
///
/// Expected: Ok with a view count of 2
#[tokio::test]
async fn counts_views() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;
    let blog = test
        .blog()
        .insert_blog("Test Blog", "test-blog", BlogStatus::Active, None)
        .await?;

    let viewing_service = ViewingService::new(&test.db);
    assert!(viewing_service.record_view(blog.id).await.is_ok());
    assert!(viewing_service.record_view(blog.id).await.is_ok());

    assert_eq!(viewing_service.view_count(blog.id).await.unwrap(), 2);

    Ok(())
}

/// Tests interleaved view recording.
///
/// The in-memory database has a single connection, so the views' transactions
/// run one after another. Verifies that every increment lands and that the view
/// count matches the number of viewing records.
///
/// Expected: Ok with a view count of 10 and 10 viewing records
#[tokio::test]
async fn counts_interleaved_views() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;
    let blog = test
        .blog()
        .insert_blog("Test Blog", "test-blog", BlogStatus::Active, None)
        .await?;

    let viewing_service = ViewingService::new(&test.db);
    let views = (0..10).map(|_| viewing_service.record_view(blog.id));
    let results = join_all(views).await;

    assert!(results.iter().all(|r| r.is_ok()));

    let viewings = entity::prelude::BlogViewing::find()
        .filter(entity::blog_viewing::Column::BlogId.eq(blog.id))
        .count(&test.db)
        .await?;

    assert_eq!(viewing_service.view_count(blog.id).await.unwrap(), 10);
    assert_eq!(viewings, 10);

    Ok(())
}
