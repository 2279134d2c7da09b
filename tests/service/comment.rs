//! Tests for CommentService.

use blogsite::service::{blog::BlogService, comment::CommentService};
use blogsite_test_utils::prelude::*;
use entity::sea_orm_active_enums::BlogStatus;

/// Tests commenting on a blog twice.
///
/// Verifies that comments are listed in the order they were written, both from
/// the comment service and from the blog.
///
/// Expected: Ok with "First comment" followed by "Second comment"
#[tokio::test]
async fn lists_comments_in_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_user("testuser")
        .build()
        .await?;
    let blog = test
        .blog()
        .insert_blog("Test Blog", "test-blog", BlogStatus::Active, None)
        .await?;

    let comment_service = CommentService::new(&test.db);
    comment_service
        .create(blog.id, 1, "First comment")
        .await
        .unwrap();
    comment_service
        .create(blog.id, 1, "Second comment")
        .await
        .unwrap();

    let comments = comment_service.for_blog(blog.id).await.unwrap();

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].body, "First comment");
    assert_eq!(comments[1].body, "Second comment");

    let blog_service = BlogService::new(&test.db, 10);
    assert_eq!(blog_service.comments(blog.id).await.unwrap(), comments);

    Ok(())
}
