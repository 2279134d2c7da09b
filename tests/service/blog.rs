//! Tests for BlogService.
//!
//! Verifies blog creation with an author and categories, slug uniqueness for
//! repeated titles, and the active and canceled status filters.

use blogsite::{
    config::Config,
    model::{blog::NewBlog, user::NewUser},
    service::{blog::BlogService, user::UserService},
    util::password::PasswordHasher,
};
use blogsite_test_utils::prelude::*;
use entity::sea_orm_active_enums::BlogStatus;

/// Tests creating a blog with an author and a category.
///
/// Verifies that the slug is derived from the title, the blog displays as its
/// title and the category link is stored.
///
/// Expected: Ok with slug "test-blog" and a category count of 1
#[tokio::test]
async fn creates_blog() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;
    let category = test
        .blog()
        .insert_category("Test Category", "test-category")
        .await?;

    let user_service = UserService::new(&test.db, PasswordHasher::new(1));
    let author = user_service
        .create_user(NewUser::new("author", "author@example.com", "securepassword"))
        .await
        .unwrap();

    let blog_service = BlogService::new(&test.db, Config::DEFAULT_SLUG_MAX_ATTEMPTS);
    let result = blog_service
        .create(
            NewBlog::new("Test Blog", "This is a test blog", BlogStatus::Active)
                .author(author.id)
                .category(category.id),
        )
        .await;

    assert!(result.is_ok());
    let blog = result.unwrap();
    assert_eq!(blog.title, "Test Blog");
    assert_eq!(blog.to_string(), "Test Blog");
    assert_eq!(blog.slug, "test-blog");
    assert_eq!(blog.author_id, Some(author.id));
    assert_eq!(blog_service.category_count(blog.id).await.unwrap(), 1);
    assert_eq!(blog_service.categories(blog.id).await.unwrap(), vec![category]);

    Ok(())
}

/// Tests creating two blogs with the same title.
///
/// Expected: Ok with distinct slugs, the second starting with "test-blog-"
#[tokio::test]
async fn keeps_slugs_unique() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_user("author")
        .build()
        .await?;

    let blog_service = BlogService::new(&test.db, Config::DEFAULT_SLUG_MAX_ATTEMPTS);
    let blog = blog_service
        .create(NewBlog::new("Test Blog", "This is a test blog", BlogStatus::Active).author(1))
        .await
        .unwrap();
    let duplicate_blog = blog_service
        .create(NewBlog::new("Test Blog", "Duplicate test blog", BlogStatus::Active).author(1))
        .await
        .unwrap();

    assert_ne!(blog.slug, duplicate_blog.slug);
    assert!(duplicate_blog.slug.starts_with("test-blog-"));

    Ok(())
}

/// Tests interleaved creates of blogs with the same title.
///
/// The in-memory database has a single connection, so the creates' transactions
/// run one after another. Verifies that each create sees the slugs committed
/// before it and gets its own slug. The insert-time slug race is covered by the
/// retry test in `service::slug`.
///
/// Expected: Ok with 4 distinct slugs
#[tokio::test]
async fn keeps_slugs_unique_when_interleaved() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;

    let blog_service = BlogService::new(&test.db, Config::DEFAULT_SLUG_MAX_ATTEMPTS);
    let creates = (0..4).map(|_| {
        blog_service.create(NewBlog::new("Test Blog", "Content", BlogStatus::Active))
    });
    let results = futures::future::join_all(creates).await;

    let mut slugs: Vec<String> = results.into_iter().map(|r| r.unwrap().slug).collect();
    slugs.sort();
    slugs.dedup();

    assert_eq!(slugs.len(), 4);
    assert!(slugs.iter().all(|s| s.starts_with("test-blog")));

    Ok(())
}

/// Tests the active and canceled status filters.
///
/// Verifies that the filters return exactly the blogs in each status, never
/// overlap and never include blogs in another status.
///
/// Expected: 2 active blogs, 1 canceled blog
#[tokio::test]
async fn filters_blogs_by_status() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_blog_tables()
        .with_category("Technology")
        .build()
        .await?;

    let blog_service = BlogService::new(&test.db, Config::DEFAULT_SLUG_MAX_ATTEMPTS);
    let blog1 = blog_service
        .create(
            NewBlog::new("Active Blog 1", "Content for active blog 1", BlogStatus::Active)
                .category(1),
        )
        .await
        .unwrap();
    let blog2 = blog_service
        .create(
            NewBlog::new("Active Blog 2", "Content for active blog 2", BlogStatus::Active)
                .category(1),
        )
        .await
        .unwrap();
    let blog3 = blog_service
        .create(
            NewBlog::new("Canceled Blog", "Content for canceled blog", BlogStatus::Canceled)
                .category(1),
        )
        .await
        .unwrap();
    let draft = blog_service
        .create(NewBlog::new("Draft Blog", "Content for draft blog", BlogStatus::Draft))
        .await
        .unwrap();

    let active_blogs = blog_service.active().await.unwrap();
    let canceled_blogs = blog_service.canceled().await.unwrap();

    assert_eq!(active_blogs.len(), 2);
    assert!(active_blogs.contains(&blog1));
    assert!(active_blogs.contains(&blog2));
    assert!(!active_blogs.contains(&blog3));

    assert_eq!(canceled_blogs.len(), 1);
    assert!(canceled_blogs.contains(&blog3));
    assert!(!canceled_blogs.contains(&blog1));
    assert!(!canceled_blogs.contains(&blog2));

    assert!(!active_blogs.contains(&draft));
    assert!(!canceled_blogs.contains(&draft));

    Ok(())
}
