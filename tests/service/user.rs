//! Tests for UserService.

use blogsite::{
    error::{validation::ValidationError, Error},
    model::user::{NewUser, UserDto},
    service::user::UserService,
    util::password::PasswordHasher,
};
use blogsite_test_utils::prelude::*;

/// Tests creating an account and checking its password.
///
/// Expected: Ok with the raw password verifying and a wrong one not
#[tokio::test]
async fn creates_user() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;

    let user_service = UserService::new(&test.db, PasswordHasher::new(1));
    let result = user_service
        .create_user(NewUser::new("author", "author@example.com", "securepassword"))
        .await;

    assert!(result.is_ok());
    let user = result.unwrap();
    assert_eq!(user.to_string(), "author");
    assert!(user_service.check_password(&user, "securepassword"));
    assert!(!user_service.check_password(&user, "wrongpassword"));

    let dto = UserDto::from(user.clone());
    assert_eq!(dto.id, user.id);
    assert_eq!(dto.email, "author@example.com");

    Ok(())
}

/// Tests creating two accounts with the same email.
///
/// Expected: Err with DuplicateEmail
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;

    let user_service = UserService::new(&test.db, PasswordHasher::new(1));
    user_service
        .create_user(NewUser::new("author", "author@example.com", "securepassword"))
        .await
        .unwrap();
    let result = user_service
        .create_user(NewUser::new("other", "author@example.com", "securepassword"))
        .await;

    assert!(matches!(
        result,
        Err(Error::ValidationError(ValidationError::DuplicateEmail(_)))
    ));

    Ok(())
}
