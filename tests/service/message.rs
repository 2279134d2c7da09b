//! Tests for MessageService.

use blogsite::{
    model::{message::NewMessage, user::NewUser},
    service::{message::MessageService, user::UserService},
    util::password::PasswordHasher,
};
use blogsite_test_utils::prelude::*;

/// Tests creating a message.
///
/// Verifies that a new message starts unresolved and displays as its subject.
///
/// Expected: Ok with status false
#[tokio::test]
async fn creates_unresolved_message() -> Result<(), TestError> {
    let test = TestBuilder::new().with_blog_tables().build().await?;

    let user_service = UserService::new(&test.db, PasswordHasher::new(1));
    let user = user_service
        .create_user(NewUser::new(
            "messenger",
            "messenger@example.com",
            "securepassword",
        ))
        .await
        .unwrap();

    let message_service = MessageService::new(&test.db);
    let result = message_service
        .create(NewMessage {
            author_id: user.id,
            subject: "Test Subject".to_string(),
            body: "This is a test message".to_string(),
        })
        .await;

    assert!(result.is_ok());
    let message = result.unwrap();
    assert_eq!(message.subject, "Test Subject");
    assert_eq!(message.to_string(), "Test Subject");
    assert!(!message.status);
    assert_eq!(message_service.list_unresolved().await.unwrap(), vec![message]);

    Ok(())
}
