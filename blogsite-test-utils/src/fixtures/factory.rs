//! Factory functions for in-memory models.
//!
//! These never touch the database and are suited to unit tests of pure logic.

use chrono::Utc;
use entity::sea_orm_active_enums::BlogStatus;
use serde_json::json;

use crate::model::{BlogModel, SiteModel, UserModel};

/// Create a mock user model with `<username>@example.com` as email.
pub fn mock_user_model(id: i32, username: &str) -> UserModel {
    UserModel {
        id,
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: crate::fixtures::user::UNUSABLE_PASSWORD.to_string(),
        is_active: true,
        is_staff: false,
        created_at: Utc::now().naive_utc(),
    }
}

/// Create a mock blog model whose slug is the lowercased, hyphenated title.
pub fn mock_blog_model(id: i32, title: &str, status: BlogStatus) -> BlogModel {
    let now = Utc::now().naive_utc();
    BlogModel {
        id,
        title: title.to_string(),
        slug: title.to_lowercase().replace(' ', "-"),
        description: format!("Content for {}", title),
        status,
        author_id: None,
        view_count: 0,
        created_at: now,
        updated_at: now,
    }
}

pub fn mock_site_model(id: i32, name: &str) -> SiteModel {
    SiteModel {
        id,
        name: name.to_string(),
        picture: "test.jpg".to_string(),
        about_us: "About Us Information".to_string(),
        social: json!({ "twitter": "https://twitter.com/test" }),
        address: "123 Test Street".to_string(),
        email: "test@example.com".to_string(),
        phone: "+123456789".to_string(),
    }
}
