//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main blogsite crate so fixtures and tests
//! read the same way.

pub type UserModel = entity::blogsite_user::Model;

pub type RegionModel = entity::region::Model;

pub type DistrictModel = entity::district::Model;

pub type CategoryModel = entity::category::Model;

pub type SiteModel = entity::site::Model;

pub type BlogModel = entity::blog::Model;

pub type BlogCategoryModel = entity::blog_category::Model;

pub type CommentModel = entity::comment::Model;

pub type MessageModel = entity::message::Model;
