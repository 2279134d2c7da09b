//! Test fixture modules for inserting records directly into the test database.
//!
//! - `user` - BlogsiteUser records
//! - `region` - Region and District records
//! - `blog` - Category, Blog, category links, comments and messages
//! - `factory` - in-memory models that never touch the database

pub mod blog;
pub mod factory;
pub mod region;
pub mod user;
