//! Data access layer repositories.
//!
//! Each repository wraps the queries for one table (or a parent/child pair) and
//! is generic over [`sea_orm::ConnectionTrait`], so the same repository works on
//! a plain connection or inside a transaction. Repositories do not validate
//! input; that happens in the service layer.

pub mod blog;
pub mod blog_viewing;
pub mod category;
pub mod comment;
pub mod message;
pub mod region;
pub mod site;
pub mod user;
