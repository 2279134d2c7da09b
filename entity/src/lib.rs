//! Database entities for the blogsite schema.

pub mod prelude;

pub mod blog;
pub mod blog_category;
pub mod blog_viewing;
pub mod blogsite_user;
pub mod category;
pub mod comment;
pub mod district;
pub mod message;
pub mod region;
pub mod sea_orm_active_enums;
pub mod site;
