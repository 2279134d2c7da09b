//! Database model aliases and the input records accepted by services.

pub mod blog;
pub mod db;
pub mod message;
pub mod site;
pub mod user;
