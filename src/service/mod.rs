//! Services combining repositories with validation, slug allocation,
//! transactions and retries.

pub mod blog;
pub mod category;
pub mod comment;
pub mod message;
pub mod region;
pub mod retry;
pub mod site;
pub mod slug;
pub mod user;
pub mod viewing;
