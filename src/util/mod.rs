//! Utility functions shared by the services.

pub mod password;
pub mod slug;
