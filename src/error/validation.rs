use thiserror::Error;

/// Reasons a create or update is rejected before anything is persisted.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Field {0} must not be empty")]
    EmptyField(&'static str),
    #[error("A user with username {0:?} already exists")]
    DuplicateUsername(String),
    #[error("A user with email {0:?} already exists")]
    DuplicateEmail(String),
    #[error("Cannot derive a slug from {0:?}")]
    EmptySlug(String),
    #[error("No unique slug found for base {base:?} after {attempts} attempts")]
    SlugExhausted { base: String, attempts: u32 },
    /// Another writer inserted the same slug between the uniqueness check and the insert.
    #[error("Slug {0:?} was taken concurrently")]
    SlugTaken(String),
    #[error("User ID {0} does not exist")]
    MissingUser(i32),
    #[error("Region ID {0} does not exist")]
    MissingRegion(i32),
    #[error("Category ID {0} does not exist")]
    MissingCategory(i32),
    #[error("Blog ID {0} does not exist")]
    MissingBlog(i32),
    #[error("Message ID {0} does not exist")]
    MissingMessage(i32),
    #[error("Site ID {0} does not exist")]
    MissingSite(i32),
    #[error("Social links must be an object of network name to URL")]
    InvalidSocial,
}
