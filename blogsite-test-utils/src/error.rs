use thiserror::Error;

/// Error returned by test setup and fixtures.
#[derive(Error, Debug)]
pub enum TestError {
    /// Table creation, fixture insert or a repository call failed
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
}
