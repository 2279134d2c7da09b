//! Unique slug allocation for categories and blogs.

use sea_orm::{ConnectionTrait, DbErr, SqlErr};

use crate::{
    data::{blog::BlogRepository, category::CategoryRepository},
    error::{validation::ValidationError, Error},
    util::slug,
};

/// Table whose `slug` column a slug must be unique in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlugTarget {
    Category,
    Blog,
}

pub struct SlugService<'a, C: ConnectionTrait> {
    db: &'a C,
    max_attempts: u32,
}

impl<'a, C: ConnectionTrait> SlugService<'a, C> {
    /// Creates a new instance of [`SlugService`]
    ///
    /// At least one candidate, the bare slug, is always tried.
    pub fn new(db: &'a C, max_attempts: u32) -> Self {
        Self {
            db,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Finds a slug for `name` not yet used in `target`.
    ///
    /// The bare slug of `name` is tried first, then up to `max_attempts - 1`
    /// suffixed candidates.
    ///
    /// # Returns
    /// - `Ok(String)` - Slug not present at the time of the check
    /// - `Err(Error::ValidationError(EmptySlug))` - `name` has no letters or digits
    /// - `Err(Error::ValidationError(SlugExhausted))` - Every candidate was taken
    /// - `Err(Error::DbErr)` - Uniqueness check failed
    pub async fn allocate(&self, target: SlugTarget, name: &str) -> Result<String, Error> {
        let base = slug::slugify(name);
        if base.is_empty() {
            return Err(ValidationError::EmptySlug(name.to_string()).into());
        }

        for attempt in 0..self.max_attempts {
            let candidate = slug::candidate(&base, attempt);

            let taken = match target {
                SlugTarget::Category => {
                    CategoryRepository::new(self.db)
                        .slug_exists(&candidate)
                        .await?
                }
                SlugTarget::Blog => BlogRepository::new(self.db).slug_exists(&candidate).await?,
            };

            if !taken {
                return Ok(candidate);
            }
        }

        Err(ValidationError::SlugExhausted {
            base,
            attempts: self.max_attempts,
        }
        .into())
    }
}

/// Maps a unique violation raised while inserting `slug` to [`ValidationError::SlugTaken`].
///
/// Any other database error is passed through unchanged.
pub fn slug_conflict(err: DbErr, slug: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            ValidationError::SlugTaken(slug.to_string()).into()
        }
        _ => err.into(),
    }
}
