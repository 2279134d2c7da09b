use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    data::user::UserRepository,
    error::{validation::ValidationError, Error},
    model::{db::UserModel, user::NewUser},
    util::password::{self, PasswordHasher},
};

pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    hasher: PasswordHasher,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of [`UserService`]
    pub fn new(db: &'a DatabaseConnection, hasher: PasswordHasher) -> Self {
        Self { db, hasher }
    }

    /// Creates a regular account
    ///
    /// The username is trimmed and the domain part of the email lowercased
    /// before the uniqueness checks. The raw password is hashed and never stored.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The created account
    /// - `Err(Error::ValidationError(EmptyField))` - Username or email is blank
    /// - `Err(Error::ValidationError(DuplicateUsername | DuplicateEmail))` - Identity already in use
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn create_user(&self, new_user: NewUser) -> Result<UserModel, Error> {
        self.create(new_user, false).await
    }

    /// Creates a staff account
    pub async fn create_superuser(&self, new_user: NewUser) -> Result<UserModel, Error> {
        self.create(new_user, true).await
    }

    async fn create(&self, new_user: NewUser, is_staff: bool) -> Result<UserModel, Error> {
        let user_repo = UserRepository::new(self.db);

        let username = new_user.username.trim().to_string();
        if username.is_empty() {
            return Err(ValidationError::EmptyField("username").into());
        }

        let email = normalize_email(&new_user.email);
        if email.is_empty() {
            return Err(ValidationError::EmptyField("email").into());
        }

        if user_repo.get_by_username(&username).await?.is_some() {
            return Err(ValidationError::DuplicateUsername(username).into());
        }

        if user_repo.get_by_email(&email).await?.is_some() {
            return Err(ValidationError::DuplicateEmail(email).into());
        }

        let password_hash = self.hasher.hash(&new_user.password);

        let user = user_repo
            .create(&username, &email, &password_hash, is_staff)
            .await
            .map_err(|e| identity_conflict(e, &username, &email))?;

        tracing::debug!("Created user {} with ID {}", user.username, user.id);

        Ok(user)
    }

    /// Checks a raw password against the account's stored hash
    pub fn check_password(&self, user: &UserModel, raw_password: &str) -> bool {
        password::verify(raw_password, &user.password)
    }

    pub async fn get_by_id(&self, user_id: i32) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db).get_by_id(user_id).await?)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db)
            .get_by_username(username.trim())
            .await?)
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserModel>, Error> {
        Ok(UserRepository::new(self.db)
            .get_by_email(&normalize_email(email))
            .await?)
    }

    /// Deletes an account, returning `false` if it did not exist
    ///
    /// Comments and messages of the account are deleted with it; blogs are kept
    /// without an author.
    pub async fn delete(&self, user_id: i32) -> Result<bool, Error> {
        let result = UserRepository::new(self.db).delete(user_id).await?;

        Ok(result.rows_affected > 0)
    }
}

/// Trims the email and lowercases its domain part
///
/// The local part is kept as entered since mail servers may treat it as case sensitive.
pub fn normalize_email(email: &str) -> String {
    let email = email.trim();

    match email.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => email.to_string(),
    }
}

/// Maps a unique violation raised by a concurrent signup to the matching duplicate error
fn identity_conflict(err: DbErr, username: &str, email: &str) -> Error {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(message)) => {
            if message.contains("email") {
                ValidationError::DuplicateEmail(email.to_string()).into()
            } else {
                ValidationError::DuplicateUsername(username.to_string()).into()
            }
        }
        _ => err.into(),
    }
}
