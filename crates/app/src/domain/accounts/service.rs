//! Accounts service.

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;
use tracing::{info, warn};

use crate::{
    database::Db,
    domain::accounts::{
        credentials::{hash_password, verify_password},
        errors::AccountsServiceError,
        models::{Credentials, NewUser, ProfileUpdate, User, UserId},
        repository::{ProfileChanges, SqliteAccountsRepository, UserInsert},
    },
};

#[derive(Debug, Clone)]
pub struct SqliteAccountsService {
    db: Db,
    repository: SqliteAccountsRepository,
}

impl SqliteAccountsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteAccountsRepository::new(),
        }
    }
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

#[async_trait]
impl AccountsService for SqliteAccountsService {
    async fn sign_up(&self, user: NewUser) -> Result<User, AccountsServiceError> {
        let email = user.email.trim();

        if email.is_empty() || user.password.is_empty() {
            return Err(AccountsServiceError::MissingRequiredData);
        }

        let password_hash = hash_password(user.password.expose());

        let mut tx = self.db.begin().await?;

        let created = self
            .repository
            .create_user(
                &mut tx,
                UserInsert {
                    email,
                    password_hash: &password_hash,
                    first_name: non_empty(user.first_name.as_ref()),
                    last_name: non_empty(user.last_name.as_ref()),
                    country: non_empty(user.country.as_ref()),
                    is_admin: user.is_admin,
                    created_at: Timestamp::now(),
                },
            )
            .await?;

        tx.commit().await?;

        info!(user = %created.user.id, admin = created.user.is_admin, "user signed up");

        Ok(created.user)
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<User, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .find_user_by_email(&mut tx, credentials.email.trim())
            .await?;

        tx.commit().await?;

        match record {
            Some(record)
                if verify_password(credentials.password.expose(), &record.password_hash) =>
            {
                Ok(record.user)
            }
            Some(_) | None => {
                warn!("rejected login attempt");

                Err(AccountsServiceError::InvalidCredentials)
            }
        }
    }

    async fn get_user(&self, user: UserId) -> Result<User, AccountsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self.repository.get_user(&mut tx, user).await?;

        tx.commit().await?;

        Ok(record.user)
    }

    async fn update_profile(
        &self,
        user: UserId,
        update: ProfileUpdate,
    ) -> Result<User, AccountsServiceError> {
        let password_hash = update
            .password
            .as_ref()
            .filter(|password| !password.is_empty())
            .map(|password| hash_password(password.expose()));

        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_profile(
                &mut tx,
                user,
                ProfileChanges {
                    first_name: non_empty(update.first_name.as_ref()),
                    last_name: non_empty(update.last_name.as_ref()),
                    country: non_empty(update.country.as_ref()),
                    password_hash: password_hash.as_deref(),
                    image_file: non_empty(update.image_file.as_ref()),
                },
            )
            .await?;

        tx.commit().await?;

        info!(user = %user, "profile updated");

        Ok(updated.user)
    }
}

#[automock]
#[async_trait]
pub trait AccountsService: Send + Sync {
    /// Registers a new account. Emails are unique.
    async fn sign_up(&self, user: NewUser) -> Result<User, AccountsServiceError>;

    /// Resolves credentials to the matching account.
    async fn authenticate(&self, credentials: Credentials) -> Result<User, AccountsServiceError>;

    /// Retrieve a single account.
    async fn get_user(&self, user: UserId) -> Result<User, AccountsServiceError>;

    /// Overwrites profile fields; see [`ProfileUpdate`] for which fields are optional.
    async fn update_profile(
        &self,
        user: UserId,
        update: ProfileUpdate,
    ) -> Result<User, AccountsServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{
        domain::accounts::models::{DEFAULT_IMAGE_FILE, Password},
        test::{TestContext, helpers::new_user},
    };

    use super::*;

    fn credentials(email: &str, password: &str) -> Credentials {
        Credentials {
            email: email.to_string(),
            password: Password::new(password),
        }
    }

    #[tokio::test]
    async fn sign_up_creates_regular_user_with_default_picture() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx.accounts.sign_up(new_user("ada@example.com")).await?;

        assert_eq!(user.email, "ada@example.com");
        assert_eq!(user.first_name.as_deref(), Some("Ada"));
        assert_eq!(user.image_file, DEFAULT_IMAGE_FILE);
        assert!(!user.is_admin);

        Ok(())
    }

    #[tokio::test]
    async fn sign_up_duplicate_email_returns_already_exists() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.accounts.sign_up(new_user("ada@example.com")).await?;

        let result = ctx.accounts.sign_up(new_user("ada@example.com")).await;

        assert!(
            matches!(result, Err(AccountsServiceError::AlreadyExists)),
            "expected AlreadyExists, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn sign_up_without_password_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx
            .accounts
            .sign_up(NewUser {
                password: Password::new(""),
                ..new_user("ada@example.com")
            })
            .await;

        assert!(
            matches!(result, Err(AccountsServiceError::MissingRequiredData)),
            "expected MissingRequiredData, got {result:?}"
        );
    }

    #[tokio::test]
    async fn authenticate_accepts_correct_password() -> TestResult {
        let ctx = TestContext::new().await;

        let created = ctx.accounts.sign_up(new_user("ada@example.com")).await?;

        let user = ctx
            .accounts
            .authenticate(credentials("ada@example.com", "password"))
            .await?;

        assert_eq!(user.id, created.id);

        Ok(())
    }

    #[tokio::test]
    async fn authenticate_rejects_wrong_password_and_unknown_email() -> TestResult {
        let ctx = TestContext::new().await;

        ctx.accounts.sign_up(new_user("ada@example.com")).await?;

        let wrong_password = ctx
            .accounts
            .authenticate(credentials("ada@example.com", "nope"))
            .await;
        let unknown_email = ctx
            .accounts
            .authenticate(credentials("bob@example.com", "password"))
            .await;

        assert!(
            matches!(wrong_password, Err(AccountsServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {wrong_password:?}"
        );
        assert!(
            matches!(unknown_email, Err(AccountsServiceError::InvalidCredentials)),
            "expected InvalidCredentials, got {unknown_email:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn update_profile_keeps_password_when_blank() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx.accounts.sign_up(new_user("ada@example.com")).await?;

        let updated = ctx
            .accounts
            .update_profile(
                user.id,
                ProfileUpdate {
                    first_name: Some("Augusta".to_string()),
                    last_name: Some("King".to_string()),
                    country: Some("UK".to_string()),
                    password: Some(Password::new("")),
                    image_file: None,
                },
            )
            .await?;

        assert_eq!(updated.first_name.as_deref(), Some("Augusta"));
        assert_eq!(updated.image_file, DEFAULT_IMAGE_FILE);

        ctx.accounts
            .authenticate(credentials("ada@example.com", "password"))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn update_profile_changes_password_and_picture() -> TestResult {
        let ctx = TestContext::new().await;

        let user = ctx.accounts.sign_up(new_user("ada@example.com")).await?;

        let updated = ctx
            .accounts
            .update_profile(
                user.id,
                ProfileUpdate {
                    password: Some(Password::new("s3cret")),
                    image_file: Some("ada.png".to_string()),
                    ..ProfileUpdate::default()
                },
            )
            .await?;

        assert_eq!(updated.image_file, "ada.png");
        assert_eq!(updated.first_name, None);

        let old = ctx
            .accounts
            .authenticate(credentials("ada@example.com", "password"))
            .await;

        assert!(
            matches!(old, Err(AccountsServiceError::InvalidCredentials)),
            "old password should stop working, got {old:?}"
        );

        ctx.accounts
            .authenticate(credentials("ada@example.com", "s3cret"))
            .await?;

        Ok(())
    }

    #[tokio::test]
    async fn update_profile_unknown_user_returns_not_found() {
        let ctx = TestContext::new().await;

        let result = ctx
            .accounts
            .update_profile(UserId::from_i64(77), ProfileUpdate::default())
            .await;

        assert!(
            matches!(result, Err(AccountsServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }
}
