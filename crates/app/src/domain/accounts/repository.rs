//! Accounts Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query_as, sqlite::SqliteRow};

use crate::{
    columns::{timestamp_to_column, try_get_timestamp},
    domain::accounts::models::{DEFAULT_IMAGE_FILE, User, UserId},
};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const FIND_USER_BY_EMAIL_SQL: &str = include_str!("sql/find_user_by_email.sql");
const UPDATE_PROFILE_SQL: &str = include_str!("sql/update_profile.sql");

/// A user row together with its password hash.
#[derive(Debug, Clone)]
pub(crate) struct UserRecord {
    pub user: User,
    pub password_hash: String,
}

/// Insert payload with the password already hashed.
#[derive(Debug)]
pub(crate) struct UserInsert<'a> {
    pub email: &'a str,
    pub password_hash: &'a str,
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub country: Option<&'a str>,
    pub is_admin: bool,
    pub created_at: Timestamp,
}

/// Update payload with the password already hashed.
#[derive(Debug)]
pub(crate) struct ProfileChanges<'a> {
    pub first_name: Option<&'a str>,
    pub last_name: Option<&'a str>,
    pub country: Option<&'a str>,
    pub password_hash: Option<&'a str>,
    pub image_file: Option<&'a str>,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteAccountsRepository;

impl SqliteAccountsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_user(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: UserInsert<'_>,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Sqlite, UserRecord>(CREATE_USER_SQL)
            .bind(user.email)
            .bind(user.password_hash)
            .bind(user.first_name)
            .bind(user.last_name)
            .bind(user.country)
            .bind(DEFAULT_IMAGE_FILE)
            .bind(user.is_admin)
            .bind(timestamp_to_column(user.created_at))
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn get_user(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: UserId,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Sqlite, UserRecord>(GET_USER_SQL)
            .bind(user.into_i64())
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_user_by_email(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        email: &str,
    ) -> Result<Option<UserRecord>, sqlx::Error> {
        query_as::<Sqlite, UserRecord>(FIND_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn update_profile(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        user: UserId,
        changes: ProfileChanges<'_>,
    ) -> Result<UserRecord, sqlx::Error> {
        query_as::<Sqlite, UserRecord>(UPDATE_PROFILE_SQL)
            .bind(user.into_i64())
            .bind(changes.first_name)
            .bind(changes.last_name)
            .bind(changes.country)
            .bind(changes.password_hash)
            .bind(changes.image_file)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, SqliteRow> for UserRecord {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        Ok(Self {
            user: User {
                id: UserId::from_i64(row.try_get("id")?),
                email: row.try_get("email")?,
                first_name: row.try_get("first_name")?,
                last_name: row.try_get("last_name")?,
                country: row.try_get("country")?,
                image_file: row.try_get("image_file")?,
                is_admin: row.try_get("is_admin")?,
                created_at: try_get_timestamp(row, "created_at")?,
            },
            password_hash: row.try_get("password_hash")?,
        })
    }
}
