//! Postgres-backed user store.

use std::sync::Arc;

use async_trait::async_trait;
use summify_auth::UserDirectory;
use summify_commons::{ApiError, ApiResult, NewUser, User};
use summify_sql::{sql_for_partial_update, SqlParam};
use tokio_postgres::error::SqlState;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Row};

use super::UserStore;

/// Logical PATCH field -> `users` column. Fields without an entry (`email`,
/// `password`) already match their column name.
pub const USER_COLUMN_ALIASES: &[(&str, &str)] = &[
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("isAdmin", "is_admin"),
];

const USER_COLUMNS: &str = "username, first_name, last_name, email, is_admin";

pub struct PgUserStore {
    client: Arc<Client>,
}

impl PgUserStore {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

fn user_from_row(row: &Row) -> User {
    User {
        username: row.get("username"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        is_admin: row.get("is_admin"),
    }
}

pub(crate) fn db_error(err: tokio_postgres::Error) -> ApiError {
    if let Some(db) = err.as_db_error() {
        if db.code() == &SqlState::UNIQUE_VIOLATION {
            return ApiError::bad_request(format!(
                "duplicate key: {}",
                db.constraint().unwrap_or("unique constraint")
            ));
        }
    }
    ApiError::internal(format!("database: {}", err))
}

#[async_trait]
impl UserDirectory for PgUserStore {
    async fn user_exists(&self, username: &str) -> ApiResult<bool> {
        let row = self
            .client
            .query_opt("SELECT 1 FROM users WHERE username = $1", &[&username])
            .await
            .map_err(db_error)?;
        Ok(row.is_some())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &NewUser, password_hash: &str) -> ApiResult<User> {
        let statement = format!(
            "INSERT INTO users (username, password, first_name, last_name, email, is_admin) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING {}",
            USER_COLUMNS
        );
        let row = self
            .client
            .query_one(
                &statement,
                &[
                    &user.username,
                    &password_hash,
                    &user.first_name,
                    &user.last_name,
                    &user.email,
                    &user.is_admin,
                ],
            )
            .await
            .map_err(|err| {
                if err.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                    ApiError::bad_request(format!("duplicate username: {}", user.username))
                } else {
                    db_error(err)
                }
            })?;
        Ok(user_from_row(&row))
    }

    async fn find_all(&self) -> ApiResult<Vec<User>> {
        let statement = format!("SELECT {} FROM users ORDER BY username", USER_COLUMNS);
        let rows = self
            .client
            .query(&statement, &[])
            .await
            .map_err(db_error)?;
        Ok(rows.iter().map(user_from_row).collect())
    }

    async fn get(&self, username: &str) -> ApiResult<Option<User>> {
        let statement = format!("SELECT {} FROM users WHERE username = $1", USER_COLUMNS);
        let row = self
            .client
            .query_opt(&statement, &[&username])
            .await
            .map_err(db_error)?;
        Ok(row.as_ref().map(user_from_row))
    }

    async fn credentials(&self, username: &str) -> ApiResult<Option<(User, String)>> {
        let statement = format!(
            "SELECT {}, password FROM users WHERE username = $1",
            USER_COLUMNS
        );
        let row = self
            .client
            .query_opt(&statement, &[&username])
            .await
            .map_err(db_error)?;
        Ok(row.map(|row| {
            let hash: String = row.get("password");
            (user_from_row(&row), hash)
        }))
    }

    async fn update(&self, username: &str, updates: Vec<(String, SqlParam)>) -> ApiResult<User> {
        let set = sql_for_partial_update(updates, USER_COLUMN_ALIASES)?;

        // The username key binds right after the SET values.
        let statement = format!(
            "UPDATE users SET {} WHERE username = ${} RETURNING {}",
            set.columns,
            set.values.len() + 1,
            USER_COLUMNS
        );
        let mut params: Vec<&(dyn ToSql + Sync)> = set
            .values
            .iter()
            .map(|value| value as &(dyn ToSql + Sync))
            .collect();
        params.push(&username);

        let row = self
            .client
            .query_opt(&statement, &params)
            .await
            .map_err(db_error)?;
        row.as_ref()
            .map(user_from_row)
            .ok_or_else(|| ApiError::NotFound(format!("no such user: {}", username)))
    }

    async fn remove(&self, username: &str) -> ApiResult<bool> {
        let deleted = self
            .client
            .execute("DELETE FROM users WHERE username = $1", &[&username])
            .await
            .map_err(db_error)?;
        Ok(deleted > 0)
    }
}
