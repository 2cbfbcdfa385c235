//! Storage abstractions and their Postgres implementations.
//!
//! Handlers depend on the traits only; the server binary wires in the
//! Postgres-backed stores, and the integration tests substitute in-memory
//! ones.

pub mod pg_articles;
pub mod pg_users;

pub use pg_articles::PgArticleStore;
pub use pg_users::PgUserStore;

use async_trait::async_trait;
use summify_auth::UserDirectory;
use summify_commons::{ApiResult, NewUser, SummarizedArticle, User};
use summify_sql::SqlParam;

/// User persistence.
///
/// `UserDirectory` is a supertrait so the auth layer's existence guard can
/// run against any user store without this crate leaking into summify-auth.
#[async_trait]
pub trait UserStore: UserDirectory {
    /// Insert a new user with an already-hashed password.
    async fn insert(&self, user: &NewUser, password_hash: &str) -> ApiResult<User>;

    async fn find_all(&self) -> ApiResult<Vec<User>>;

    async fn get(&self, username: &str) -> ApiResult<Option<User>>;

    /// The user plus their stored password hash. Login only.
    async fn credentials(&self, username: &str) -> ApiResult<Option<(User, String)>>;

    /// Apply a partial update of logical fields. Password values must already
    /// be hashed by the caller.
    async fn update(&self, username: &str, updates: Vec<(String, SqlParam)>) -> ApiResult<User>;

    /// Returns true when a row was actually deleted.
    async fn remove(&self, username: &str) -> ApiResult<bool>;
}

/// Article-summary persistence.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    async fn insert(&self, article: &SummarizedArticle) -> ApiResult<SummarizedArticle>;

    async fn list_for_user(&self, username: &str) -> ApiResult<Vec<SummarizedArticle>>;

    async fn update(
        &self,
        username: &str,
        article_title: &str,
        updates: Vec<(String, SqlParam)>,
    ) -> ApiResult<SummarizedArticle>;

    /// Returns true when a row was actually deleted.
    async fn remove(&self, username: &str, article_title: &str) -> ApiResult<bool>;
}
