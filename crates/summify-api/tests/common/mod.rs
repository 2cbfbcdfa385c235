//! Shared fixtures for route tests: in-memory store implementations and
//! token helpers. The in-memory stores mirror the Postgres stores' observable
//! behavior (duplicate rejection, empty-update rejection, not-found results)
//! without a database.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use summify_api::store::{ArticleStore, UserStore};
use summify_auth::{TokenCodec, UserDirectory};
use summify_commons::{ApiError, ApiResult, NewUser, SummarizedArticle, User};
use summify_sql::SqlParam;

pub const TEST_SECRET: &str = "route-test-secret";

/// Low cost keeps seeded fixtures fast; the handlers still hash new
/// passwords at the production cost.
const SEED_BCRYPT_COST: u32 = 4;

pub fn codec() -> Arc<TokenCodec> {
    Arc::new(TokenCodec::new(TEST_SECRET))
}

pub fn bearer(codec: &TokenCodec, username: &str, is_admin: bool) -> String {
    format!("Bearer {}", codec.sign(username, is_admin).unwrap())
}

#[derive(Default)]
pub struct MemoryUserStore {
    rows: Mutex<Vec<(User, String)>>,
}

impl MemoryUserStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Insert a user directly, bypassing the HTTP layer.
    pub fn seed(&self, username: &str, password: &str, is_admin: bool) {
        let hash = bcrypt::hash(password, SEED_BCRYPT_COST).unwrap();
        let user = User {
            username: username.to_string(),
            first_name: "Seed".to_string(),
            last_name: "User".to_string(),
            email: format!("{}@example.com", username),
            is_admin,
        };
        self.rows.lock().unwrap().push((user, hash));
    }
}

#[async_trait]
impl UserDirectory for MemoryUserStore {
    async fn user_exists(&self, username: &str) -> ApiResult<bool> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().any(|(user, _)| user.username == username))
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn insert(&self, user: &NewUser, password_hash: &str) -> ApiResult<User> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|(stored, _)| stored.username == user.username) {
            return Err(ApiError::bad_request(format!(
                "duplicate username: {}",
                user.username
            )));
        }
        let stored = User {
            username: user.username.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            is_admin: user.is_admin,
        };
        rows.push((stored.clone(), password_hash.to_string()));
        Ok(stored)
    }

    async fn find_all(&self) -> ApiResult<Vec<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().map(|(user, _)| user.clone()).collect())
    }

    async fn get(&self, username: &str) -> ApiResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|(user, _)| user.username == username)
            .map(|(user, _)| user.clone()))
    }

    async fn credentials(&self, username: &str) -> ApiResult<Option<(User, String)>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .find(|(user, _)| user.username == username)
            .cloned())
    }

    async fn update(&self, username: &str, updates: Vec<(String, SqlParam)>) -> ApiResult<User> {
        if updates.is_empty() {
            return Err(ApiError::bad_request("no data"));
        }
        let mut rows = self.rows.lock().unwrap();
        let Some((user, hash)) = rows.iter_mut().find(|(user, _)| user.username == username)
        else {
            return Err(ApiError::NotFound(format!("no such user: {}", username)));
        };
        for (field, value) in updates {
            let text = value.as_text().unwrap_or_default().to_string();
            match field.as_str() {
                "firstName" => user.first_name = text,
                "lastName" => user.last_name = text,
                "email" => user.email = text,
                "password" => *hash = text,
                _ => {}
            }
        }
        Ok(user.clone())
    }

    async fn remove(&self, username: &str) -> ApiResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(user, _)| user.username != username);
        Ok(rows.len() < before)
    }
}

#[derive(Default)]
pub struct MemoryArticleStore {
    rows: Mutex<Vec<SummarizedArticle>>,
}

impl MemoryArticleStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl ArticleStore for MemoryArticleStore {
    async fn insert(&self, article: &SummarizedArticle) -> ApiResult<SummarizedArticle> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|stored| {
            stored.username == article.username && stored.article_title == article.article_title
        }) {
            return Err(ApiError::bad_request(format!(
                "duplicate article for {}: {}",
                article.username, article.article_title
            )));
        }
        rows.push(article.clone());
        Ok(article.clone())
    }

    async fn list_for_user(&self, username: &str) -> ApiResult<Vec<SummarizedArticle>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows
            .iter()
            .filter(|article| article.username == username)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        username: &str,
        article_title: &str,
        updates: Vec<(String, SqlParam)>,
    ) -> ApiResult<SummarizedArticle> {
        if updates.is_empty() {
            return Err(ApiError::bad_request("no data"));
        }
        let mut rows = self.rows.lock().unwrap();
        let Some(article) = rows
            .iter_mut()
            .find(|article| article.username == username && article.article_title == article_title)
        else {
            return Err(ApiError::NotFound(format!(
                "no such article for {}: {}",
                username, article_title
            )));
        };
        for (field, value) in updates {
            let text = value.as_text().unwrap_or_default().to_string();
            match field.as_str() {
                "articleUrl" => article.article_url = text,
                "summary" => article.summary = text,
                _ => {}
            }
        }
        Ok(article.clone())
    }

    async fn remove(&self, username: &str, article_title: &str) -> ApiResult<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|article| {
            !(article.username == username && article.article_title == article_title)
        });
        Ok(rows.len() < before)
    }
}
