//! Postgres-backed article-summary store.

use std::sync::Arc;

use async_trait::async_trait;
use summify_commons::{ApiError, ApiResult, SummarizedArticle};
use summify_sql::{sql_for_partial_update, SqlParam};
use tokio_postgres::error::SqlState;
use tokio_postgres::types::ToSql;
use tokio_postgres::{Client, Row};

use super::pg_users::db_error;
use super::ArticleStore;

/// Logical PUT field -> `summarized_articles` column.
pub const ARTICLE_COLUMN_ALIASES: &[(&str, &str)] = &[
    ("articleTitle", "article_title"),
    ("articleUrl", "article_url"),
];

const ARTICLE_COLUMNS: &str = "username, article_title, article_url, summary";

pub struct PgArticleStore {
    client: Arc<Client>,
}

impl PgArticleStore {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

fn article_from_row(row: &Row) -> SummarizedArticle {
    SummarizedArticle {
        username: row.get("username"),
        article_title: row.get("article_title"),
        article_url: row.get("article_url"),
        summary: row.get("summary"),
    }
}

#[async_trait]
impl ArticleStore for PgArticleStore {
    async fn insert(&self, article: &SummarizedArticle) -> ApiResult<SummarizedArticle> {
        let statement = format!(
            "INSERT INTO summarized_articles (username, article_title, article_url, summary) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            ARTICLE_COLUMNS
        );
        let row = self
            .client
            .query_one(
                &statement,
                &[
                    &article.username,
                    &article.article_title,
                    &article.article_url,
                    &article.summary,
                ],
            )
            .await
            .map_err(|err| {
                if err.code() == Some(&SqlState::UNIQUE_VIOLATION) {
                    ApiError::bad_request(format!(
                        "duplicate article for {}: {}",
                        article.username, article.article_title
                    ))
                } else {
                    db_error(err)
                }
            })?;
        Ok(article_from_row(&row))
    }

    async fn list_for_user(&self, username: &str) -> ApiResult<Vec<SummarizedArticle>> {
        let statement = format!(
            "SELECT {} FROM summarized_articles WHERE username = $1 ORDER BY article_title",
            ARTICLE_COLUMNS
        );
        let rows = self
            .client
            .query(&statement, &[&username])
            .await
            .map_err(db_error)?;
        Ok(rows.iter().map(article_from_row).collect())
    }

    async fn update(
        &self,
        username: &str,
        article_title: &str,
        updates: Vec<(String, SqlParam)>,
    ) -> ApiResult<SummarizedArticle> {
        let set = sql_for_partial_update(updates, ARTICLE_COLUMN_ALIASES)?;

        let statement = format!(
            "UPDATE summarized_articles SET {} WHERE username = ${} AND article_title = ${} \
             RETURNING {}",
            set.columns,
            set.values.len() + 1,
            set.values.len() + 2,
            ARTICLE_COLUMNS
        );
        let mut params: Vec<&(dyn ToSql + Sync)> = set
            .values
            .iter()
            .map(|value| value as &(dyn ToSql + Sync))
            .collect();
        params.push(&username);
        params.push(&article_title);

        let row = self
            .client
            .query_opt(&statement, &params)
            .await
            .map_err(db_error)?;
        row.as_ref().map(article_from_row).ok_or_else(|| {
            ApiError::NotFound(format!("no such article for {}: {}", username, article_title))
        })
    }

    async fn remove(&self, username: &str, article_title: &str) -> ApiResult<bool> {
        let deleted = self
            .client
            .execute(
                "DELETE FROM summarized_articles WHERE username = $1 AND article_title = $2",
                &[&username, &article_title],
            )
            .await
            .map_err(db_error)?;
        Ok(deleted > 0)
    }
}
