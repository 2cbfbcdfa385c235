//! # summify-commons
//!
//! Shared types for the summify backend.
//!
//! This crate provides the foundational pieces used across all summify crates
//! (summify-auth, summify-sql, summify-api, summify-server):
//! - `ApiError` / `ApiResult`: the error taxonomy every layer speaks
//! - `models`: the user and article records exchanged with clients
//! - `schema`: a declarative request-body validator that aggregates violations
//!
//! It deliberately has no web-framework or storage dependencies so that it can
//! sit at the bottom of the dependency graph.

pub mod errors;
pub mod models;
pub mod schema;

pub use errors::{ApiError, ApiResult};
pub use models::{NewUser, SummarizedArticle, User};
pub use schema::{FieldRule, FieldType, Schema};
