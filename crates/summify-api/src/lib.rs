//! # summify-api
//!
//! HTTP layer for the summify backend:
//! - `handlers`: route handlers for auth, users, and article summaries
//! - `middleware`: the fail-open JWT authentication middleware
//! - `routes`: route table registration
//! - `schemas`: per-endpoint request-body schemas
//! - `store`: storage traits and their Postgres implementations
//!
//! Authorization lives in summify-auth; handlers here only compose its guards
//! and translate classified errors into HTTP responses.

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod schemas;
pub mod store;
