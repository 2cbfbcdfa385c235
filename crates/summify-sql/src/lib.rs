//! # summify-sql
//!
//! SQL helpers shared by every entity store in summify.
//!
//! The centerpiece is [`sql_for_partial_update`], which turns a sparse
//! "fields to change" list into a parameterized `SET` clause plus an aligned
//! bind-value list. Values never appear in the generated SQL text; they travel
//! out-of-band as [`SqlParam`]s so the caller binds them as `$n` parameters.

pub mod param;
pub mod partial_update;

pub use param::SqlParam;
pub use partial_update::{sql_for_partial_update, SetClause};
