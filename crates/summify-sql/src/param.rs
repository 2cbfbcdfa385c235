//! Bind-parameter value type.
//!
//! Update bodies arrive as JSON, so the values that flow into a `SET` clause
//! are JSON scalars. `SqlParam` is the owned, storage-ready form of such a
//! scalar: it implements `ToSql` so a `Vec<SqlParam>` can be handed straight
//! to tokio-postgres as positional parameters.

use bytes::BytesMut;
use serde_json::Value;
use tokio_postgres::types::{to_sql_checked, IsNull, ToSql, Type};

/// An owned SQL bind value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Text(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl SqlParam {
    /// Convert a JSON scalar into a bind value.
    ///
    /// Arrays and objects have no column representation here; they are stored
    /// as their JSON text, which keeps the builder total without widening the
    /// schema surface (no summify column currently takes one).
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::String(s) => SqlParam::Text(s),
            Value::Bool(b) => SqlParam::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    SqlParam::Int(i)
                } else if let Some(f) = n.as_f64() {
                    SqlParam::Float(f)
                } else {
                    SqlParam::Null
                }
            }
            Value::Null => SqlParam::Null,
            other => SqlParam::Text(other.to_string()),
        }
    }

    /// The text payload, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SqlParam::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Int(value)
    }
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        SqlParam::Bool(value)
    }
}

impl ToSql for SqlParam {
    fn to_sql(
        &self,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn std::error::Error + Sync + Send>> {
        match self {
            SqlParam::Text(v) => v.to_sql(ty, out),
            SqlParam::Int(v) => v.to_sql(ty, out),
            SqlParam::Float(v) => v.to_sql(ty, out),
            SqlParam::Bool(v) => v.to_sql(ty, out),
            SqlParam::Null => Ok(IsNull::Yes),
        }
    }

    fn accepts(ty: &Type) -> bool {
        // The variant is only known at bind time, so accept the union of the
        // scalar types the variants can encode to.
        <String as ToSql>::accepts(ty)
            || <i64 as ToSql>::accepts(ty)
            || <f64 as ToSql>::accepts(ty)
            || <bool as ToSql>::accepts(ty)
    }

    to_sql_checked!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_scalars_map_to_matching_variants() {
        assert_eq!(
            SqlParam::from_json(json!("Test")),
            SqlParam::Text("Test".to_string())
        );
        assert_eq!(SqlParam::from_json(json!(25)), SqlParam::Int(25));
        assert_eq!(SqlParam::from_json(json!(2.5)), SqlParam::Float(2.5));
        assert_eq!(SqlParam::from_json(json!(true)), SqlParam::Bool(true));
        assert_eq!(SqlParam::from_json(json!(null)), SqlParam::Null);
    }

    #[test]
    fn non_scalar_json_falls_back_to_text() {
        assert_eq!(
            SqlParam::from_json(json!(["a", "b"])),
            SqlParam::Text("[\"a\",\"b\"]".to_string())
        );
    }
}
