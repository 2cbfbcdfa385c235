//! Partial-update `SET` clause builder.
//!
//! `UPDATE` endpoints accept a sparse subset of an entity's fields. This
//! module turns that subset into the `SET` portion of a parameterized
//! statement without ever interpolating a value into SQL text.
//!
//! The core invariant: clause position i binds to `values[i]`. Placeholders
//! are 1-based and strictly increasing in the same order the update pairs were
//! supplied, so the caller can append further parameters (e.g. the `WHERE`
//! key) starting at `values.len() + 1`.

use summify_commons::{ApiError, ApiResult};

use crate::param::SqlParam;

/// A built `SET` clause and its positionally aligned bind values.
#[derive(Debug, Clone, PartialEq)]
pub struct SetClause {
    /// `"column"=$1, "column"=$2, ...` — columns double-quoted literally.
    pub columns: String,
    /// Bind values, index-aligned with the placeholders in `columns`.
    pub values: Vec<SqlParam>,
}

/// Build a `SET` clause from ordered `(field, value)` pairs.
///
/// `column_map` translates logical field names (as clients send them, e.g.
/// `firstName`) to physical column names (`first_name`); fields without an
/// entry keep their logical name. The update list is an explicit ordered
/// sequence rather than a map so the placeholder/value alignment is visible
/// in the types.
///
/// # Errors
/// `BadRequest("no data")` when `updates` is empty — an update that changes
/// nothing is never valid.
pub fn sql_for_partial_update(
    updates: Vec<(String, SqlParam)>,
    column_map: &[(&str, &str)],
) -> ApiResult<SetClause> {
    if updates.is_empty() {
        return Err(ApiError::bad_request("no data"));
    }

    let mut clauses = Vec::with_capacity(updates.len());
    let mut values = Vec::with_capacity(updates.len());

    for (position, (field, value)) in updates.into_iter().enumerate() {
        let column = column_map
            .iter()
            .find(|(logical, _)| *logical == field)
            .map(|(_, physical)| *physical)
            .unwrap_or(field.as_str());
        clauses.push(format!("\"{}\"=${}", column, position + 1));
        values.push(value);
    }

    Ok(SetClause {
        columns: clauses.join(", "),
        values,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_ALIASES: &[(&str, &str)] =
        &[("firstName", "first_name"), ("lastName", "last_name")];

    fn sample_updates() -> Vec<(String, SqlParam)> {
        vec![
            ("firstName".to_string(), SqlParam::from("Test")),
            ("lastName".to_string(), SqlParam::from("User")),
            ("age".to_string(), SqlParam::from(25i64)),
        ]
    }

    #[test]
    fn builds_aliased_clause_with_aligned_values() {
        let clause = sql_for_partial_update(sample_updates(), USER_ALIASES).unwrap();
        assert_eq!(clause.columns, r#""first_name"=$1, "last_name"=$2, "age"=$3"#);
        assert_eq!(
            clause.values,
            vec![
                SqlParam::Text("Test".to_string()),
                SqlParam::Text("User".to_string()),
                SqlParam::Int(25),
            ]
        );
    }

    #[test]
    fn empty_update_map_is_rejected() {
        let result = sql_for_partial_update(Vec::new(), USER_ALIASES);
        assert_eq!(result, Err(ApiError::bad_request("no data")));
    }

    #[test]
    fn unaliased_fields_keep_their_logical_name() {
        let clause = sql_for_partial_update(
            vec![("summary".to_string(), SqlParam::from("short"))],
            &[],
        )
        .unwrap();
        assert_eq!(clause.columns, r#""summary"=$1"#);
        assert_eq!(clause.values, vec![SqlParam::Text("short".to_string())]);
    }

    #[test]
    fn clause_count_matches_value_count() {
        let clause = sql_for_partial_update(sample_updates(), USER_ALIASES).unwrap();
        assert_eq!(clause.columns.matches('$').count(), clause.values.len());
        assert_eq!(clause.values.len(), 3);
    }

    #[test]
    fn placeholders_are_one_based_and_strictly_increasing() {
        let updates: Vec<(String, SqlParam)> = (0..5)
            .map(|i| (format!("f{}", i), SqlParam::Int(i)))
            .collect();
        let clause = sql_for_partial_update(updates, &[]).unwrap();
        let positions: Vec<usize> = clause
            .columns
            .split(", ")
            .map(|part| part.rsplit('$').next().unwrap().parse().unwrap())
            .collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn identical_inputs_build_identical_clauses() {
        let first = sql_for_partial_update(sample_updates(), USER_ALIASES).unwrap();
        let second = sql_for_partial_update(sample_updates(), USER_ALIASES).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn value_content_never_reaches_the_sql_text() {
        let clause = sql_for_partial_update(
            vec![(
                "summary".to_string(),
                SqlParam::from("'; DROP TABLE users; --"),
            )],
            &[],
        )
        .unwrap();
        assert!(!clause.columns.contains("DROP TABLE"));
        assert_eq!(clause.columns, r#""summary"=$1"#);
    }
}
