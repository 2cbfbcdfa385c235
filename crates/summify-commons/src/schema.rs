//! Declarative request-body validation.
//!
//! A `Schema` is a flat description of the fields a JSON request body may
//! carry: which are required, what type each must be, and simple bounds.
//! Validation walks the whole body and returns **every** violation found
//! rather than stopping at the first, so a caller can fix a malformed request
//! in one round-trip.
//!
//! Schemas are plain consts; the per-endpoint definitions live next to the
//! handlers in summify-api.

use serde_json::Value;

/// Expected shape of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// UTF-8 string with optional length bounds (in characters).
    String {
        min_length: Option<usize>,
        max_length: Option<usize>,
    },
    /// Integer with optional inclusive bounds.
    Integer {
        minimum: Option<i64>,
        maximum: Option<i64>,
    },
    Boolean,
    /// String that must look like an email address, with optional length bounds.
    Email {
        min_length: Option<usize>,
        max_length: Option<usize>,
    },
}

/// One field's validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

/// A declarative description of a request body's shape.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    pub fields: &'static [FieldRule],
    /// When false, fields not named in `fields` are violations. All summify
    /// schemas keep this false so a PATCH cannot smuggle in columns the
    /// endpoint never meant to expose (e.g. `isAdmin` on a profile update).
    pub allow_unknown: bool,
}

impl Schema {
    /// Validate `body` against this schema, collecting all violations.
    ///
    /// An empty vec means the body is valid.
    pub fn validate(&self, body: &Value) -> Vec<String> {
        let mut violations = Vec::new();

        let Some(object) = body.as_object() else {
            violations.push("request body must be a JSON object".to_string());
            return violations;
        };

        for rule in self.fields {
            match object.get(rule.name) {
                Some(value) => check_field(rule, value, &mut violations),
                None => {
                    if rule.required {
                        violations.push(format!("{} is required", rule.name));
                    }
                }
            }
        }

        if !self.allow_unknown {
            for key in object.keys() {
                if !self.fields.iter().any(|rule| rule.name == key) {
                    violations.push(format!("{} is not an allowed field", key));
                }
            }
        }

        violations
    }
}

fn check_field(rule: &FieldRule, value: &Value, violations: &mut Vec<String>) {
    match rule.field_type {
        FieldType::String {
            min_length,
            max_length,
        } => check_string(rule.name, value, min_length, max_length, violations),
        FieldType::Email {
            min_length,
            max_length,
        } => {
            check_string(rule.name, value, min_length, max_length, violations);
            if let Some(text) = value.as_str() {
                // Shape check only; deliverability is not this layer's problem.
                let looks_like_email = text
                    .split_once('@')
                    .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
                    .unwrap_or(false);
                if !looks_like_email {
                    violations.push(format!("{} must be a valid email address", rule.name));
                }
            }
        }
        FieldType::Integer { minimum, maximum } => match value.as_i64() {
            Some(n) => {
                if let Some(min) = minimum {
                    if n < min {
                        violations.push(format!("{} must be at least {}", rule.name, min));
                    }
                }
                if let Some(max) = maximum {
                    if n > max {
                        violations.push(format!("{} must be at most {}", rule.name, max));
                    }
                }
            }
            None => violations.push(format!("{} must be an integer", rule.name)),
        },
        FieldType::Boolean => {
            if !value.is_boolean() {
                violations.push(format!("{} must be a boolean", rule.name));
            }
        }
    }
}

fn check_string(
    name: &str,
    value: &Value,
    min_length: Option<usize>,
    max_length: Option<usize>,
    violations: &mut Vec<String>,
) {
    let Some(text) = value.as_str() else {
        violations.push(format!("{} must be a string", name));
        return;
    };
    let len = text.chars().count();
    if let Some(min) = min_length {
        if len < min {
            violations.push(format!("{} must be at least {} characters", name, min));
        }
    }
    if let Some(max) = max_length {
        if len > max {
            violations.push(format!("{} must be at most {} characters", name, max));
        }
    }
}
