//! Request-body schemas, one per mutating endpoint.
//!
//! Field names are the camelCase names clients send; the stores translate
//! them to column names. `allow_unknown` stays false everywhere so a request
//! cannot reach past the fields an endpoint means to expose.

use summify_commons::{FieldRule, FieldType, Schema};

/// Body of `POST /users` and `POST /users/register`.
pub const USER_NEW: Schema = Schema {
    fields: &[
        FieldRule {
            name: "username",
            field_type: FieldType::String {
                min_length: Some(1),
                max_length: Some(30),
            },
            required: true,
        },
        FieldRule {
            name: "firstName",
            field_type: FieldType::String {
                min_length: Some(1),
                max_length: Some(30),
            },
            required: true,
        },
        FieldRule {
            name: "lastName",
            field_type: FieldType::String {
                min_length: Some(1),
                max_length: Some(30),
            },
            required: true,
        },
        FieldRule {
            name: "password",
            field_type: FieldType::String {
                min_length: Some(5),
                max_length: Some(20),
            },
            required: true,
        },
        FieldRule {
            name: "email",
            field_type: FieldType::Email {
                min_length: Some(6),
                max_length: Some(60),
            },
            required: true,
        },
        FieldRule {
            name: "isAdmin",
            field_type: FieldType::Boolean,
            required: false,
        },
    ],
    allow_unknown: false,
};

/// Body of `PATCH /users/{username}`.
///
/// `username` and `isAdmin` are absent on purpose: with unknown fields
/// rejected, a profile update cannot rename an account or escalate it.
pub const USER_UPDATE: Schema = Schema {
    fields: &[
        FieldRule {
            name: "firstName",
            field_type: FieldType::String {
                min_length: Some(1),
                max_length: Some(30),
            },
            required: false,
        },
        FieldRule {
            name: "lastName",
            field_type: FieldType::String {
                min_length: Some(1),
                max_length: Some(30),
            },
            required: false,
        },
        FieldRule {
            name: "password",
            field_type: FieldType::String {
                min_length: Some(5),
                max_length: Some(20),
            },
            required: false,
        },
        FieldRule {
            name: "email",
            field_type: FieldType::Email {
                min_length: Some(6),
                max_length: Some(60),
            },
            required: false,
        },
    ],
    allow_unknown: false,
};

/// Body of `POST /users/{username}/articles`.
pub const ARTICLE_NEW: Schema = Schema {
    fields: &[
        FieldRule {
            name: "articleTitle",
            field_type: FieldType::String {
                min_length: Some(1),
                max_length: Some(200),
            },
            required: true,
        },
        FieldRule {
            name: "articleUrl",
            field_type: FieldType::String {
                min_length: Some(1),
                max_length: Some(2048),
            },
            required: true,
        },
        FieldRule {
            name: "summary",
            field_type: FieldType::String {
                min_length: Some(1),
                max_length: Some(5000),
            },
            required: true,
        },
    ],
    allow_unknown: false,
};

/// Body of `PUT /users/{username}/articles/{articleTitle}`.
pub const ARTICLE_UPDATE: Schema = Schema {
    fields: &[
        FieldRule {
            name: "articleUrl",
            field_type: FieldType::String {
                min_length: Some(1),
                max_length: Some(2048),
            },
            required: false,
        },
        FieldRule {
            name: "summary",
            field_type: FieldType::String {
                min_length: Some(1),
                max_length: Some(5000),
            },
            required: false,
        },
    ],
    allow_unknown: false,
};
