//! Record types exchanged between the API, the auth layer, and storage.

use serde::{Deserialize, Serialize};

/// Public projection of a stored user.
///
/// Never carries the password hash; storage keeps that column to itself and
/// only hands it out through the credentials lookup used by login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_admin: bool,
}

/// Payload for creating a user, either via the admin endpoint or public
/// self-registration. The registration path forces `is_admin` to false
/// regardless of what the caller sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub email: String,
    #[serde(default)]
    pub is_admin: bool,
}

/// An article summary attached to a user's account.
///
/// Serialized with the storage column names, matching what clients already
/// receive from the articles endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizedArticle {
    pub username: String,
    pub article_title: String,
    pub article_url: String,
    pub summary: String,
}
