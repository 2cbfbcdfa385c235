//! Article-summary handlers.
//!
//! All article routes hang off a user: /users/{username}/articles[...].
//! Every operation requires the caller to be that user or an admin, and the
//! target user must exist.

mod create;
mod delete;
mod list;
mod update;

pub use create::create_article_handler;
pub use delete::delete_article_handler;
pub use list::list_articles_handler;
pub use update::update_article_handler;

use summify_auth::{require_existing_user, require_self_or_admin, AuthzContext, Principal};
use summify_commons::ApiResult;

use crate::store::UserStore;

/// Common guard chain for every article route: self-or-admin on the path
/// user, then the path user must exist.
async fn authorize_for_user(
    users: &dyn UserStore,
    principal: Option<&Principal>,
    username: &str,
) -> ApiResult<()> {
    require_self_or_admin(&AuthzContext::new(principal, Some(username)))?;
    require_existing_user(users, username).await
}
