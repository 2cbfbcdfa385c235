// Summify authentication library
// Provides JWT signing/verification, request principals, password hashing,
// and the authorization guards route handlers compose.

pub mod gate;
pub mod guards;
pub mod jwt;
pub mod password;
pub mod principal;

// Re-export commonly used types
pub use gate::{validate_and_require_admin, validate_registration};
pub use guards::{
    require_admin, require_existing_user, require_logged_in, require_self_or_admin, AuthzContext,
    UserDirectory,
};
pub use jwt::{Claims, TokenCodec, TokenError, DEFAULT_TOKEN_EXPIRY_HOURS};
pub use principal::{authenticate, Principal};
