//! Authentication endpoint.

mod token;

pub use token::issue_token_handler;
