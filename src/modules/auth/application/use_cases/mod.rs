pub mod ensure_admin;
pub mod fetch_account;
pub mod login_user;
pub mod refresh_token;
pub mod register_user;

use serde::Serialize;

/// Access/refresh pair handed out on register and login.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthTokens {
    pub access: String,
    pub refresh: String,
}
