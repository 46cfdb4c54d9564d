use std::sync::Arc;

use actix_web::web;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_only".to_string(),
        issuer: "talenta-test".to_string(),
        access_token_expiry: 3600,
        refresh_token_expiry: 86400,
    })
}

/// Token provider as registered by `main`, for the auth extractors.
pub fn token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

/// `Authorization` header carrying a fresh access token.
pub fn bearer(user_id: Uuid, is_admin: bool) -> (&'static str, String) {
    let token = test_jwt_service()
        .generate_access_token(user_id, is_admin)
        .expect("test token");
    ("Authorization", format!("Bearer {token}"))
}
