use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;

pub fn create_test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "ReadmeForge".to_string(),
        access_token_expiry: 3600,
        guest_token_expiry: 3600,
    })
}

pub fn test_token_provider() -> Arc<dyn TokenProvider + Send + Sync> {
    Arc::new(create_test_jwt_service())
}

/// Ready-to-insert `Authorization` header value.
pub fn bearer_token(user_id: Uuid, is_guest: bool) -> String {
    let token = create_test_jwt_service()
        .generate_access_token(user_id, is_guest)
        .expect("Failed to generate token");
    format!("Bearer {}", token)
}
