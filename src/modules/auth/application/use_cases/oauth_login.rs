use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::User;
use crate::auth::application::ports::outgoing::{
    GithubUserData, OAuthError, OAuthProvider, TokenProvider, UserRepository, UserRepositoryError,
};

#[derive(Debug, Clone)]
pub enum OAuthLoginError {
    ExchangeFailed(String),
    RepositoryError(String),
    TokenError(String),
}

#[derive(Debug, Clone)]
pub struct OAuthLoginResult {
    pub token: String,
    pub user: User,
}

/// An interface for the OAuth callback: code in, bearer token out
#[async_trait]
pub trait IOAuthLoginUseCase: Send + Sync {
    async fn execute(&self, code: &str) -> Result<OAuthLoginResult, OAuthLoginError>;
}

pub struct OAuthLoginUseCase<P, R>
where
    P: OAuthProvider,
    R: UserRepository,
{
    oauth_provider: P,
    user_repository: R,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
}

impl<P, R> OAuthLoginUseCase<P, R>
where
    P: OAuthProvider,
    R: UserRepository,
{
    pub fn new(
        oauth_provider: P,
        user_repository: R,
        token_provider: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            oauth_provider,
            user_repository,
            token_provider,
        }
    }
}

#[async_trait]
impl<P, R> IOAuthLoginUseCase for OAuthLoginUseCase<P, R>
where
    P: OAuthProvider + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, code: &str) -> Result<OAuthLoginResult, OAuthLoginError> {
        let profile = self
            .oauth_provider
            .exchange_code(code)
            .await
            .map_err(|e| match e {
                OAuthError::ExchangeFailed(msg) | OAuthError::ProviderError(msg) => {
                    OAuthLoginError::ExchangeFailed(msg)
                }
            })?;

        // Providers may withhold the email; fall back to a stable
        // synthetic address derived from the login.
        let email = profile
            .email
            .clone()
            .unwrap_or_else(|| format!("{}@github.com", profile.username));
        let name = profile
            .display_name
            .clone()
            .unwrap_or_else(|| profile.username.clone());

        let user = self
            .user_repository
            .upsert_github_user(GithubUserData {
                github_id: profile.github_id,
                username: profile.username,
                name,
                email,
                avatar_url: profile.avatar_url,
                bio: profile.bio,
                location: profile.location,
                website: profile.website,
            })
            .await
            .map_err(|e| match e {
                UserRepositoryError::DatabaseError(msg) => OAuthLoginError::RepositoryError(msg),
                UserRepositoryError::NotFound => {
                    OAuthLoginError::RepositoryError("Unknown repo error".to_string())
                }
            })?;

        let token = self
            .token_provider
            .generate_access_token(user.id, user.is_guest)
            .map_err(|e| OAuthLoginError::TokenError(e.to_string()))?;

        Ok(OAuthLoginResult { token, user })
    }
}
