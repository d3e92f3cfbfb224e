use async_trait::async_trait;
use serde::Deserialize;
use std::env;

use crate::auth::application::ports::outgoing::{OAuthError, OAuthProvider, OAuthUserProfile};

const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";
const TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const USER_URL: &str = "https://api.github.com/user";
const OAUTH_SCOPE: &str = "user:email read:user";
const USER_AGENT: &str = "readme-forge";

#[derive(Debug, Clone)]
pub struct GitHubOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    pub callback_url: String,
}

impl GitHubOAuthConfig {
    pub fn from_env() -> Self {
        Self {
            client_id: env::var("GITHUB_CLIENT_ID").expect("GITHUB_CLIENT_ID must be set"),
            client_secret: env::var("GITHUB_CLIENT_SECRET")
                .expect("GITHUB_CLIENT_SECRET must be set"),
            callback_url: env::var("GITHUB_CALLBACK_URL").expect("GITHUB_CALLBACK_URL must be set"),
        }
    }
}

#[derive(Clone)]
pub struct GitHubOAuthClient {
    http: reqwest::Client,
    config: GitHubOAuthConfig,
}

impl GitHubOAuthClient {
    pub fn new(config: GitHubOAuthConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }
}

#[derive(Deserialize)]
struct AccessTokenResponse {
    access_token: Option<String>,
    error_description: Option<String>,
}

#[derive(Deserialize)]
struct GitHubUserResponse {
    id: i64,
    login: String,
    name: Option<String>,
    email: Option<String>,
    avatar_url: Option<String>,
    bio: Option<String>,
    location: Option<String>,
    blog: Option<String>,
}

#[async_trait]
impl OAuthProvider for GitHubOAuthClient {
    fn authorize_url(&self) -> String {
        format!(
            "{}?client_id={}&redirect_uri={}&scope={}",
            AUTHORIZE_URL,
            self.config.client_id,
            urlencoding::encode(&self.config.callback_url),
            urlencoding::encode(OAUTH_SCOPE),
        )
    }

    async fn exchange_code(&self, code: &str) -> Result<OAuthUserProfile, OAuthError> {
        let token: AccessTokenResponse = self
            .http
            .post(TOKEN_URL)
            .header("Accept", "application/json")
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
            ])
            .send()
            .await
            .map_err(|e| OAuthError::ExchangeFailed(e.to_string()))?
            .json()
            .await
            .map_err(|e| OAuthError::ExchangeFailed(e.to_string()))?;

        let access_token = token.access_token.ok_or_else(|| {
            OAuthError::ExchangeFailed(
                token
                    .error_description
                    .unwrap_or_else(|| "no access token in response".to_string()),
            )
        })?;

        let user: GitHubUserResponse = self
            .http
            .get(USER_URL)
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", USER_AGENT)
            .bearer_auth(&access_token)
            .send()
            .await
            .map_err(|e| OAuthError::ProviderError(e.to_string()))?
            .error_for_status()
            .map_err(|e| OAuthError::ProviderError(e.to_string()))?
            .json()
            .await
            .map_err(|e| OAuthError::ProviderError(e.to_string()))?;

        Ok(OAuthUserProfile {
            github_id: user.id,
            username: user.login,
            display_name: user.name,
            email: user.email,
            avatar_url: user.avatar_url,
            bio: user.bio,
            location: user.location,
            website: user.blog.filter(|blog| !blog.is_empty()),
        })
    }
}
