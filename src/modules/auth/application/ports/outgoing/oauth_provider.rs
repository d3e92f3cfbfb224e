use async_trait::async_trait;

#[derive(Debug, Clone)]
pub enum OAuthError {
    ExchangeFailed(String),
    ProviderError(String),
}

impl std::fmt::Display for OAuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OAuthError::ExchangeFailed(msg) => write!(f, "OAuth code exchange failed: {}", msg),
            OAuthError::ProviderError(msg) => write!(f, "OAuth provider error: {}", msg),
        }
    }
}

/// Identity attributes the provider exposes about the logged-in user.
#[derive(Debug, Clone)]
pub struct OAuthUserProfile {
    pub github_id: i64,
    pub username: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
}

#[async_trait]
pub trait OAuthProvider: Send + Sync {
    /// Where to send the browser to start the OAuth dance.
    fn authorize_url(&self) -> String;

    /// Exchange a callback code for the provider's user profile.
    async fn exchange_code(&self, code: &str) -> Result<OAuthUserProfile, OAuthError>;
}
