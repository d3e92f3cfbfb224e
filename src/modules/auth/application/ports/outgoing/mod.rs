pub mod oauth_provider;
pub mod token_provider;
pub mod user_repository;

pub use oauth_provider::{OAuthError, OAuthProvider, OAuthUserProfile};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
pub use user_repository::{GithubUserData, GuestUserData, UserRepository, UserRepositoryError};
