pub mod fetch_profile;
pub mod guest_session;
pub mod oauth_login;
