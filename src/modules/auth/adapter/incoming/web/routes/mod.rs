mod fetch_user;
mod github_callback;
mod github_login;
mod guest_session;
mod logout_user;

pub use fetch_user::{fetch_user_handler, UserProfileResponse};
pub use github_callback::github_callback_handler;
pub use github_login::github_login_handler;
pub use guest_session::{guest_session_handler, GuestSessionResponse, GuestUserInfo};
pub use logout_user::{logout_user_handler, LogoutResponse};
