pub mod ai;
pub mod auth;
pub mod feed;
pub mod generator;
pub mod github;
pub mod template;
pub mod wakatime;
