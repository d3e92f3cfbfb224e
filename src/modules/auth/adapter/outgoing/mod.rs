pub mod github_oauth_reqwest;
pub mod jwt;
pub mod sea_orm_entity;
pub mod user_repository_postgres;
