pub mod sea_orm_entity;
pub mod template_repository_postgres;
