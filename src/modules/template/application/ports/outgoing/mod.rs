pub mod template_repository;
