pub mod preview_repository;
