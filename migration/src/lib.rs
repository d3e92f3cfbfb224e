pub use sea_orm_migration::prelude::*;

mod m20260310_000001_create_users_table;
mod m20260310_000002_create_templates_table;
mod m20260310_000003_create_previews_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260310_000001_create_users_table::Migration),
            Box::new(m20260310_000002_create_templates_table::Migration),
            Box::new(m20260310_000003_create_previews_table::Migration),
        ]
    }
}
