use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Previews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Previews::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Previews::TemplateId).uuid())
                    .col(
                        ColumnDef::new(Previews::ShareId)
                            .string_len(64)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Previews::Content).text().not_null())
                    .col(
                        ColumnDef::new(Previews::Views)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Previews::ExpiresAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Previews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_previews_share_id
                ON previews (share_id);
                "#,
            )
            .await?;

        // Expired rows are filtered on read and swept by this index scan.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_previews_expires_at
                ON previews (expires_at);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_previews_share_id;
                DROP INDEX IF EXISTS idx_previews_expires_at;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Previews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Previews {
    Table,
    Id,
    TemplateId,
    ShareId,
    Content,
    Views,
    ExpiresAt,
    CreatedAt,
}
