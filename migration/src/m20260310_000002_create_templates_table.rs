use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Templates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Templates::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Templates::UserId).uuid().not_null())
                    .col(ColumnDef::new(Templates::Name).string_len(150).not_null())
                    .col(ColumnDef::new(Templates::Description).string_len(500))
                    .col(
                        ColumnDef::new(Templates::Sections)
                            .json_binary()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Templates::Theme).json_binary().not_null())
                    .col(
                        ColumnDef::new(Templates::Customization)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Templates::Visibility)
                            .string_len(20)
                            .not_null()
                            .default("private"),
                    )
                    .col(ColumnDef::new(Templates::ShareId).string_len(64))
                    .col(
                        ColumnDef::new(Templates::Views)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Templates::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Templates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_templates_user_id")
                            .from(Templates::Table, Templates::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_templates_user_id_updated_at
                ON templates (user_id, updated_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_templates_share_id
                ON templates (share_id)
                WHERE share_id IS NOT NULL;
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
                DROP INDEX IF EXISTS idx_templates_user_id_updated_at;
                DROP INDEX IF EXISTS idx_templates_share_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Templates::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Templates {
    Table,
    Id,
    UserId,
    Name,
    Description,
    Sections,
    Theme,
    Customization,
    Visibility,
    ShareId,
    Views,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
