use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Talents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Talents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Talents::ProfileId).integer().not_null())
                    .col(ColumnDef::new(Talents::Judul).string_len(200).not_null())
                    .col(ColumnDef::new(Talents::Deskripsi).text().not_null())
                    .col(ColumnDef::new(Talents::Kategori).string_len(100))
                    .col(ColumnDef::new(Talents::LinkPortfolio).text())
                    .col(ColumnDef::new(Talents::Gambar).text())
                    .col(ColumnDef::new(Talents::TanggalMulai).date())
                    .col(ColumnDef::new(Talents::TanggalSelesai).date())
                    .col(
                        ColumnDef::new(Talents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Talents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_talents_profile_id")
                            .from(Talents::Table, Talents::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
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
                CREATE INDEX IF NOT EXISTS idx_talents_profile_created
                ON talents (profile_id, created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_talents_updated_at
                BEFORE UPDATE ON talents
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP TRIGGER IF EXISTS update_talents_updated_at ON talents")
            .await?;

        manager
            .drop_table(Table::drop().table(Talents::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Talents {
    Table,
    Id,
    ProfileId,
    Judul,
    Deskripsi,
    Kategori,
    LinkPortfolio,
    Gambar,
    TanggalMulai,
    TanggalSelesai,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
}
