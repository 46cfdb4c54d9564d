use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create profiles table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::UserId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::Nama).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Profiles::Nim)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::Prodi).string_len(100).not_null())
                    .col(ColumnDef::new(Profiles::Angkatan).string_len(10))
                    .col(ColumnDef::new(Profiles::Fakultas).string_len(100))
                    .col(ColumnDef::new(Profiles::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Profiles::Telepon).string_len(20))
                    .col(ColumnDef::new(Profiles::Alamat).text())
                    .col(ColumnDef::new(Profiles::FotoProfil).text())
                    .col(ColumnDef::new(Profiles::Bio).text())
                    .col(ColumnDef::new(Profiles::TanggalLahir).date())
                    .col(
                        ColumnDef::new(Profiles::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Profiles::Linkedin).text())
                    .col(ColumnDef::new(Profiles::Github).text())
                    .col(ColumnDef::new(Profiles::Instagram).text())
                    .col(ColumnDef::new(Profiles::Website).text())
                    .col(
                        ColumnDef::new(Profiles::ViewsCount)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Profiles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Profiles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_user_id")
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_profiles_created_at
                ON profiles (created_at DESC);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_profiles_prodi
                ON profiles (prodi);
                "#,
            )
            .await?;

        // Listing, latest and most-viewed only ever read active rows
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_profiles_active_views
                ON profiles (views_count DESC, id ASC)
                WHERE is_active = true;
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_profiles_updated_at
                BEFORE UPDATE ON profiles
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
            .execute_unprepared(
                r#"
                DROP TRIGGER IF EXISTS update_profiles_updated_at ON profiles;
                DROP INDEX IF EXISTS idx_profiles_created_at;
                DROP INDEX IF EXISTS idx_profiles_prodi;
                DROP INDEX IF EXISTS idx_profiles_active_views;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    UserId,
    Nama,
    Nim,
    Prodi,
    Angkatan,
    Fakultas,
    Email,
    Telepon,
    Alamat,
    FotoProfil,
    Bio,
    TanggalLahir,
    IsActive,
    Linkedin,
    Github,
    Instagram,
    Website,
    ViewsCount,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
