use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiences::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Experiences::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Experiences::ProfileId).integer().not_null())
                    .col(
                        ColumnDef::new(Experiences::Posisi)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::Organisasi)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Experiences::TahunMulai)
                            .string_len(10)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Experiences::TahunSelesai).string_len(10))
                    .col(ColumnDef::new(Experiences::Deskripsi).text())
                    .col(
                        ColumnDef::new(Experiences::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_experiences_profile_id")
                            .from(Experiences::Table, Experiences::ProfileId)
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
                CREATE INDEX IF NOT EXISTS idx_experiences_profile_id
                ON experiences (profile_id, tahun_mulai DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Experiences::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Experiences {
    Table,
    Id,
    ProfileId,
    Posisi,
    Organisasi,
    TahunMulai,
    TahunSelesai,
    Deskripsi,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
}
