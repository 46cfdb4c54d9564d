use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProfileViews::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProfileViews::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProfileViews::ProfileId).integer().not_null())
                    .col(ColumnDef::new(ProfileViews::ViewedByUser).uuid())
                    .col(ColumnDef::new(ProfileViews::SessionKey).string_len(255))
                    .col(ColumnDef::new(ProfileViews::ViewedByIp).string_len(45))
                    .col(
                        ColumnDef::new(ProfileViews::UserAgent)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(ProfileViews::Referrer).text())
                    .col(
                        ColumnDef::new(ProfileViews::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_views_profile_id")
                            .from(ProfileViews::Table, ProfileViews::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_views_viewed_by_user")
                            .from(ProfileViews::Table, ProfileViews::ViewedByUser)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ============================================
        // One record per (profile, viewer) and per (profile, session)
        // ============================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_profile_views_unique_user
                ON profile_views (profile_id, viewed_by_user)
                WHERE viewed_by_user IS NOT NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_profile_views_unique_session
                ON profile_views (profile_id, session_key)
                WHERE session_key IS NOT NULL;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_profile_views_profile_created
                ON profile_views (profile_id, created_at DESC);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ProfileViews::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProfileViews {
    Table,
    Id,
    ProfileId,
    ViewedByUser,
    SessionKey,
    ViewedByIp,
    UserAgent,
    Referrer,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
