use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // skills
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Skills::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Skills::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Skills::ProfileId).integer().not_null())
                    .col(ColumnDef::new(Skills::Nama).string_len(100).not_null())
                    .col(ColumnDef::new(Skills::Level).string_len(50))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skills_profile_id")
                            .from(Skills::Table, Skills::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Recommendation matching compares case-folded names
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_skills_profile_id
                ON skills (profile_id);
                CREATE INDEX IF NOT EXISTS idx_skills_lower_nama
                ON skills (lower(nama));
                "#,
            )
            .await?;

        // =====================================================
        // skill_endorsements
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(SkillEndorsements::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SkillEndorsements::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SkillEndorsements::SkillId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SkillEndorsements::EndorsedBy)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SkillEndorsements::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skill_endorsements_skill_id")
                            .from(SkillEndorsements::Table, SkillEndorsements::SkillId)
                            .to(Skills::Table, Skills::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_skill_endorsements_endorsed_by")
                            .from(SkillEndorsements::Table, SkillEndorsements::EndorsedBy)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One endorsement per (skill, user); endorse relies on ON CONFLICT here
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_skill_endorsements_unique
                ON skill_endorsements (skill_id, endorsed_by);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SkillEndorsements::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Skills::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Skills {
    Table,
    Id,
    ProfileId,
    Nama,
    Level,
}

#[derive(DeriveIden)]
enum SkillEndorsements {
    Table,
    Id,
    SkillId,
    EndorsedBy,
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
