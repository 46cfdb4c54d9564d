use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel, QueryFilter, Set, Statement,
    TransactionTrait,
};
use uuid::Uuid;

use super::profile_query_postgres::to_record;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::{experiences, profiles};
use crate::modules::profile::application::domain::entities::{
    optional_text, NewProfile, ProfileLists, ProfilePatch, ProfileRecord, ViewContext,
};
use crate::modules::profile::application::ports::outgoing::{
    ProfileRepository, ProfileRepositoryError,
};
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills;
use crate::shared::patch_field::PatchField;

const INCREMENT_VIEWS: &str = r#"
    UPDATE profiles
    SET views_count = views_count + 1
    WHERE id = $1
    RETURNING nama, views_count
"#;

// Conflicts come from the partial unique indexes on viewer and session.
const RECORD_VIEW: &str = r#"
    INSERT INTO profile_views
        (profile_id, viewed_by_user, session_key, viewed_by_ip, user_agent, referrer)
    VALUES ($1, $2, $3, $4, $5, $6)
    ON CONFLICT DO NOTHING
    RETURNING id
"#;

const TOGGLE_ACTIVE: &str = r#"
    UPDATE profiles
    SET is_active = NOT is_active
    WHERE id = $1
    RETURNING is_active
"#;

#[derive(Clone)]
pub struct ProfileRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProfileRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ProfileRepositoryError {
    let msg = e.to_string();
    if msg.contains("23505") || msg.contains("duplicate key") {
        if msg.contains("nim") {
            ProfileRepositoryError::NimTaken
        } else {
            ProfileRepositoryError::AlreadyExists
        }
    } else {
        ProfileRepositoryError::DatabaseError(msg)
    }
}

/// Deletes and recreates each supplied list.
async fn replace_lists(
    txn: &DatabaseTransaction,
    profile_id: i32,
    lists: ProfileLists,
) -> Result<(), DbErr> {
    if let Some(items) = lists.skills {
        skills::Entity::delete_many()
            .filter(skills::Column::ProfileId.eq(profile_id))
            .exec(txn)
            .await?;

        if !items.is_empty() {
            skills::Entity::insert_many(items.into_iter().map(|s| skills::ActiveModel {
                profile_id: Set(profile_id),
                nama: Set(s.nama),
                level: Set(s.level),
                ..Default::default()
            }))
            .exec_without_returning(txn)
            .await?;
        }
    }

    if let Some(items) = lists.experiences {
        experiences::Entity::delete_many()
            .filter(experiences::Column::ProfileId.eq(profile_id))
            .exec(txn)
            .await?;

        if !items.is_empty() {
            experiences::Entity::insert_many(items.into_iter().map(|e| {
                experiences::ActiveModel {
                    profile_id: Set(profile_id),
                    posisi: Set(e.posisi),
                    organisasi: Set(e.organisasi),
                    tahun_mulai: Set(e.tahun_mulai),
                    tahun_selesai: Set(e.tahun_selesai),
                    deskripsi: Set(e.deskripsi),
                    ..Default::default()
                }
            }))
            .exec_without_returning(txn)
            .await?;
        }
    }

    Ok(())
}

fn apply_text(target: &mut sea_orm::ActiveValue<String>, patch: PatchField<String>) {
    if let PatchField::Value(value) = patch {
        *target = Set(value.trim().to_string());
    }
}

fn apply_nullable<T>(target: &mut sea_orm::ActiveValue<Option<T>>, patch: PatchField<T>)
where
    Option<T>: Into<sea_orm::Value>,
{
    if let Some(value) = patch.into_nullable() {
        *target = Set(value);
    }
}

/// Same normalisation as on create, so both paths store identical values.
fn apply_nullable_text(
    target: &mut sea_orm::ActiveValue<Option<String>>,
    patch: PatchField<String>,
) {
    if let Some(value) = patch.into_nullable() {
        *target = Set(value.as_deref().and_then(optional_text));
    }
}

fn apply_patch(model: &mut profiles::ActiveModel, patch: ProfilePatch) {
    apply_text(&mut model.nama, patch.nama);
    apply_text(&mut model.nim, patch.nim);
    apply_text(&mut model.prodi, patch.prodi);
    apply_text(&mut model.email, patch.email);
    apply_nullable_text(&mut model.angkatan, patch.angkatan);
    apply_nullable_text(&mut model.fakultas, patch.fakultas);
    apply_nullable_text(&mut model.telepon, patch.telepon);
    apply_nullable_text(&mut model.alamat, patch.alamat);
    apply_nullable_text(&mut model.foto_profil, patch.foto_profil);
    apply_nullable_text(&mut model.bio, patch.bio);
    apply_nullable(&mut model.tanggal_lahir, patch.tanggal_lahir);
    apply_nullable_text(&mut model.linkedin, patch.linkedin);
    apply_nullable_text(&mut model.github, patch.github);
    apply_nullable_text(&mut model.instagram, patch.instagram);
    apply_nullable_text(&mut model.website, patch.website);
}

impl ProfileRepositoryPostgres {
    async fn create_in(
        txn: &DatabaseTransaction,
        user_id: Uuid,
        profile: NewProfile,
        lists: ProfileLists,
    ) -> Result<profiles::Model, DbErr> {
        let model = profiles::ActiveModel {
            user_id: Set(user_id),
            nama: Set(profile.nama),
            nim: Set(profile.nim),
            prodi: Set(profile.prodi),
            email: Set(profile.email),
            angkatan: Set(profile.angkatan),
            fakultas: Set(profile.fakultas),
            telepon: Set(profile.telepon),
            alamat: Set(profile.alamat),
            foto_profil: Set(profile.foto_profil),
            bio: Set(profile.bio),
            tanggal_lahir: Set(profile.tanggal_lahir),
            is_active: Set(true),
            linkedin: Set(profile.linkedin),
            github: Set(profile.github),
            instagram: Set(profile.instagram),
            website: Set(profile.website),
            views_count: Set(0),
            ..Default::default()
        }
        .insert(txn)
        .await?;

        replace_lists(txn, model.id, lists).await?;
        Ok(model)
    }

    async fn update_in(
        txn: &DatabaseTransaction,
        profile_id: i32,
        patch: ProfilePatch,
        lists: ProfileLists,
    ) -> Result<Option<profiles::Model>, DbErr> {
        let Some(existing) = profiles::Entity::find_by_id(profile_id).one(txn).await? else {
            return Ok(None);
        };

        let mut model = existing.clone().into_active_model();
        apply_patch(&mut model, patch);

        let updated = if model.is_changed() {
            model.update(txn).await?
        } else {
            existing
        };

        replace_lists(txn, profile_id, lists).await?;
        Ok(Some(updated))
    }
}

#[async_trait]
impl ProfileRepository for ProfileRepositoryPostgres {
    async fn create(
        &self,
        user_id: Uuid,
        profile: NewProfile,
        lists: ProfileLists,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::create_in(&txn, user_id, profile, lists).await {
            Ok(model) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(to_record(model))
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(map_db_err(e))
            }
        }
    }

    async fn update(
        &self,
        profile_id: i32,
        patch: ProfilePatch,
        lists: ProfileLists,
    ) -> Result<ProfileRecord, ProfileRepositoryError> {
        let txn = self.db.begin().await.map_err(map_db_err)?;

        match Self::update_in(&txn, profile_id, patch, lists).await {
            Ok(Some(model)) => {
                txn.commit().await.map_err(map_db_err)?;
                Ok(to_record(model))
            }
            Ok(None) => {
                let _ = txn.rollback().await;
                Err(ProfileRepositoryError::NotFound)
            }
            Err(e) => {
                let _ = txn.rollback().await;
                Err(map_db_err(e))
            }
        }
    }

    async fn delete(&self, profile_id: i32) -> Result<(), ProfileRepositoryError> {
        let result = profiles::Entity::delete_by_id(profile_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProfileRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn increment_views(
        &self,
        profile_id: i32,
    ) -> Result<Option<(String, i32)>, ProfileRepositoryError> {
        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                INCREMENT_VIEWS,
                [profile_id.into()],
            ))
            .await
            .map_err(map_db_err)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let nama: String = row.try_get("", "nama").map_err(map_db_err)?;
        let views: i32 = row.try_get("", "views_count").map_err(map_db_err)?;
        Ok(Some((nama, views)))
    }

    async fn record_view(
        &self,
        profile_id: i32,
        context: &ViewContext,
    ) -> Result<bool, ProfileRepositoryError> {
        let inserted = self
            .db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                RECORD_VIEW,
                [
                    profile_id.into(),
                    context.viewer.into(),
                    context.session_key.clone().into(),
                    context.ip.clone().into(),
                    context.user_agent.clone().into(),
                    context.referrer.clone().into(),
                ],
            ))
            .await
            .map_err(map_db_err)?;

        Ok(inserted.is_some())
    }

    async fn toggle_active(
        &self,
        profile_id: i32,
    ) -> Result<Option<bool>, ProfileRepositoryError> {
        let row = self
            .db
            .query_one(Statement::from_sql_and_values(
                DatabaseBackend::Postgres,
                TOGGLE_ACTIVE,
                [profile_id.into()],
            ))
            .await
            .map_err(map_db_err)?;

        row.map(|r| r.try_get::<bool>("", "is_active"))
            .transpose()
            .map_err(map_db_err)
    }
}
