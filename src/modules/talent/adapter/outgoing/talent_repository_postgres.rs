use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set};

use super::talent_query_postgres::to_record;
use crate::modules::talent::adapter::outgoing::sea_orm_entity::talents::{self, Entity};
use crate::modules::talent::application::domain::entities::{
    NewTalent, TalentPatch, TalentRecord,
};
use crate::modules::talent::application::ports::outgoing::{
    TalentRepository, TalentRepositoryError,
};
use crate::shared::patch_field::PatchField;

#[derive(Clone)]
pub struct TalentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TalentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> TalentRepositoryError {
    TalentRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TalentRepository for TalentRepositoryPostgres {
    async fn create_talent(
        &self,
        profile_id: i32,
        talent: NewTalent,
    ) -> Result<TalentRecord, TalentRepositoryError> {
        let model = talents::ActiveModel {
            profile_id: Set(profile_id),
            judul: Set(talent.judul),
            deskripsi: Set(talent.deskripsi),
            kategori: Set(talent.kategori),
            link_portfolio: Set(talent.link_portfolio),
            gambar: Set(talent.gambar),
            tanggal_mulai: Set(talent.tanggal_mulai),
            tanggal_selesai: Set(talent.tanggal_selesai),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(to_record(model))
    }

    async fn patch_talent(
        &self,
        talent_id: i32,
        patch: TalentPatch,
    ) -> Result<TalentRecord, TalentRepositoryError> {
        let existing = Entity::find_by_id(talent_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TalentRepositoryError::NotFound)?;

        let mut model = existing.clone().into_active_model();

        if let PatchField::Value(judul) = patch.judul {
            model.judul = Set(judul);
        }
        if let PatchField::Value(deskripsi) = patch.deskripsi {
            model.deskripsi = Set(deskripsi);
        }
        if let Some(kategori) = patch.kategori.into_nullable() {
            model.kategori = Set(kategori);
        }
        if let Some(link) = patch.link_portfolio.into_nullable() {
            model.link_portfolio = Set(link);
        }
        if let Some(gambar) = patch.gambar.into_nullable() {
            model.gambar = Set(gambar);
        }
        if let Some(mulai) = patch.tanggal_mulai.into_nullable() {
            model.tanggal_mulai = Set(mulai);
        }
        if let Some(selesai) = patch.tanggal_selesai.into_nullable() {
            model.tanggal_selesai = Set(selesai);
        }

        if !model.is_changed() {
            return Ok(to_record(existing));
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(updated))
    }

    async fn delete_talent(&self, talent_id: i32) -> Result<(), TalentRepositoryError> {
        let result = Entity::delete_by_id(talent_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TalentRepositoryError::NotFound);
        }

        Ok(())
    }
}
