use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles;
use crate::modules::talent::adapter::outgoing::sea_orm_entity::talents;
use crate::modules::talent::application::domain::entities::{TalentOwner, TalentRecord};
use crate::modules::talent::application::ports::outgoing::{TalentQuery, TalentQueryError};

#[derive(Clone)]
pub struct TalentQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TalentQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn to_record(model: talents::Model) -> TalentRecord {
    TalentRecord {
        id: model.id,
        profile_id: model.profile_id,
        judul: model.judul,
        deskripsi: model.deskripsi,
        kategori: model.kategori,
        link_portfolio: model.link_portfolio,
        gambar: model.gambar,
        tanggal_mulai: model.tanggal_mulai,
        tanggal_selesai: model.tanggal_selesai,
        created_at: model.created_at.into(),
        updated_at: model.updated_at.into(),
    }
}

/// Talents of several profiles, newest first within each profile.
pub async fn load_talent_records<C>(
    db: &C,
    profile_ids: &[i32],
) -> Result<HashMap<i32, Vec<TalentRecord>>, DbErr>
where
    C: ConnectionTrait,
{
    if profile_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = talents::Entity::find()
        .filter(talents::Column::ProfileId.is_in(profile_ids.to_vec()))
        .order_by_desc(talents::Column::CreatedAt)
        .order_by_desc(talents::Column::Id)
        .all(db)
        .await?;

    let mut grouped: HashMap<i32, Vec<TalentRecord>> = HashMap::new();
    for model in models {
        grouped
            .entry(model.profile_id)
            .or_default()
            .push(to_record(model));
    }
    Ok(grouped)
}

fn map_db_err(e: DbErr) -> TalentQueryError {
    TalentQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TalentQuery for TalentQueryPostgres {
    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<TalentRecord>, TalentQueryError> {
        let mut query = talents::Entity::find();
        if let Some(profile_id) = profile_id {
            query = query.filter(talents::Column::ProfileId.eq(profile_id));
        }

        let models = query
            .order_by_desc(talents::Column::CreatedAt)
            .order_by_desc(talents::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_record).collect())
    }

    async fn find_by_id(&self, talent_id: i32) -> Result<Option<TalentRecord>, TalentQueryError> {
        let model = talents::Entity::find_by_id(talent_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;
        Ok(model.map(to_record))
    }

    async fn find_owner(&self, talent_id: i32) -> Result<Option<TalentOwner>, TalentQueryError> {
        let Some(talent) = talents::Entity::find_by_id(talent_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let user_id = profiles::Entity::find_by_id(talent.profile_id)
            .select_only()
            .column(profiles::Column::UserId)
            .into_tuple::<Uuid>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user_id.map(|user_id| TalentOwner {
            talent_id: talent.id,
            profile_id: talent.profile_id,
            user_id,
        }))
    }

    async fn find_profile_id_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<i32>, TalentQueryError> {
        profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id))
            .select_only()
            .column(profiles::Column::Id)
            .into_tuple::<i32>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)
    }
}
