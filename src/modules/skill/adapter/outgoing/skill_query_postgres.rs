use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use uuid::Uuid;

use crate::auth::adapter::outgoing::sea_orm_entity::users;
use crate::modules::profile::adapter::outgoing::sea_orm_entity::profiles;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::{skill_endorsements, skills};
use crate::modules::skill::application::domain::entities::{
    EndorsementView, SkillOwner, SkillRecord, SkillView,
};
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillQueryError};

#[derive(Clone)]
pub struct SkillQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

pub(crate) fn to_record(model: skills::Model) -> SkillRecord {
    SkillRecord {
        id: model.id,
        profile_id: model.profile_id,
        nama: model.nama,
        level: model.level,
    }
}

/// Attaches endorsements (with endorser usernames) to skill rows, keeping row order.
async fn hydrate<C>(db: &C, models: Vec<skills::Model>) -> Result<Vec<SkillView>, DbErr>
where
    C: ConnectionTrait,
{
    if models.is_empty() {
        return Ok(Vec::new());
    }

    let skill_ids: Vec<i32> = models.iter().map(|m| m.id).collect();

    let endorsements = skill_endorsements::Entity::find()
        .filter(skill_endorsements::Column::SkillId.is_in(skill_ids))
        .order_by_asc(skill_endorsements::Column::CreatedAt)
        .order_by_asc(skill_endorsements::Column::Id)
        .all(db)
        .await?;

    let usernames: HashMap<Uuid, String> = if endorsements.is_empty() {
        HashMap::new()
    } else {
        let endorser_ids: Vec<Uuid> = endorsements.iter().map(|e| e.endorsed_by).collect();
        users::Entity::find()
            .filter(users::Column::Id.is_in(endorser_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u.username))
            .collect()
    };

    let mut by_skill: HashMap<i32, Vec<EndorsementView>> = HashMap::new();
    for e in endorsements {
        by_skill.entry(e.skill_id).or_default().push(EndorsementView {
            id: e.id,
            skill_id: e.skill_id,
            endorsed_by: e.endorsed_by,
            endorsed_by_username: usernames.get(&e.endorsed_by).cloned().unwrap_or_default(),
            created_at: e.created_at.into(),
        });
    }

    Ok(models
        .into_iter()
        .map(|m| {
            let endorsements = by_skill.remove(&m.id).unwrap_or_default();
            SkillView::from_record(to_record(m), endorsements)
        })
        .collect())
}

/// Skills of several profiles at once, grouped by profile id.
pub async fn load_skill_views<C>(
    db: &C,
    profile_ids: &[i32],
) -> Result<HashMap<i32, Vec<SkillView>>, DbErr>
where
    C: ConnectionTrait,
{
    if profile_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let models = skills::Entity::find()
        .filter(skills::Column::ProfileId.is_in(profile_ids.to_vec()))
        .order_by_asc(skills::Column::Id)
        .all(db)
        .await?;

    let mut grouped: HashMap<i32, Vec<SkillView>> = HashMap::new();
    for view in hydrate(db, models).await? {
        grouped.entry(view.profile_id).or_default().push(view);
    }
    Ok(grouped)
}

fn map_db_err(e: DbErr) -> SkillQueryError {
    SkillQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SkillQuery for SkillQueryPostgres {
    async fn list(&self, profile_id: Option<i32>) -> Result<Vec<SkillView>, SkillQueryError> {
        let mut query = skills::Entity::find();
        if let Some(profile_id) = profile_id {
            query = query.filter(skills::Column::ProfileId.eq(profile_id));
        }

        let models = query
            .order_by_asc(skills::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        hydrate(&*self.db, models).await.map_err(map_db_err)
    }

    async fn find_by_id(&self, skill_id: i32) -> Result<Option<SkillView>, SkillQueryError> {
        let Some(model) = skills::Entity::find_by_id(skill_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let mut views = hydrate(&*self.db, vec![model]).await.map_err(map_db_err)?;
        Ok(views.pop())
    }

    async fn find_owner(&self, skill_id: i32) -> Result<Option<SkillOwner>, SkillQueryError> {
        let Some(skill) = skills::Entity::find_by_id(skill_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let user_id = profiles::Entity::find_by_id(skill.profile_id)
            .select_only()
            .column(profiles::Column::UserId)
            .into_tuple::<Uuid>()
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(user_id.map(|user_id| SkillOwner {
            skill_id: skill.id,
            profile_id: skill.profile_id,
            user_id,
        }))
    }

    async fn find_profile_id_by_user(
        &self,
        user_id: Uuid,
    ) -> Result<Option<i32>, SkillQueryError> {
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
