use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, Set};

use super::skill_query_postgres::to_record;
use crate::modules::skill::adapter::outgoing::sea_orm_entity::skills::{self, Entity};
use crate::modules::skill::application::domain::entities::{NewSkill, SkillPatch, SkillRecord};
use crate::modules::skill::application::ports::outgoing::{
    SkillRepository, SkillRepositoryError,
};
use crate::shared::patch_field::PatchField;

#[derive(Clone)]
pub struct SkillRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SkillRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> SkillRepositoryError {
    SkillRepositoryError::DatabaseError(e.to_string())
}

#[async_trait]
impl SkillRepository for SkillRepositoryPostgres {
    async fn create_skill(
        &self,
        profile_id: i32,
        skill: NewSkill,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let model = skills::ActiveModel {
            profile_id: Set(profile_id),
            nama: Set(skill.nama),
            level: Set(skill.level),
            ..Default::default()
        }
        .insert(&*self.db)
        .await
        .map_err(map_db_err)?;

        Ok(to_record(model))
    }

    async fn patch_skill(
        &self,
        skill_id: i32,
        patch: SkillPatch,
    ) -> Result<SkillRecord, SkillRepositoryError> {
        let existing = Entity::find_by_id(skill_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(SkillRepositoryError::NotFound)?;

        let mut model = existing.clone().into_active_model();

        if let PatchField::Value(nama) = patch.nama {
            model.nama = Set(nama);
        }

        if let Some(level) = patch.level.into_nullable() {
            model.level = Set(level);
        }

        if !model.is_changed() {
            return Ok(to_record(existing));
        }

        let updated = model.update(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(updated))
    }

    async fn delete_skill(&self, skill_id: i32) -> Result<(), SkillRepositoryError> {
        let result = Entity::delete_by_id(skill_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(SkillRepositoryError::NotFound);
        }

        Ok(())
    }
}
