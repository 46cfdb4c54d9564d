use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::skill::application::domain::entities::{NewSkill, SkillView};
use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillError, CreateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{SkillQuery, SkillRepository};

pub struct CreateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateSkillUseCase for CreateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    async fn execute(
        &self,
        caller: UserId,
        skill: NewSkill,
    ) -> Result<SkillView, CreateSkillError> {
        skill.validate().map_err(CreateSkillError::Validation)?;

        let profile_id = self
            .query
            .find_profile_id_by_user(caller.value())
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))?
            .ok_or(CreateSkillError::ProfileRequired)?;

        let record = self
            .repository
            .create_skill(
                profile_id,
                NewSkill {
                    nama: skill.nama.trim().to_string(),
                    level: skill.level,
                },
            )
            .await
            .map_err(|e| CreateSkillError::RepositoryError(e.to_string()))?;

        info!(skill_id = record.id, profile_id, "Skill created");

        Ok(SkillView::from_record(record, Vec::new()))
    }
}
