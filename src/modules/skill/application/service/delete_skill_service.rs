use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::skill::application::ports::incoming::use_cases::{
    DeleteSkillError, DeleteSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillQuery, SkillRepository, SkillRepositoryError,
};

pub struct DeleteSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteSkillUseCase for DeleteSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    async fn execute(&self, caller: UserId, skill_id: i32) -> Result<(), DeleteSkillError> {
        let owner = self
            .query
            .find_owner(skill_id)
            .await
            .map_err(|e| DeleteSkillError::RepositoryError(e.to_string()))?
            .ok_or(DeleteSkillError::NotFound)?;

        if owner.user_id != caller.value() {
            return Err(DeleteSkillError::Forbidden);
        }

        self.repository
            .delete_skill(skill_id)
            .await
            .map_err(|e| match e {
                SkillRepositoryError::NotFound => DeleteSkillError::NotFound,
                SkillRepositoryError::DatabaseError(msg) => DeleteSkillError::RepositoryError(msg),
            })?;

        info!(skill_id, "Skill deleted");
        Ok(())
    }
}
