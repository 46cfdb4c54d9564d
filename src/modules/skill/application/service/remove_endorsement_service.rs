use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::skill::application::ports::incoming::use_cases::{
    RemoveEndorsementError, RemoveEndorsementUseCase,
};
use crate::modules::skill::application::ports::outgoing::{EndorsementRepository, SkillQuery};

pub struct RemoveEndorsementService<Q, E>
where
    Q: SkillQuery,
    E: EndorsementRepository,
{
    query: Q,
    endorsements: E,
}

impl<Q, E> RemoveEndorsementService<Q, E>
where
    Q: SkillQuery,
    E: EndorsementRepository,
{
    pub fn new(query: Q, endorsements: E) -> Self {
        Self {
            query,
            endorsements,
        }
    }
}

#[async_trait]
impl<Q, E> RemoveEndorsementUseCase for RemoveEndorsementService<Q, E>
where
    Q: SkillQuery,
    E: EndorsementRepository,
{
    async fn execute(
        &self,
        endorser: UserId,
        skill_id: i32,
    ) -> Result<(), RemoveEndorsementError> {
        self.query
            .find_owner(skill_id)
            .await
            .map_err(|e| RemoveEndorsementError::RepositoryError(e.to_string()))?
            .ok_or(RemoveEndorsementError::SkillNotFound)?;

        let deleted = self
            .endorsements
            .delete(skill_id, endorser.value())
            .await
            .map_err(|e| RemoveEndorsementError::RepositoryError(e.to_string()))?;

        if !deleted {
            return Err(RemoveEndorsementError::EndorsementNotFound);
        }

        Ok(())
    }
}
