use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::skill::application::ports::incoming::use_cases::{
    EndorseOutcome, EndorseSkillError, EndorseSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{EndorsementRepository, SkillQuery};

pub struct EndorseSkillService<Q, E>
where
    Q: SkillQuery,
    E: EndorsementRepository,
{
    query: Q,
    endorsements: E,
}

impl<Q, E> EndorseSkillService<Q, E>
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
impl<Q, E> EndorseSkillUseCase for EndorseSkillService<Q, E>
where
    Q: SkillQuery,
    E: EndorsementRepository,
{
    async fn execute(
        &self,
        endorser: UserId,
        skill_id: i32,
    ) -> Result<EndorseOutcome, EndorseSkillError> {
        let owner = self
            .query
            .find_owner(skill_id)
            .await
            .map_err(|e| EndorseSkillError::RepositoryError(e.to_string()))?
            .ok_or(EndorseSkillError::NotFound)?;

        if owner.user_id == endorser.value() {
            return Err(EndorseSkillError::OwnSkill);
        }

        let inserted = self
            .endorsements
            .insert_if_absent(skill_id, endorser.value())
            .await
            .map_err(|e| EndorseSkillError::RepositoryError(e.to_string()))?;

        if let Some(endorsement) = inserted {
            info!(skill_id, endorser = %endorser, "Skill endorsed");
            return Ok(EndorseOutcome::Created(endorsement));
        }

        // Lost the race or a repeat call; the existing row is authoritative
        let existing = self
            .endorsements
            .find(skill_id, endorser.value())
            .await
            .map_err(|e| EndorseSkillError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                EndorseSkillError::RepositoryError(
                    "endorsement vanished after conflicting insert".to_string(),
                )
            })?;

        Ok(EndorseOutcome::AlreadyEndorsed(existing))
    }
}
