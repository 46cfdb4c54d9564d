use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::talent::application::domain::entities::{NewTalent, TalentRecord};
use crate::modules::talent::application::ports::incoming::use_cases::{
    CreateTalentError, CreateTalentUseCase,
};
use crate::modules::talent::application::ports::outgoing::{TalentQuery, TalentRepository};

pub struct CreateTalentService<Q, R>
where
    Q: TalentQuery,
    R: TalentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateTalentService<Q, R>
where
    Q: TalentQuery,
    R: TalentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateTalentUseCase for CreateTalentService<Q, R>
where
    Q: TalentQuery,
    R: TalentRepository,
{
    async fn execute(
        &self,
        caller: UserId,
        talent: NewTalent,
    ) -> Result<TalentRecord, CreateTalentError> {
        talent.validate().map_err(CreateTalentError::Validation)?;

        let profile_id = self
            .query
            .find_profile_id_by_user(caller.value())
            .await
            .map_err(|e| CreateTalentError::RepositoryError(e.to_string()))?
            .ok_or(CreateTalentError::ProfileRequired)?;

        let record = self
            .repository
            .create_talent(
                profile_id,
                NewTalent {
                    judul: talent.judul.trim().to_string(),
                    ..talent
                },
            )
            .await
            .map_err(|e| CreateTalentError::RepositoryError(e.to_string()))?;

        info!(talent_id = record.id, profile_id, "Talent created");

        Ok(record)
    }
}
