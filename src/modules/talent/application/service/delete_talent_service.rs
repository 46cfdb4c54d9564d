use async_trait::async_trait;
use tracing::info;

use crate::auth::application::domain::entities::UserId;
use crate::modules::talent::application::ports::incoming::use_cases::{
    DeleteTalentError, DeleteTalentUseCase,
};
use crate::modules::talent::application::ports::outgoing::{
    TalentQuery, TalentRepository, TalentRepositoryError,
};

pub struct DeleteTalentService<Q, R>
where
    Q: TalentQuery,
    R: TalentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteTalentService<Q, R>
where
    Q: TalentQuery,
    R: TalentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteTalentUseCase for DeleteTalentService<Q, R>
where
    Q: TalentQuery,
    R: TalentRepository,
{
    async fn execute(&self, caller: UserId, talent_id: i32) -> Result<(), DeleteTalentError> {
        let owner = self
            .query
            .find_owner(talent_id)
            .await
            .map_err(|e| DeleteTalentError::RepositoryError(e.to_string()))?
            .ok_or(DeleteTalentError::NotFound)?;

        if owner.user_id != caller.value() {
            return Err(DeleteTalentError::Forbidden);
        }

        self.repository
            .delete_talent(talent_id)
            .await
            .map_err(|e| match e {
                TalentRepositoryError::NotFound => DeleteTalentError::NotFound,
                TalentRepositoryError::DatabaseError(msg) => DeleteTalentError::RepositoryError(msg),
            })?;

        info!(talent_id, "Talent deleted");
        Ok(())
    }
}
