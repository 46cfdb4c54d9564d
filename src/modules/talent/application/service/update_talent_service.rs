use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::talent::application::domain::entities::{TalentPatch, TalentRecord};
use crate::modules::talent::application::ports::incoming::use_cases::{
    UpdateTalentError, UpdateTalentUseCase,
};
use crate::modules::talent::application::ports::outgoing::{
    TalentQuery, TalentRepository, TalentRepositoryError,
};
use crate::shared::patch_field::PatchField;

pub struct UpdateTalentService<Q, R>
where
    Q: TalentQuery,
    R: TalentRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateTalentService<Q, R>
where
    Q: TalentQuery,
    R: TalentRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateTalentUseCase for UpdateTalentService<Q, R>
where
    Q: TalentQuery,
    R: TalentRepository,
{
    async fn execute(
        &self,
        caller: UserId,
        talent_id: i32,
        mut patch: TalentPatch,
    ) -> Result<TalentRecord, UpdateTalentError> {
        let owner = self
            .query
            .find_owner(talent_id)
            .await
            .map_err(|e| UpdateTalentError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTalentError::NotFound)?;

        if owner.user_id != caller.value() {
            return Err(UpdateTalentError::Forbidden);
        }

        let current = self
            .query
            .find_by_id(talent_id)
            .await
            .map_err(|e| UpdateTalentError::RepositoryError(e.to_string()))?
            .ok_or(UpdateTalentError::NotFound)?;

        if patch.is_empty() {
            return Ok(current);
        }

        patch
            .merged_with(&current)
            .validate()
            .map_err(UpdateTalentError::Validation)?;

        if let PatchField::Value(judul) = &patch.judul {
            patch.judul = PatchField::Value(judul.trim().to_string());
        }

        self.repository
            .patch_talent(talent_id, patch)
            .await
            .map_err(|e| match e {
                TalentRepositoryError::NotFound => UpdateTalentError::NotFound,
                TalentRepositoryError::DatabaseError(msg) => UpdateTalentError::RepositoryError(msg),
            })
    }
}
