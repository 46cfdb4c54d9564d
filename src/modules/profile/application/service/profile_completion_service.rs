use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::profile::application::domain::completion::Completion;
use crate::modules::profile::application::ports::incoming::use_cases::{
    CompletionReport, ProfileCompletionError, ProfileCompletionUseCase,
};
use crate::modules::profile::application::ports::outgoing::ProfileQuery;

pub struct ProfileCompletionService<Q: ProfileQuery> {
    query: Q,
}

impl<Q: ProfileQuery> ProfileCompletionService<Q> {
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q: ProfileQuery> ProfileCompletionUseCase for ProfileCompletionService<Q> {
    async fn execute(&self, caller: UserId) -> Result<CompletionReport, ProfileCompletionError> {
        let profile = self
            .query
            .find_by_user(caller.value())
            .await
            .map_err(|e| ProfileCompletionError::QueryError(e.to_string()))?
            .ok_or(ProfileCompletionError::NotFound)?;

        let mahasiswa = self
            .query
            .find_detail(profile.id)
            .await
            .map_err(|e| ProfileCompletionError::QueryError(e.to_string()))?
            .ok_or(ProfileCompletionError::NotFound)?;

        Ok(CompletionReport {
            completion: Completion::of(&profile),
            mahasiswa,
        })
    }
}
