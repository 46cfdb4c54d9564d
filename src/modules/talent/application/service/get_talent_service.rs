use async_trait::async_trait;

use crate::modules::talent::application::domain::entities::TalentRecord;
use crate::modules::talent::application::ports::incoming::use_cases::{
    GetTalentError, GetTalentUseCase,
};
use crate::modules::talent::application::ports::outgoing::TalentQuery;

pub struct GetTalentService<Q>
where
    Q: TalentQuery,
{
    query: Q,
}

impl<Q> GetTalentService<Q>
where
    Q: TalentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetTalentUseCase for GetTalentService<Q>
where
    Q: TalentQuery,
{
    async fn execute(&self, talent_id: i32) -> Result<TalentRecord, GetTalentError> {
        self.query
            .find_by_id(talent_id)
            .await
            .map_err(|e| GetTalentError::QueryError(e.to_string()))?
            .ok_or(GetTalentError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::talent::application::service::fakes::InMemoryTalents;

    #[tokio::test]
    async fn returns_stored_talent_or_not_found() {
        let service = GetTalentService::new(InMemoryTalents::default().with_talent(4, 1, "Robot"));

        assert_eq!(service.execute(4).await.unwrap().judul, "Robot");
        assert!(matches!(
            service.execute(5).await,
            Err(GetTalentError::NotFound)
        ));
    }
}
