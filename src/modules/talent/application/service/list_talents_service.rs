use async_trait::async_trait;

use crate::modules::talent::application::domain::entities::TalentRecord;
use crate::modules::talent::application::ports::incoming::use_cases::{
    ListTalentsError, ListTalentsUseCase,
};
use crate::modules::talent::application::ports::outgoing::TalentQuery;

pub struct ListTalentsService<Q>
where
    Q: TalentQuery,
{
    query: Q,
}

impl<Q> ListTalentsService<Q>
where
    Q: TalentQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTalentsUseCase for ListTalentsService<Q>
where
    Q: TalentQuery,
{
    async fn execute(
        &self,
        profile_id: Option<i32>,
    ) -> Result<Vec<TalentRecord>, ListTalentsError> {
        self.query
            .list(profile_id)
            .await
            .map_err(|e| ListTalentsError::QueryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::talent::application::service::fakes::InMemoryTalents;

    #[tokio::test]
    async fn newest_first_and_filtered_by_profile() {
        let store = InMemoryTalents::default()
            .with_talent(1, 1, "Old")
            .with_talent(2, 2, "Other")
            .with_talent(3, 1, "New");
        let service = ListTalentsService::new(store);

        let all = service.execute(None).await.unwrap();
        assert_eq!(all.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 2, 1]);

        let mine = service.execute(Some(1)).await.unwrap();
        assert_eq!(mine.iter().map(|t| t.id).collect::<Vec<_>>(), vec![3, 1]);
    }
}
