use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillView;
use crate::modules::skill::application::ports::incoming::use_cases::{
    ListSkillsError, ListSkillsUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillQuery;

pub struct ListSkillsService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> ListSkillsService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListSkillsUseCase for ListSkillsService<Q>
where
    Q: SkillQuery,
{
    async fn execute(&self, profile_id: Option<i32>) -> Result<Vec<SkillView>, ListSkillsError> {
        self.query
            .list(profile_id)
            .await
            .map_err(|e| ListSkillsError::QueryError(e.to_string()))
    }
}
