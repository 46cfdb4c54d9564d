use async_trait::async_trait;

use crate::modules::skill::application::domain::entities::SkillView;
use crate::modules::skill::application::ports::incoming::use_cases::{
    GetSkillError, GetSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::SkillQuery;

pub struct GetSkillService<Q>
where
    Q: SkillQuery,
{
    query: Q,
}

impl<Q> GetSkillService<Q>
where
    Q: SkillQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetSkillUseCase for GetSkillService<Q>
where
    Q: SkillQuery,
{
    async fn execute(&self, skill_id: i32) -> Result<SkillView, GetSkillError> {
        self.query
            .find_by_id(skill_id)
            .await
            .map_err(|e| GetSkillError::QueryError(e.to_string()))?
            .ok_or(GetSkillError::NotFound)
    }
}
