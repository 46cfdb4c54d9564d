use async_trait::async_trait;

use crate::auth::application::domain::entities::UserId;
use crate::modules::skill::application::domain::entities::{SkillPatch, SkillView};
use crate::modules::skill::application::ports::incoming::use_cases::{
    UpdateSkillError, UpdateSkillUseCase,
};
use crate::modules::skill::application::ports::outgoing::{
    SkillQuery, SkillRepository, SkillRepositoryError,
};
use crate::shared::patch_field::PatchField;

pub struct UpdateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateSkillUseCase for UpdateSkillService<Q, R>
where
    Q: SkillQuery,
    R: SkillRepository,
{
    async fn execute(
        &self,
        caller: UserId,
        skill_id: i32,
        mut patch: SkillPatch,
    ) -> Result<SkillView, UpdateSkillError> {
        let owner = self
            .query
            .find_owner(skill_id)
            .await
            .map_err(|e| UpdateSkillError::RepositoryError(e.to_string()))?
            .ok_or(UpdateSkillError::NotFound)?;

        if owner.user_id != caller.value() {
            return Err(UpdateSkillError::Forbidden);
        }

        patch.validate().map_err(UpdateSkillError::Validation)?;

        if let PatchField::Value(nama) = &patch.nama {
            patch.nama = PatchField::Value(nama.trim().to_string());
        }

        if !patch.is_empty() {
            self.repository
                .patch_skill(skill_id, patch)
                .await
                .map_err(|e| match e {
                    SkillRepositoryError::NotFound => UpdateSkillError::NotFound,
                    SkillRepositoryError::DatabaseError(msg) => {
                        UpdateSkillError::RepositoryError(msg)
                    }
                })?;
        }

        self.query
            .find_by_id(skill_id)
            .await
            .map_err(|e| UpdateSkillError::RepositoryError(e.to_string()))?
            .ok_or(UpdateSkillError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::skill::application::service::fakes::InMemorySkills;
    use uuid::Uuid;

    fn store(owner: Uuid) -> InMemorySkills {
        InMemorySkills::default()
            .with_profile(1, owner)
            .with_skill(10, 1, "Python")
    }

    #[tokio::test]
    async fn owner_can_rename_and_clear_level() {
        let owner = Uuid::new_v4();
        let store = store(owner);
        let service = UpdateSkillService::new(store.clone(), store.clone());

        let view = service
            .execute(
                UserId::from(owner),
                10,
                SkillPatch {
                    nama: PatchField::Value(" Python 3 ".into()),
                    level: PatchField::Null,
                },
            )
            .await
            .unwrap();

        assert_eq!(view.nama, "Python 3");
        assert_eq!(view.level, None);
        assert_eq!(store.skill(10).unwrap().nama, "Python 3");
    }

    #[tokio::test]
    async fn stranger_is_forbidden() {
        let store = store(Uuid::new_v4());
        let service = UpdateSkillService::new(store.clone(), store);

        let err = service
            .execute(UserId::from(Uuid::new_v4()), 10, SkillPatch::default())
            .await
            .unwrap_err();

        assert!(matches!(err, UpdateSkillError::Forbidden));
    }

    #[tokio::test]
    async fn unknown_skill_is_not_found() {
        let owner = Uuid::new_v4();
        let store = store(owner);
        let service = UpdateSkillService::new(store.clone(), store);

        let err = service
            .execute(UserId::from(owner), 99, SkillPatch::default())
            .await
            .unwrap_err();

        assert!(matches!(err, UpdateSkillError::NotFound));
    }
}
