use std::sync::Arc;

use crate::modules::skill::application::ports::incoming::use_cases::{
    CreateSkillUseCase, DeleteSkillUseCase, EndorseSkillUseCase, GetSkillUseCase,
    ListSkillsUseCase, RemoveEndorsementUseCase, UpdateSkillUseCase,
};

#[derive(Clone)]
pub struct SkillUseCases {
    pub list: Arc<dyn ListSkillsUseCase + Send + Sync>,
    pub get: Arc<dyn GetSkillUseCase + Send + Sync>,
    pub create: Arc<dyn CreateSkillUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateSkillUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteSkillUseCase + Send + Sync>,
    pub endorse: Arc<dyn EndorseSkillUseCase + Send + Sync>,
    pub remove_endorsement: Arc<dyn RemoveEndorsementUseCase + Send + Sync>,
}
