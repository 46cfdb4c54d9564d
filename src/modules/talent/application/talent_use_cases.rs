use std::sync::Arc;

use crate::modules::talent::application::ports::incoming::use_cases::{
    CreateTalentUseCase, DeleteTalentUseCase, GetTalentUseCase, ListTalentsUseCase,
    UpdateTalentUseCase,
};

#[derive(Clone)]
pub struct TalentUseCases {
    pub list: Arc<dyn ListTalentsUseCase + Send + Sync>,
    pub get: Arc<dyn GetTalentUseCase + Send + Sync>,
    pub create: Arc<dyn CreateTalentUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTalentUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteTalentUseCase + Send + Sync>,
}
