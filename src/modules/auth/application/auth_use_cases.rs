use std::sync::Arc;

use crate::auth::application::use_cases::{
    fetch_account::FetchAccountUseCase, login_user::ILoginUserUseCase,
    refresh_token::IRefreshTokenUseCase, register_user::IRegisterUserUseCase,
};

#[derive(Clone)]
pub struct AuthUseCases {
    pub register: Arc<dyn IRegisterUserUseCase + Send + Sync>,
    pub login: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub refresh: Arc<dyn IRefreshTokenUseCase + Send + Sync>,
    pub fetch_account: Arc<dyn FetchAccountUseCase + Send + Sync>,
}
