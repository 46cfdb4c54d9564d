mod fetch_account;
pub mod login_user;
mod refresh_token;
pub mod register_user;

pub use fetch_account::fetch_account_handler;
pub use login_user::{login_user_handler, LoginRequestDto, LoginResponse, LoginUserInfo};
pub use refresh_token::refresh_token_handler;
pub use register_user::{
    register_user_handler, RegisterUserRequestDto, RegisterUserResponseBody, RegisteredUserDto,
    TokenPairDto,
};
