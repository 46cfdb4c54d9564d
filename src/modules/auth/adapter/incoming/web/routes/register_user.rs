use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::use_cases::register_user::{
    RegisterUserError, RegisterUserRequest, RegisterUserResponse,
};
use crate::shared::api::{collect_field_errors, ApiResponse};
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

/// Request body for account registration
#[derive(Serialize, Deserialize, ToSchema)]
pub struct RegisterUserRequestDto {
    #[schema(example = "budi.santoso")]
    pub username: Option<String>,

    #[schema(example = "budi@kampus.ac.id")]
    pub email: Option<String>,

    /// Minimum 8 characters
    #[schema(example = "rahasia123")]
    pub password: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterUserResponseBody {
    #[schema(example = "Registration successful")]
    message: String,
    user: RegisteredUserDto,
    tokens: TokenPairDto,
}

#[derive(Serialize, ToSchema)]
pub struct RegisteredUserDto {
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    id: String,
    username: String,
    email: String,
}

#[derive(Serialize, ToSchema)]
pub struct TokenPairDto {
    pub access: String,
    pub refresh: String,
}

impl From<RegisterUserResponse> for RegisterUserResponseBody {
    fn from(response: RegisterUserResponse) -> Self {
        Self {
            message: "Registration successful".to_string(),
            user: RegisteredUserDto {
                id: response.user.id.to_string(),
                username: response.user.username,
                email: response.user.email,
            },
            tokens: TokenPairDto {
                access: response.tokens.access,
                refresh: response.tokens.refresh,
            },
        }
    }
}

/// Register a student account
#[utoipa::path(
    post,
    path = "/api/accounts/register/",
    tag = "accounts",
    request_body = RegisterUserRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<RegisterUserResponseBody>)),
        (status = 400, description = "Validation failed or username/email taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/accounts/register/")]
pub async fn register_user_handler(
    req: web::Json<RegisterUserRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match RegisterUserRequest::new(dto.username, dto.email, dto.password) {
        Ok(request) => request,
        Err(e) => {
            return ApiResponse::validation_error(
                "Invalid registration data",
                collect_field_errors(e.fields),
            )
        }
    };

    info!(username = %request.username(), "Registration attempt");

    match data.auth.register.execute(request).await {
        Ok(response) => {
            info!(user_id = %response.user.id, "User registered");
            ApiResponse::created(RegisterUserResponseBody::from(response))
        }

        Err(RegisterUserError::UsernameTaken) => {
            warn!("Registration rejected: username taken");
            ApiResponse::bad_request("USERNAME_ALREADY_EXISTS", "Username already exists")
        }

        Err(RegisterUserError::EmailTaken) => {
            warn!("Registration rejected: email taken");
            ApiResponse::bad_request("EMAIL_ALREADY_EXISTS", "Email already exists")
        }

        Err(e) => {
            error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::register_user::{
        IRegisterUserUseCase, RegisteredUser,
    };
    use crate::auth::application::use_cases::AuthTokens;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use uuid::Uuid;

    struct MockRegister {
        result: Result<RegisterUserResponse, RegisterUserError>,
    }

    #[async_trait]
    impl IRegisterUserUseCase for MockRegister {
        async fn execute(
            &self,
            _request: RegisterUserRequest,
        ) -> Result<RegisterUserResponse, RegisterUserError> {
            self.result.clone()
        }
    }

    fn registered() -> RegisterUserResponse {
        RegisterUserResponse {
            user: RegisteredUser {
                id: Uuid::new_v4(),
                username: "budi".into(),
                email: "budi@kampus.ac.id".into(),
            },
            tokens: AuthTokens {
                access: "a.b.c".into(),
                refresh: "d.e.f".into(),
            },
        }
    }

    fn body() -> Value {
        json!({
            "username": "budi",
            "email": "budi@kampus.ac.id",
            "password": "rahasia123"
        })
    }

    #[actix_web::test]
    async fn register_returns_created_with_tokens() {
        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegister {
                result: Ok(registered()),
            })
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/accounts/register/")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["user"]["username"], "budi");
        assert_eq!(body["data"]["tokens"]["access"], "a.b.c");
        assert_eq!(body["data"]["tokens"]["refresh"], "d.e.f");
    }

    #[actix_web::test]
    async fn missing_fields_are_reported_per_field() {
        let state = TestAppStateBuilder::default().build();
        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/accounts/register/")
            .set_json(json!({"username": "budi"}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert!(body["error"]["fields"]["email"].is_array());
        assert!(body["error"]["fields"]["password"].is_array());
        assert!(body["error"]["fields"].get("username").is_none());
    }

    #[actix_web::test]
    async fn taken_email_is_bad_request() {
        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegister {
                result: Err(RegisterUserError::EmailTaken),
            })
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/accounts/register/")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "EMAIL_ALREADY_EXISTS");
    }

    #[actix_web::test]
    async fn repository_failure_is_internal_error() {
        let state = TestAppStateBuilder::default()
            .with_register_user(MockRegister {
                result: Err(RegisterUserError::RepositoryError("down".into())),
            })
            .build();
        let app =
            test::init_service(App::new().app_data(state).service(register_user_handler)).await;

        let req = test::TestRequest::post()
            .uri("/api/accounts/register/")
            .set_json(body())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    }
}
