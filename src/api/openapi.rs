use actix_web::{get, HttpResponse, Responder};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{ErrorDetail, ErrorResponse};
use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LoginUserInfo, RegisterUserRequestDto,
    RegisterUserResponseBody, RegisteredUserDto, TokenPairDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Talenta Mahasiswa API",
        version = "1.0.0",
        description = "Student talent directory: profiles, skills, portfolio and documents"
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::register_user::register_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user::login_user_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,
            RegisterUserRequestDto,
            RegisterUserResponseBody,
            RegisteredUserDto,
            TokenPairDto,
            LoginRequestDto,
            LoginResponse,
            LoginUserInfo
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "accounts", description = "Registration and login"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "BearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from /api/accounts/login/"))
                        .build(),
                ),
            )
        }
    }
}

/// Serves the generated document as JSON.
#[get("/api/openapi.json")]
pub async fn openapi_json() -> impl Responder {
    HttpResponse::Ok().json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[::core::prelude::v1::test]
    fn document_lists_account_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/accounts/register/"));
        assert!(doc.paths.paths.contains_key("/api/accounts/login/"));
    }

    #[actix_web::test]
    async fn openapi_json_is_served() {
        let app = test::init_service(App::new().service(openapi_json)).await;
        let req = test::TestRequest::get().uri("/api/openapi.json").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["info"]["title"], "Talenta Mahasiswa API");
        assert!(body["components"]["securitySchemes"]["BearerAuth"].is_object());
    }
}
