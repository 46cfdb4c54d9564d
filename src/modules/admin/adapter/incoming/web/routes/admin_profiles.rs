use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AdminUser;
use crate::modules::admin::application::domain::entities::{ActivityStatus, AdminProfileFilter};
use crate::modules::profile::application::domain::listing::ProfileOrdering;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AdminProfilesQuery {
    pub search: Option<String>,
    pub status: Option<String>,
    pub order_by: Option<String>,
}

#[get("/api/accounts/admin/mahasiswa/")]
pub async fn admin_profiles_handler(
    _admin: AdminUser,
    query: web::Query<AdminProfilesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let ordering = match ProfileOrdering::parse_optional(query.order_by.as_deref()) {
        Ok(ordering) => ordering,
        Err(e) => return ApiResponse::bad_request("INVALID_ORDERING", &e.to_string()),
    };

    let filter = AdminProfileFilter {
        search: query.search,
        status: ActivityStatus::parse_lenient(query.status.as_deref()),
        ordering,
    };

    match data.admin.search_profiles.execute(filter).await {
        Ok(list) => ApiResponse::success(list),
        Err(e) => {
            error!(error = %e, "Admin profile search failed");
            ApiResponse::internal_error()
        }
    }
}
