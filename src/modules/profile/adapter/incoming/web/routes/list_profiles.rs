use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::profile::application::domain::listing::{ProfileListFilter, ProfileOrdering};
use crate::shared::api::ApiResponse;
use crate::shared::pagination::PageRequest;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct ListProfilesQuery {
    pub prodi: Option<String>,
    pub fakultas: Option<String>,
    pub angkatan: Option<String>,
    pub is_active: Option<bool>,
    pub search: Option<String>,
    pub ordering: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[get("/api/mahasiswa/")]
pub async fn list_profiles_handler(
    query: web::Query<ListProfilesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let ordering = match ProfileOrdering::parse_optional(query.ordering.as_deref()) {
        Ok(ordering) => ordering,
        Err(e) => return ApiResponse::bad_request("INVALID_ORDERING", &e.to_string()),
    };

    let filter = ProfileListFilter {
        prodi: non_blank(query.prodi),
        fakultas: non_blank(query.fakultas),
        angkatan: non_blank(query.angkatan),
        is_active: query.is_active,
        search: non_blank(query.search),
        ordering,
    };
    let page = PageRequest::new(query.page, query.per_page);

    match data.profile.list.execute(filter, page).await {
        Ok(result) => ApiResponse::success(result),
        Err(e) => {
            error!(error = %e, "Failed to list profiles");
            ApiResponse::internal_error()
        }
    }
}
