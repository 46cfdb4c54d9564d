use actix_web::{post, web, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::talent::application::domain::entities::NewTalent;
use crate::modules::talent::application::ports::incoming::use_cases::CreateTalentError;
use crate::shared::api::{collect_field_errors, ApiResponse};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateTalentRequest {
    pub judul: Option<String>,
    pub deskripsi: Option<String>,
    pub kategori: Option<String>,
    pub link_portfolio: Option<String>,
    pub gambar: Option<String>,
    pub tanggal_mulai: Option<NaiveDate>,
    pub tanggal_selesai: Option<NaiveDate>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[post("/api/talents/")]
pub async fn create_talent_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateTalentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    let talent = NewTalent {
        judul: req.judul.unwrap_or_default(),
        deskripsi: req.deskripsi.unwrap_or_default(),
        kategori: non_blank(req.kategori),
        link_portfolio: non_blank(req.link_portfolio),
        gambar: non_blank(req.gambar),
        tanggal_mulai: req.tanggal_mulai,
        tanggal_selesai: req.tanggal_selesai,
    };

    match data.talent.create.execute(user.id(), talent).await {
        Ok(created) => ApiResponse::created(created),

        Err(CreateTalentError::ProfileRequired) => ApiResponse::bad_request(
            "PROFILE_REQUIRED",
            "Create a mahasiswa profile before adding talents",
        ),

        Err(CreateTalentError::Validation(e)) => {
            ApiResponse::validation_error("Invalid talent data", collect_field_errors(e.fields))
        }

        Err(CreateTalentError::RepositoryError(e)) => {
            error!(user_id = %user.user_id, error = %e, "Failed to create talent");
            ApiResponse::internal_error()
        }
    }
}
