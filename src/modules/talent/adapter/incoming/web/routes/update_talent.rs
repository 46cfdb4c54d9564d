use actix_web::{patch, put, web, HttpResponse, Responder};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::auth::AuthenticatedUser;
use crate::modules::talent::application::domain::entities::TalentPatch;
use crate::modules::talent::application::ports::incoming::use_cases::UpdateTalentError;
use crate::shared::api::{collect_field_errors, ApiResponse};
use crate::shared::patch_field::PatchField;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct PatchTalentRequest {
    #[serde(default)]
    pub judul: PatchField<String>,
    #[serde(default)]
    pub deskripsi: PatchField<String>,
    #[serde(default)]
    pub kategori: PatchField<String>,
    #[serde(default)]
    pub link_portfolio: PatchField<String>,
    #[serde(default)]
    pub gambar: PatchField<String>,
    #[serde(default)]
    pub tanggal_mulai: PatchField<NaiveDate>,
    #[serde(default)]
    pub tanggal_selesai: PatchField<NaiveDate>,
}

/// Full replacement; omitted optional fields are cleared.
#[derive(Debug, Deserialize)]
pub struct PutTalentRequest {
    pub judul: Option<String>,
    pub deskripsi: Option<String>,
    pub kategori: Option<String>,
    pub link_portfolio: Option<String>,
    pub gambar: Option<String>,
    pub tanggal_mulai: Option<NaiveDate>,
    pub tanggal_selesai: Option<NaiveDate>,
}

fn replace<T>(value: Option<T>) -> PatchField<T> {
    match value {
        Some(v) => PatchField::Value(v),
        None => PatchField::Null,
    }
}

fn replace_text(value: Option<String>) -> PatchField<String> {
    replace(value.filter(|v| !v.trim().is_empty()))
}

async fn apply(
    user: AuthenticatedUser,
    talent_id: i32,
    patch: TalentPatch,
    data: web::Data<AppState>,
) -> HttpResponse {
    match data.talent.update.execute(user.id(), talent_id, patch).await {
        Ok(updated) => ApiResponse::success(updated),

        Err(UpdateTalentError::NotFound) => {
            ApiResponse::not_found("TALENT_NOT_FOUND", "Talent not found")
        }

        Err(UpdateTalentError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only modify your own talents")
        }

        Err(UpdateTalentError::Validation(e)) => {
            ApiResponse::validation_error("Invalid talent data", collect_field_errors(e.fields))
        }

        Err(UpdateTalentError::RepositoryError(e)) => {
            error!(talent_id, error = %e, "Failed to update talent");
            ApiResponse::internal_error()
        }
    }
}

#[patch("/api/talents/{id:\\d+}/")]
pub async fn patch_talent_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<PatchTalentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();
    let patch = TalentPatch {
        judul: req.judul,
        deskripsi: req.deskripsi,
        kategori: req.kategori,
        link_portfolio: req.link_portfolio,
        gambar: req.gambar,
        tanggal_mulai: req.tanggal_mulai,
        tanggal_selesai: req.tanggal_selesai,
    };

    apply(user, path.into_inner(), patch, data).await
}

#[put("/api/talents/{id:\\d+}/")]
pub async fn put_talent_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<PutTalentRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = req.into_inner();

    // Required fields go through as empty strings so validation names them.
    let patch = TalentPatch {
        judul: PatchField::Value(req.judul.unwrap_or_default()),
        deskripsi: PatchField::Value(req.deskripsi.unwrap_or_default()),
        kategori: replace_text(req.kategori),
        link_portfolio: replace_text(req.link_portfolio),
        gambar: replace_text(req.gambar),
        tanggal_mulai: replace(req.tanggal_mulai),
        tanggal_selesai: replace(req.tanggal_selesai),
    };

    apply(user, path.into_inner(), patch, data).await
}
