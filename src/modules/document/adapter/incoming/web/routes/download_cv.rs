use actix_web::{get, http::header, web, HttpResponse, Responder};
use tracing::error;

use crate::modules::document::application::ports::incoming::use_cases::DownloadCvError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/mahasiswa/{id:\\d+}/download-cv/")]
pub async fn download_cv_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let profile_id = path.into_inner();

    match data.document.download_cv.execute(profile_id).await {
        Ok(file) => HttpResponse::Ok()
            .content_type("application/pdf")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.filename),
            ))
            .body(file.bytes),
        Err(DownloadCvError::NotFound) => {
            ApiResponse::not_found("PROFILE_NOT_FOUND", "Mahasiswa not found")
        }
        Err(DownloadCvError::QueryError(e)) => {
            error!(profile_id, error = %e, "Failed to load profile for CV");
            ApiResponse::internal_error()
        }
        Err(DownloadCvError::RenderFailed(e)) => {
            error!(profile_id, error = %e, "CV rendering failed");
            ApiResponse::internal_error_with(&e)
        }
    }
}
